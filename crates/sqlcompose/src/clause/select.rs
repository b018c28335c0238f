use super::{Clause, ClauseKind};
use crate::cache::TextCache;
use crate::combined::Components;
use crate::error::SqlResult;
use crate::expr::{Expr, IntoExpr};
use crate::param::ParamList;

/// `SELECT [DISTINCT] e0, e1, ...`
///
/// Expressions are unique by rendered text; adding one twice is a no-op.
#[derive(Clone, Debug, Default)]
pub struct SelectClause {
    columns: Components,
    distinct: bool,
    cache: TextCache,
}

impl SelectClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one expression. Returns `false` if it was already selected.
    pub fn add_expression(&mut self, expr: impl IntoExpr) -> bool {
        let added = self.columns.push(expr.into_expr());
        self.cache.invalidate();
        added
    }

    /// Append present expressions, skipping `None` and duplicates.
    pub fn add_expressions<I>(&mut self, exprs: I) -> usize
    where
        I: IntoIterator<Item = Option<Expr>>,
    {
        let added = self.columns.add(exprs);
        self.cache.invalidate();
        added
    }

    pub fn remove_expression(&mut self, expr: &Expr) -> bool {
        let removed = self.columns.remove(expr);
        self.cache.invalidate();
        removed
    }

    pub fn clear_expressions(&mut self) {
        self.columns.clear();
        self.cache.invalidate();
    }

    pub fn set_distinct(&mut self, distinct: bool) {
        self.distinct = distinct;
        self.cache.invalidate();
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn expressions(&self) -> &Components {
        &self.columns
    }
}

impl Clause for SelectClause {
    fn kind(&self) -> ClauseKind {
        ClauseKind::Select
    }

    fn is_available(&self) -> bool {
        !self.columns.is_empty()
    }

    fn text(&self) -> SqlResult<&str> {
        if !self.is_available() {
            return Ok("");
        }
        Ok(self.cache.get_or_render(|| {
            let distinct = if self.distinct { "DISTINCT " } else { "" };
            format!("SELECT {distinct}{}", self.columns.join_text())
        }))
    }

    fn parameters(&self) -> ParamList {
        self.columns.parameters().clone()
    }
}
