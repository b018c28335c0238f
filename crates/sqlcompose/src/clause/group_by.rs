use super::{Clause, ClauseKind, ConditionClause};
use crate::cache::TextCache;
use crate::combined::Components;
use crate::error::SqlResult;
use crate::expr::{Expr, IntoExpr};
use crate::param::ParamList;

/// `GROUP BY g0, g1 [HAVING <cond>]`
///
/// Grouping expressions render through their reference form, so an aliased
/// projection groups by its alias. The HAVING clause is owned here and only
/// rendered while at least one grouping expression exists.
#[derive(Clone, Debug)]
pub struct GroupByClause {
    groups: Components,
    having: ConditionClause,
    cache: TextCache,
}

impl Default for GroupByClause {
    fn default() -> Self {
        Self {
            groups: Components::unique(),
            having: ConditionClause::having_clause(),
            cache: TextCache::new(),
        }
    }
}

impl GroupByClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_expression(&mut self, expr: impl IntoExpr) -> bool {
        let added = self.groups.push(expr.into_expr());
        self.cache.invalidate();
        added
    }

    pub fn add_expressions<I>(&mut self, exprs: I) -> usize
    where
        I: IntoIterator<Item = Option<Expr>>,
    {
        let added = self.groups.add(exprs);
        self.cache.invalidate();
        added
    }

    pub fn remove_expression(&mut self, expr: &Expr) -> bool {
        let removed = self.groups.remove(expr);
        self.cache.invalidate();
        removed
    }

    pub fn clear_expressions(&mut self) {
        self.groups.clear();
        self.cache.invalidate();
    }

    pub fn expressions(&self) -> &Components {
        &self.groups
    }

    pub fn having(&self) -> &ConditionClause {
        &self.having
    }

    /// Mutable access to HAVING; clears the cached GROUP BY text.
    pub fn having_mut(&mut self) -> &mut ConditionClause {
        self.cache.invalidate();
        &mut self.having
    }

    pub fn set_having(&mut self, condition: impl IntoExpr) {
        self.having_mut().set_condition(condition);
    }
}

impl Clause for GroupByClause {
    fn kind(&self) -> ClauseKind {
        ClauseKind::GroupBy
    }

    fn is_available(&self) -> bool {
        !self.groups.is_empty()
    }

    fn text(&self) -> SqlResult<&str> {
        if !self.is_available() {
            return Ok("");
        }
        self.cache.get_or_try_render(|| {
            let mut text = format!("GROUP BY {}", self.groups.join_references());
            if self.having.is_available() {
                text.push(' ');
                text.push_str(self.having.text()?);
            }
            Ok(text)
        })
    }

    fn parameters(&self) -> ParamList {
        let mut params = self.groups.parameters().clone();
        if self.is_available() {
            params.extend(&self.having.parameters());
        }
        params
    }
}
