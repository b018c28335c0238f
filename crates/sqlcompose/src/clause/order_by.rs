use super::{Clause, ClauseKind};
use crate::cache::TextCache;
use crate::error::{SqlError, SqlResult};
use crate::expr::{Expr, IntoExpr};
use crate::param::ParamList;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// `ORDER BY (e0) ASC, (e1) DESC`
///
/// One direction per expression. Adding an expression that is already
/// present keeps its position and replaces its direction.
#[derive(Clone, Debug, Default)]
pub struct OrderByClause {
    items: Vec<(Expr, SortOrder)>,
    params: ParamList,
    cache: TextCache,
}

impl OrderByClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, expr: impl IntoExpr, order: SortOrder) {
        let expr = expr.into_expr();
        self.params.extend(expr.parameters());
        // Re-adding keeps the position, only the direction changes
        match self.items.iter_mut().find(|(e, _)| *e == expr) {
            Some(slot) => slot.1 = order,
            None => self.items.push((expr, order)),
        }
        self.cache.invalidate();
    }

    pub fn asc(&mut self, expr: impl IntoExpr) {
        self.add(expr, SortOrder::Asc);
    }

    pub fn desc(&mut self, expr: impl IntoExpr) {
        self.add(expr, SortOrder::Desc);
    }

    /// Direction recorded for `expr`.
    pub fn direction(&self, expr: &Expr) -> SqlResult<SortOrder> {
        self.items
            .iter()
            .find(|(e, _)| e == expr)
            .map(|(_, order)| *order)
            .ok_or_else(|| SqlError::not_found(format!("{expr} is not in ORDER BY")))
    }

    pub fn remove(&mut self, expr: &Expr) -> bool {
        let before = self.items.len();
        self.items.retain(|(e, _)| e != expr);
        self.cache.invalidate();
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.params.clear();
        self.cache.invalidate();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Expr, SortOrder)> {
        self.items.iter().map(|(e, order)| (e, *order))
    }
}

impl Clause for OrderByClause {
    fn kind(&self) -> ClauseKind {
        ClauseKind::OrderBy
    }

    fn is_available(&self) -> bool {
        !self.items.is_empty()
    }

    fn text(&self) -> SqlResult<&str> {
        if !self.is_available() {
            return Ok("");
        }
        Ok(self.cache.get_or_render(|| {
            let items: Vec<String> = self
                .items
                .iter()
                .map(|(e, order)| format!("({}) {order}", e.reference_text()))
                .collect();
            format!("ORDER BY {}", items.join(", "))
        }))
    }

    fn parameters(&self) -> ParamList {
        self.params.clone()
    }
}
