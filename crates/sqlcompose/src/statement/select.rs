use super::{SqlStatement, StatementKind, cached_text};
use crate::cache::TextCache;
use crate::clause::{
    Clause, ConditionClause, FromClause, GroupByClause, OrderByClause, SelectClause, SortOrder,
};
use crate::error::SqlResult;
use crate::expr::{Expr, IntoExpr};

/// `SELECT ... [FROM ...] [WHERE ...] [GROUP BY ... [HAVING ...]] [ORDER BY ...]`
///
/// Valid once the projection has at least one expression.
#[derive(Clone, Debug)]
pub struct SelectStatement {
    select: SelectClause,
    from: FromClause,
    where_clause: ConditionClause,
    group_by: GroupByClause,
    order_by: OrderByClause,
    cache: TextCache,
}

impl Default for SelectStatement {
    fn default() -> Self {
        Self {
            select: SelectClause::new(),
            from: FromClause::new(),
            where_clause: ConditionClause::where_clause(),
            group_by: GroupByClause::new(),
            order_by: OrderByClause::new(),
            cache: TextCache::new(),
        }
    }
}

impl SelectStatement {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Clause access ====================

    pub fn select(&self) -> &SelectClause {
        &self.select
    }

    pub fn select_mut(&mut self) -> &mut SelectClause {
        self.cache.invalidate();
        &mut self.select
    }

    pub fn from(&self) -> &FromClause {
        &self.from
    }

    pub fn from_mut(&mut self) -> &mut FromClause {
        self.cache.invalidate();
        &mut self.from
    }

    pub fn where_clause(&self) -> &ConditionClause {
        &self.where_clause
    }

    pub fn where_mut(&mut self) -> &mut ConditionClause {
        self.cache.invalidate();
        &mut self.where_clause
    }

    pub fn group_by(&self) -> &GroupByClause {
        &self.group_by
    }

    pub fn group_by_mut(&mut self) -> &mut GroupByClause {
        self.cache.invalidate();
        &mut self.group_by
    }

    pub fn order_by(&self) -> &OrderByClause {
        &self.order_by
    }

    pub fn order_by_mut(&mut self) -> &mut OrderByClause {
        self.cache.invalidate();
        &mut self.order_by
    }

    // ==================== Shortcuts ====================

    pub fn add_expression(&mut self, expr: impl IntoExpr) -> bool {
        self.select_mut().add_expression(expr)
    }

    pub fn add_expressions<I>(&mut self, exprs: I) -> usize
    where
        I: IntoIterator<Item = Option<Expr>>,
    {
        self.select_mut().add_expressions(exprs)
    }

    pub fn set_distinct(&mut self, distinct: bool) {
        self.select_mut().set_distinct(distinct);
    }

    pub fn set_source(&mut self, source: impl IntoExpr) {
        self.from_mut().set_source(source);
    }

    pub fn inner_join(&mut self, source: impl IntoExpr, condition: impl IntoExpr) -> SqlResult<()> {
        self.from_mut().inner_join(source, condition)
    }

    pub fn left_join(&mut self, source: impl IntoExpr, condition: impl IntoExpr) -> SqlResult<()> {
        self.from_mut().left_join(source, condition)
    }

    pub fn set_condition(&mut self, condition: impl IntoExpr) {
        self.where_mut().set_condition(condition);
    }

    pub fn and_condition(&mut self, condition: impl IntoExpr) -> SqlResult<()> {
        self.where_mut().and_condition(condition)
    }

    pub fn or_condition(&mut self, condition: impl IntoExpr) -> SqlResult<()> {
        self.where_mut().or_condition(condition)
    }

    pub fn add_group_by(&mut self, expr: impl IntoExpr) -> bool {
        self.group_by_mut().add_expression(expr)
    }

    pub fn set_having(&mut self, condition: impl IntoExpr) {
        self.group_by_mut().set_having(condition);
    }

    pub fn add_order_by(&mut self, expr: impl IntoExpr, order: SortOrder) {
        self.order_by_mut().add(expr, order);
    }

    /// Wrap the rendered statement as a parenthesized subquery expression.
    pub fn to_subquery(&self) -> SqlResult<Expr> {
        let text = format!("({})", self.text()?);
        Ok(Expr::raw_with_params(text, self.parameters()))
    }
}

impl SqlStatement for SelectStatement {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn clauses(&self) -> Vec<&dyn Clause> {
        vec![
            &self.select as &dyn Clause,
            &self.from,
            &self.where_clause,
            &self.group_by,
            &self.order_by,
        ]
    }

    fn is_valid(&self) -> bool {
        self.select.is_available()
    }

    fn text(&self) -> SqlResult<&str> {
        cached_text(self, &self.cache)
    }
}
