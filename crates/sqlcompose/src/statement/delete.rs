use super::{SqlStatement, StatementKind, cached_text};
use crate::cache::TextCache;
use crate::clause::{Clause, ConditionClause, FromClause};
use crate::error::SqlResult;
use crate::expr::IntoExpr;

/// `DELETE FROM source [WHERE ...]`
#[derive(Clone, Debug)]
pub struct DeleteStatement {
    from: FromClause,
    where_clause: ConditionClause,
    cache: TextCache,
}

impl Default for DeleteStatement {
    fn default() -> Self {
        Self {
            from: FromClause::new(),
            where_clause: ConditionClause::where_clause(),
            cache: TextCache::new(),
        }
    }
}

impl DeleteStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_source(source: impl IntoExpr) -> Self {
        let mut stmt = Self::new();
        stmt.set_source(source);
        stmt
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

    pub fn set_source(&mut self, source: impl IntoExpr) {
        self.from_mut().set_source(source);
    }

    pub fn set_condition(&mut self, condition: impl IntoExpr) {
        self.where_mut().set_condition(condition);
    }

    pub fn and_condition(&mut self, condition: impl IntoExpr) -> SqlResult<()> {
        self.where_mut().and_condition(condition)
    }
}

impl SqlStatement for DeleteStatement {
    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn clauses(&self) -> Vec<&dyn Clause> {
        vec![&self.from as &dyn Clause, &self.where_clause]
    }

    fn is_valid(&self) -> bool {
        self.from.is_available()
    }

    fn text(&self) -> SqlResult<&str> {
        cached_text(self, &self.cache)
    }
}
