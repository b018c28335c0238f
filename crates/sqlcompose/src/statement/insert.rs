use super::{SqlStatement, StatementKind, cached_text};
use crate::cache::TextCache;
use crate::clause::{Clause, FieldValueClause};
use crate::error::SqlResult;
use crate::expr::IntoExpr;

/// `INSERT INTO source (f0, ...) VALUES (v0, ...)`
#[derive(Clone, Debug)]
pub struct InsertStatement {
    fields: FieldValueClause,
    cache: TextCache,
}

impl Default for InsertStatement {
    fn default() -> Self {
        Self {
            fields: FieldValueClause::insert(),
            cache: TextCache::new(),
        }
    }
}

impl InsertStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `new()` followed by `set_source(target)`.
    pub fn into_target(target: impl IntoExpr) -> Self {
        let mut stmt = Self::new();
        stmt.set_source(target);
        stmt
    }

    pub fn fields(&self) -> &FieldValueClause {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldValueClause {
        self.cache.invalidate();
        &mut self.fields
    }

    pub fn set_source(&mut self, target: impl IntoExpr) {
        self.fields_mut().set_source(target);
    }

    pub fn add_field(&mut self, field: impl IntoExpr, value: impl IntoExpr) {
        self.fields_mut().add_field(field, value);
    }
}

impl SqlStatement for InsertStatement {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn clauses(&self) -> Vec<&dyn Clause> {
        vec![&self.fields as &dyn Clause]
    }

    fn is_valid(&self) -> bool {
        self.fields.is_available()
    }

    fn text(&self) -> SqlResult<&str> {
        cached_text(self, &self.cache)
    }
}
