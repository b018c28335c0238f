use super::{SqlStatement, StatementKind, cached_text};
use crate::cache::TextCache;
use crate::clause::{Clause, ConditionClause, FieldValueClause, FromClause};
use crate::error::SqlResult;
use crate::expr::IntoExpr;

/// `UPDATE target SET f0 = (v0), ... [FROM ...] [WHERE ...]`
#[derive(Clone, Debug)]
pub struct UpdateStatement {
    fields: FieldValueClause,
    from: FromClause,
    where_clause: ConditionClause,
    cache: TextCache,
}

impl Default for UpdateStatement {
    fn default() -> Self {
        Self {
            fields: FieldValueClause::update(),
            from: FromClause::new(),
            where_clause: ConditionClause::where_clause(),
            cache: TextCache::new(),
        }
    }
}

impl UpdateStatement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(target: impl IntoExpr) -> Self {
        let mut stmt = Self::new();
        stmt.set_target(target);
        stmt
    }

    pub fn fields(&self) -> &FieldValueClause {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldValueClause {
        self.cache.invalidate();
        &mut self.fields
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

    /// The table being updated.
    pub fn set_target(&mut self, target: impl IntoExpr) {
        self.fields_mut().set_source(target);
    }

    /// Extra `FROM` source joined into the update.
    pub fn set_source(&mut self, source: impl IntoExpr) {
        self.from_mut().set_source(source);
    }

    pub fn add_field(&mut self, field: impl IntoExpr, value: impl IntoExpr) {
        self.fields_mut().add_field(field, value);
    }

    pub fn set_condition(&mut self, condition: impl IntoExpr) {
        self.where_mut().set_condition(condition);
    }

    pub fn and_condition(&mut self, condition: impl IntoExpr) -> SqlResult<()> {
        self.where_mut().and_condition(condition)
    }
}

impl SqlStatement for UpdateStatement {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn clauses(&self) -> Vec<&dyn Clause> {
        vec![&self.fields as &dyn Clause, &self.from, &self.where_clause]
    }

    fn is_valid(&self) -> bool {
        self.fields.is_available()
    }

    fn text(&self) -> SqlResult<&str> {
        cached_text(self, &self.cache)
    }
}
