use super::{Clause, ClauseKind};
use crate::cache::TextCache;
use crate::error::{SqlError, SqlResult};
use crate::expr::{Expr, IntoExpr};
use crate::operator::{Operator, ops};
use crate::param::ParamList;

/// How a [`FieldValueClause`] lays out its pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValueMode {
    /// `source (f0, f1) VALUES (v0, v1)`
    Insert,
    /// `source SET f0 = (v0), f1 = (v1)`
    Update,
}

/// Target source plus ordered `field → value` pairs.
///
/// Fields are keyed by rendered text; setting a field twice replaces its value
/// in place. The clause has no keyword of its own: the owning statement
/// supplies `INSERT INTO` or `UPDATE`.
#[derive(Clone, Debug)]
pub struct FieldValueClause {
    mode: FieldValueMode,
    source: Option<Expr>,
    fields: Vec<(Expr, Expr)>,
    cache: TextCache,
}

impl FieldValueClause {
    pub fn new(mode: FieldValueMode) -> Self {
        Self {
            mode,
            source: None,
            fields: Vec::new(),
            cache: TextCache::new(),
        }
    }

    pub fn insert() -> Self {
        Self::new(FieldValueMode::Insert)
    }

    pub fn update() -> Self {
        Self::new(FieldValueMode::Update)
    }

    pub fn mode(&self) -> FieldValueMode {
        self.mode
    }

    pub fn source(&self) -> Option<&Expr> {
        self.source.as_ref()
    }

    pub fn set_source(&mut self, source: impl IntoExpr) {
        self.source = Some(source.into_expr());
        self.cache.invalidate();
    }

    /// Set `field` to `value`, replacing any previous value for that field.
    pub fn add_field(&mut self, field: impl IntoExpr, value: impl IntoExpr) {
        let field = field.into_expr();
        let value = value.into_expr();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
        self.cache.invalidate();
    }

    pub fn remove_field(&mut self, field: &Expr) -> bool {
        let before = self.fields.len();
        self.fields.retain(|(f, _)| f != field);
        self.cache.invalidate();
        self.fields.len() != before
    }

    pub fn clear_fields(&mut self) {
        self.fields.clear();
        self.cache.invalidate();
    }

    /// Value assigned to `field`.
    pub fn value(&self, field: &Expr) -> SqlResult<&Expr> {
        self.fields
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v)
            .ok_or_else(|| SqlError::not_found(format!("field {field} has no value")))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&Expr, &Expr)> {
        self.fields.iter().map(|(f, v)| (f, v))
    }

    fn render(&self) -> SqlResult<String> {
        let Some(source) = &self.source else {
            return Err(SqlError::invalid_state("field-value clause has no source"));
        };
        if self.fields.is_empty() {
            return Err(SqlError::invalid_state("field-value clause has no fields"));
        }

        // Targets are always unqualified: PostgreSQL rejects `users.id` here.
        match self.mode {
            FieldValueMode::Insert => {
                let names: Vec<&str> = self.fields.iter().map(|(f, _)| f.field_name()).collect();
                let values: Vec<&str> = self.fields.iter().map(|(_, v)| v.text()).collect();
                Ok(format!(
                    "{} ({}) VALUES ({})",
                    source.text(),
                    names.join(", "),
                    values.join(", ")
                ))
            }
            FieldValueMode::Update => {
                let assignments = self
                    .fields
                    .iter()
                    .map(|(f, v)| {
                        let target = Expr::raw_with_params(f.field_name(), f.parameters().clone());
                        ops::ASSIGN.compute(&[&target, v]).map(|e| e.text().to_string())
                    })
                    .collect::<SqlResult<Vec<_>>>()?;
                Ok(format!("{} SET {}", source.text(), assignments.join(", ")))
            }
        }
    }
}

impl Clause for FieldValueClause {
    fn kind(&self) -> ClauseKind {
        ClauseKind::FieldValue
    }

    fn is_available(&self) -> bool {
        self.source.is_some() && !self.fields.is_empty()
    }

    fn text(&self) -> SqlResult<&str> {
        self.cache.get_or_try_render(|| self.render())
    }

    fn parameters(&self) -> ParamList {
        let mut params = self
            .source
            .as_ref()
            .map(|s| s.parameters().clone())
            .unwrap_or_default();
        for (field, value) in &self.fields {
            params.extend(field.parameters());
            params.extend(value.parameters());
        }
        params
    }
}
