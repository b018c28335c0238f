//! Bind parameter handles and the identity-deduplicated parameter list.
//!
//! A [`Param`] is an `Arc`-backed handle: cloning it shares the same
//! parameter, and two handles are "the same parameter" only when they point at
//! the same allocation. Two parameters with equal names and values are still
//! distinct unless one was cloned from the other.

use crate::error::{SqlError, SqlResult};
use bytes::BytesMut;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use tokio_postgres::types::{IsNull, ToSql, Type};

/// SQL NULL of any type, bound for parameters that carry no value
/// (output / return value slots).
#[derive(Debug)]
struct NullValue;

impl ToSql for NullValue {
    fn to_sql(&self, _ty: &Type, _out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        Ok(IsNull::Yes)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

static NULL_VALUE: NullValue = NullValue;

/// Direction of a bind parameter, as understood by the executing driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamDirection {
    #[default]
    Input,
    Output,
    InputOutput,
    ReturnValue,
}

struct ParamInner {
    name: String,
    value: Option<Arc<dyn ToSql + Send + Sync>>,
    sql_type: Option<Type>,
    direction: ParamDirection,
}

/// A clone-friendly, identity-comparable bind parameter.
///
/// The builders never inspect the value. They only track identity so that a
/// parameter reused across several expressions is reported once.
#[derive(Clone)]
pub struct Param(Arc<ParamInner>);

impl Param {
    /// Create an input parameter with a value.
    ///
    /// The name is the placeholder text written into SQL (`$1`, `@id`, `:id`...).
    pub fn new<T: ToSql + Send + Sync + 'static>(name: impl Into<String>, value: T) -> SqlResult<Self> {
        Self::build(name.into(), Some(Arc::new(value)), None, ParamDirection::Input)
    }

    /// Create an input parameter with an explicit SQL type.
    pub fn typed<T: ToSql + Send + Sync + 'static>(
        name: impl Into<String>,
        value: T,
        sql_type: Type,
    ) -> SqlResult<Self> {
        Self::build(
            name.into(),
            Some(Arc::new(value)),
            Some(sql_type),
            ParamDirection::Input,
        )
    }

    /// Create a value-less output parameter.
    pub fn output(name: impl Into<String>, sql_type: Type) -> SqlResult<Self> {
        Self::build(name.into(), None, Some(sql_type), ParamDirection::Output)
    }

    /// Create a parameter with every attribute spelled out.
    pub fn with_direction<T: ToSql + Send + Sync + 'static>(
        name: impl Into<String>,
        value: Option<T>,
        sql_type: Option<Type>,
        direction: ParamDirection,
    ) -> SqlResult<Self> {
        let value = value.map(|v| Arc::new(v) as Arc<dyn ToSql + Send + Sync>);
        Self::build(name.into(), value, sql_type, direction)
    }

    fn build(
        name: String,
        value: Option<Arc<dyn ToSql + Send + Sync>>,
        sql_type: Option<Type>,
        direction: ParamDirection,
    ) -> SqlResult<Self> {
        if name.trim().is_empty() {
            return Err(SqlError::invalid_argument("Parameter name cannot be empty"));
        }
        Ok(Param(Arc::new(ParamInner {
            name,
            value,
            sql_type,
            direction,
        })))
    }

    /// Placeholder name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Declared SQL type, if any.
    pub fn sql_type(&self) -> Option<&Type> {
        self.0.sql_type.as_ref()
    }

    pub fn direction(&self) -> ParamDirection {
        self.0.direction
    }

    /// Whether a value was supplied.
    pub fn has_value(&self) -> bool {
        self.0.value.is_some()
    }

    /// Get the value as a ToSql trait object; value-less parameters bind NULL.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        match &self.0.value {
            Some(value) => &**value as &(dyn ToSql + Sync),
            None => &NULL_VALUE as &(dyn ToSql + Sync),
        }
    }

    /// Identity comparison: true only for handles sharing one allocation.
    pub fn same_as(&self, other: &Param) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("name", &self.0.name)
            .field("sql_type", &self.0.sql_type)
            .field("direction", &self.0.direction)
            .field("value", &self.0.value.as_ref().map(|_| "<dyn ToSql>"))
            .finish()
    }
}

/// An ordered list of parameters without identity duplicates.
///
/// The first occurrence of a parameter fixes its position.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    params: Vec<Param>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a parameter unless the same handle is already present.
    ///
    /// Returns `true` when the parameter was appended.
    pub fn push(&mut self, param: Param) -> bool {
        if self.contains(&param) {
            return false;
        }
        self.params.push(param);
        true
    }

    /// Check whether this exact handle is present.
    pub fn contains(&self, param: &Param) -> bool {
        self.params.iter().any(|p| p.same_as(param))
    }

    /// 0-based position of the handle, if present.
    pub fn position(&self, param: &Param) -> Option<usize> {
        self.params.iter().position(|p| p.same_as(param))
    }

    pub fn get(&self, index: usize) -> Option<&Param> {
        self.params.get(index)
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Param> {
        self.params.iter()
    }

    /// Placeholder names in list order.
    pub fn names(&self) -> Vec<&str> {
        self.params.iter().map(Param::name).collect()
    }

    /// Get all parameters as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }

    /// Merge another list, keeping first-occurrence order.
    pub fn extend(&mut self, other: &ParamList) {
        self.extend_params(other.params.iter().cloned());
    }

    /// Merge parameters from an iterator, keeping first-occurrence order.
    pub fn extend_params(&mut self, params: impl IntoIterator<Item = Param>) {
        for param in params {
            self.push(param);
        }
    }

    /// Clear all parameters.
    pub fn clear(&mut self) {
        self.params.clear();
    }
}

impl FromIterator<Param> for ParamList {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        let mut list = ParamList::new();
        list.extend_params(iter);
        list
    }
}

impl<'a> IntoIterator for &'a ParamList {
    type Item = &'a Param;
    type IntoIter = std::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl IntoIterator for ParamList {
    type Item = Param;
    type IntoIter = std::vec::IntoIter<Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}
