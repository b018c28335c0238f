//! The expression value: rendered SQL text plus its bind parameters.
//!
//! An [`Expr`] is immutable. Operators, functions, named objects and aliases
//! all produce `Expr` values, and clauses store them. Because the text is
//! fixed at construction there is nothing to invalidate here; caching happens
//! in the mutable containers that assemble expressions.
//!
//! Expressions derived from a named object also carry a *fullname*: the form
//! used when the object is referenced from another clause (GROUP BY and
//! ORDER BY render it instead of the text). Columns additionally keep their
//! bare name, which INSERT column lists and SET targets require.

use crate::error::SqlResult;
use crate::operator::Operator;
use crate::operator::ops;
use crate::param::{Param, ParamList};
use std::fmt;

/// Rendered SQL text with its ordered, de-duplicated bind parameters.
///
/// Two expressions are equal when their rendered text is equal.
#[derive(Clone, Debug)]
pub struct Expr {
    text: String,
    fullname: Option<String>,
    field_name: Option<String>,
    params: ParamList,
}

impl Expr {
    /// A raw SQL fragment without parameters.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fullname: None,
            field_name: None,
            params: ParamList::new(),
        }
    }

    /// A raw SQL fragment that references the given parameters.
    pub fn raw_with_params(text: impl Into<String>, params: impl IntoIterator<Item = Param>) -> Self {
        Self {
            text: text.into(),
            fullname: None,
            field_name: None,
            params: params.into_iter().collect(),
        }
    }

    /// A bind parameter reference; renders as the parameter name.
    pub fn param(param: Param) -> Self {
        let text = param.name().to_string();
        Self::raw_with_params(text, std::iter::once(param))
    }

    /// An inlined literal rendered through `Display` (numbers, booleans...).
    pub fn literal(value: impl fmt::Display) -> Self {
        Self::raw(value.to_string())
    }

    /// An inlined, single-quoted string literal.
    pub fn string(value: &str) -> Self {
        Self::raw(format!("'{}'", value.replace('\'', "''")))
    }

    pub fn null() -> Self {
        Self::raw("NULL")
    }

    /// `*`
    pub fn star() -> Self {
        Self::raw("*")
    }

    pub(crate) fn named(text: String, fullname: String, params: ParamList) -> Self {
        Self {
            text,
            fullname: Some(fullname),
            field_name: None,
            params,
        }
    }

    pub(crate) fn with_field_name(mut self, name: String) -> Self {
        self.field_name = Some(name);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fully qualified reference form, present for named objects and aliases.
    pub fn fullname(&self) -> Option<&str> {
        self.fullname.as_deref()
    }

    /// Text used when this expression is referenced from another clause.
    pub fn reference_text(&self) -> &str {
        self.fullname.as_deref().unwrap_or(&self.text)
    }

    /// Name used as an INSERT column or SET target: the unqualified column
    /// name for columns, the text otherwise.
    pub fn field_name(&self) -> &str {
        self.field_name.as_deref().unwrap_or(&self.text)
    }

    pub fn is_named(&self) -> bool {
        self.fullname.is_some()
    }

    pub fn parameters(&self) -> &ParamList {
        &self.params
    }

    pub fn into_parameters(self) -> ParamList {
        self.params
    }

    // ==================== Operator shortcuts ====================

    /// `(self) = (rhs)`
    pub fn equals(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::EQ.compute(&[self, rhs])
    }

    /// `(self) <> (rhs)`
    pub fn not_equals(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::NE.compute(&[self, rhs])
    }

    /// `(self) < (rhs)`
    pub fn lt(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::LT.compute(&[self, rhs])
    }

    /// `(self) <= (rhs)`
    pub fn lte(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::LTE.compute(&[self, rhs])
    }

    /// `(self) > (rhs)`
    pub fn gt(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::GT.compute(&[self, rhs])
    }

    /// `(self) >= (rhs)`
    pub fn gte(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::GTE.compute(&[self, rhs])
    }

    /// `(self) LIKE (pattern)`
    pub fn like(&self, pattern: &Expr) -> SqlResult<Expr> {
        ops::LIKE.compute(&[self, pattern])
    }

    /// `(self) NOT LIKE (pattern)`
    pub fn not_like(&self, pattern: &Expr) -> SqlResult<Expr> {
        ops::NOT_LIKE.compute(&[self, pattern])
    }

    /// `(self) AND (rhs)`
    pub fn and(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::AND.compute(&[self, rhs])
    }

    /// `(self) OR (rhs)`
    pub fn or(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::OR.compute(&[self, rhs])
    }

    /// `NOT (self)`
    pub fn not(&self) -> SqlResult<Expr> {
        ops::NOT.compute(&[self])
    }

    /// `(self) IS NULL`
    pub fn is_null(&self) -> SqlResult<Expr> {
        ops::IS_NULL.compute(&[self])
    }

    /// `(self) IS NOT NULL`
    pub fn is_not_null(&self) -> SqlResult<Expr> {
        ops::IS_NOT_NULL.compute(&[self])
    }

    /// `(self) BETWEEN (low) AND (high)`
    pub fn between(&self, low: &Expr, high: &Expr) -> SqlResult<Expr> {
        ops::BETWEEN.compute(&[self, low, high])
    }

    /// `(self) NOT BETWEEN (low) AND (high)`
    pub fn not_between(&self, low: &Expr, high: &Expr) -> SqlResult<Expr> {
        ops::NOT_BETWEEN.compute(&[self, low, high])
    }

    /// `(self) IN (v0, v1, ...)`; fails with `InvalidOperands` for an empty list.
    pub fn in_list(&self, values: &[Expr]) -> SqlResult<Expr> {
        let mut operands = Vec::with_capacity(values.len() + 1);
        operands.push(self);
        operands.extend(values.iter());
        ops::IN.compute(&operands)
    }

    /// `(self) NOT IN (v0, v1, ...)`
    pub fn not_in(&self, values: &[Expr]) -> SqlResult<Expr> {
        let mut operands = Vec::with_capacity(values.len() + 1);
        operands.push(self);
        operands.extend(values.iter());
        ops::NOT_IN.compute(&operands)
    }

    /// `(self) + (rhs)`
    pub fn plus(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::ADD.compute(&[self, rhs])
    }

    /// `(self) - (rhs)`
    pub fn minus(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::SUB.compute(&[self, rhs])
    }

    /// `(self) * (rhs)`
    pub fn times(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::MUL.compute(&[self, rhs])
    }

    /// `(self) / (rhs)`
    pub fn divided_by(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::DIV.compute(&[self, rhs])
    }

    /// `(self) % (rhs)`
    pub fn modulo(&self, rhs: &Expr) -> SqlResult<Expr> {
        ops::MOD.compute(&[self, rhs])
    }

    /// `self = (value)`, the SET form used by UPDATE.
    pub fn assign(&self, value: &Expr) -> SqlResult<Expr> {
        ops::ASSIGN.compute(&[self, value])
    }

    /// Wrap this expression as `self AS alias`.
    pub fn aliased(&self, alias: &str) -> SqlResult<Expr> {
        Ok(crate::alias::Alias::new(self.clone(), Some(alias))?.to_expr())
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Expr {}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Param> for Expr {
    fn from(param: Param) -> Self {
        Expr::param(param)
    }
}

impl From<&Param> for Expr {
    fn from(param: &Param) -> Self {
        Expr::param(param.clone())
    }
}

/// Convert a value into an [`Expr`].
///
/// Builder methods accept `impl IntoExpr` so callers can pass expressions,
/// parameters, functions, named objects and aliases directly.
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for &Expr {
    fn into_expr(self) -> Expr {
        self.clone()
    }
}

impl IntoExpr for Param {
    fn into_expr(self) -> Expr {
        Expr::param(self)
    }
}

impl IntoExpr for &Param {
    fn into_expr(self) -> Expr {
        Expr::param(self.clone())
    }
}

/// Fold conditions with AND; `None` for an empty input.
pub fn all_of(conditions: impl IntoIterator<Item = Expr>) -> SqlResult<Option<Expr>> {
    fold_with(&ops::AND, conditions)
}

/// Fold conditions with OR; `None` for an empty input.
pub fn any_of(conditions: impl IntoIterator<Item = Expr>) -> SqlResult<Option<Expr>> {
    fold_with(&ops::OR, conditions)
}

fn fold_with(op: &dyn Operator, conditions: impl IntoIterator<Item = Expr>) -> SqlResult<Option<Expr>> {
    let mut acc: Option<Expr> = None;
    for condition in conditions {
        acc = Some(match acc {
            Some(prev) => op.compute(&[&prev, &condition])?,
            None => condition,
        });
    }
    Ok(acc)
}
