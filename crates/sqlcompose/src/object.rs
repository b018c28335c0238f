//! SQL-addressable named objects: schemas, tables, columns, server variables
//! and function results.
//!
//! Objects live behind `Arc` so that children can point back at their owner
//! through a `Weak` link. The link is a lookup aid only: dropping the owner
//! leaves children valid, they simply lose their qualifier.
//!
//! # Example
//! ```ignore
//! use sqlcompose::NamedObject;
//!
//! let public = NamedObject::schema("public")?;
//! let users = public.child(ObjectKind::Table, "users")?;
//! let id = users.column("id")?;
//! assert_eq!(id.fullname(), "public.users.id");
//! ```

use crate::error::{SqlError, SqlResult};
use crate::expr::{Expr, IntoExpr};
use crate::function::Function;
use crate::ident::{Ident, IntoIdent};
use std::fmt;
use std::sync::{Arc, Weak};

/// Kind of a named object; selects its fullname and text strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Schema,
    Table,
    Column,
    /// Server variable, rendered as `@@name`.
    Variable,
    /// The value produced by a function call.
    FunctionResult,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Schema => "schema",
            ObjectKind::Table => "table",
            ObjectKind::Column => "column",
            ObjectKind::Variable => "variable",
            ObjectKind::FunctionResult => "function result",
        };
        f.write_str(name)
    }
}

/// A named, SQL-addressable entity.
#[derive(Debug)]
pub struct NamedObject {
    kind: ObjectKind,
    name: Ident,
    owner: Option<Weak<NamedObject>>,
    source: Expr,
}

impl NamedObject {
    /// Create an unowned object.
    ///
    /// Function results must be created with [`NamedObject::function_result`].
    pub fn new(kind: ObjectKind, name: impl IntoIdent) -> SqlResult<Arc<Self>> {
        Self::build(kind, name.into_ident()?, None).map(Arc::new)
    }

    pub fn schema(name: impl IntoIdent) -> SqlResult<Arc<Self>> {
        Self::new(ObjectKind::Schema, name)
    }

    pub fn table(name: impl IntoIdent) -> SqlResult<Arc<Self>> {
        Self::new(ObjectKind::Table, name)
    }

    pub fn variable(name: impl IntoIdent) -> SqlResult<Arc<Self>> {
        Self::new(ObjectKind::Variable, name)
    }

    /// Wrap the current state of a function call.
    pub fn function_result(function: &Function) -> SqlResult<Arc<Self>> {
        Ok(Arc::new(Self {
            kind: ObjectKind::FunctionResult,
            name: function.name().as_str().into_ident()?,
            owner: None,
            source: function.to_expr(),
        }))
    }

    /// Create an object owned by `self`.
    pub fn child(self: &Arc<Self>, kind: ObjectKind, name: impl IntoIdent) -> SqlResult<Arc<Self>> {
        if matches!(self.kind, ObjectKind::Variable | ObjectKind::FunctionResult) {
            return Err(SqlError::invalid_argument(format!(
                "a {} cannot own other objects",
                self.kind
            )));
        }
        Self::build(kind, name.into_ident()?, Some(Arc::downgrade(self))).map(Arc::new)
    }

    /// Create a column owned by `self`.
    pub fn column(self: &Arc<Self>, name: impl IntoIdent) -> SqlResult<Arc<Self>> {
        self.child(ObjectKind::Column, name)
    }

    fn build(kind: ObjectKind, name: Ident, owner: Option<Weak<NamedObject>>) -> SqlResult<Self> {
        let source = match kind {
            ObjectKind::FunctionResult => {
                return Err(SqlError::invalid_argument(
                    "function results are created from a Function",
                ));
            }
            ObjectKind::Variable => Expr::raw(format!("@@{}", name.to_sql())),
            _ => Expr::raw(name.to_sql()),
        };
        Ok(Self {
            kind,
            name,
            owner,
            source,
        })
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// The object's own name, unqualified.
    pub fn name(&self) -> String {
        self.name.to_sql()
    }

    /// The owner, while it is still alive.
    pub fn owner(&self) -> Option<Arc<NamedObject>> {
        self.owner.as_ref().and_then(Weak::upgrade)
    }

    /// The expression this object is derived from.
    pub fn source(&self) -> &Expr {
        &self.source
    }

    /// Fully qualified reference form.
    pub fn fullname(&self) -> String {
        match self.kind {
            ObjectKind::Variable | ObjectKind::FunctionResult => self.source.text().to_string(),
            _ => match self.owner() {
                Some(owner) => format!("{}.{}", owner.fullname(), self.name.to_sql()),
                None => self.name.to_sql(),
            },
        }
    }

    /// Text used where the object itself appears (select lists, FROM).
    pub fn text(&self) -> String {
        match self.kind {
            ObjectKind::FunctionResult => self.source.text().to_string(),
            _ => self.fullname(),
        }
    }

    pub fn to_expr(&self) -> Expr {
        let expr = Expr::named(self.text(), self.fullname(), self.source.parameters().clone());
        match self.kind {
            ObjectKind::Column => expr.with_field_name(self.name()),
            _ => expr,
        }
    }

    /// `text AS alias`, referenced elsewhere as `alias`.
    pub fn aliased(&self, alias: &str) -> SqlResult<Expr> {
        Ok(crate::alias::Alias::new(self.to_expr(), Some(alias))?.to_expr())
    }
}

impl IntoExpr for &NamedObject {
    fn into_expr(self) -> Expr {
        self.to_expr()
    }
}

impl IntoExpr for Arc<NamedObject> {
    fn into_expr(self) -> Expr {
        self.to_expr()
    }
}

impl IntoExpr for &Arc<NamedObject> {
    fn into_expr(self) -> Expr {
        self.to_expr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::Param;

    #[test]
    fn unowned_objects_render_bare() {
        let users = NamedObject::table("users").unwrap();
        assert_eq!(users.fullname(), "users");
        assert_eq!(users.text(), "users");
        assert!(users.owner().is_none());

        let id = NamedObject::new(ObjectKind::Column, "id").unwrap();
        assert_eq!(id.to_expr().text(), "id");
    }

    #[test]
    fn owner_chain_qualifies_fullname() {
        let public = NamedObject::schema("public").unwrap();
        let users = public.child(ObjectKind::Table, "users").unwrap();
        let id = users.column("id").unwrap();

        assert_eq!(id.fullname(), "public.users.id");
        assert_eq!(id.name(), "id");
        assert_eq!(id.owner().unwrap().name(), "users");
    }

    #[test]
    fn dropped_owner_falls_back_to_name() {
        let id = {
            let users = NamedObject::table("users").unwrap();
            users.column("id").unwrap()
        };
        assert!(id.owner().is_none());
        assert_eq!(id.fullname(), "id");
    }

    #[test]
    fn quoted_names_stay_quoted() {
        let t = NamedObject::table(r#""Order Items""#).unwrap();
        let c = t.column("qty").unwrap();
        assert_eq!(c.fullname(), r#""Order Items".qty"#);
    }

    #[test]
    fn columns_keep_bare_field_name() {
        let public = NamedObject::schema("public").unwrap();
        let users = public.child(ObjectKind::Table, "users").unwrap();
        let id = users.column("id").unwrap().to_expr();
        assert_eq!(id.text(), "public.users.id");
        assert_eq!(id.field_name(), "id");
        assert_eq!(users.to_expr().field_name(), "public.users");
    }

    #[test]
    fn server_variable() {
        let v = NamedObject::variable("ROWCOUNT").unwrap();
        assert_eq!(v.text(), "@@ROWCOUNT");
        assert_eq!(v.fullname(), "@@ROWCOUNT");
        assert!(v.child(ObjectKind::Column, "x").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn function_result_carries_call_parameters() {
        let p = Param::new("$1", 2_i32).unwrap();
        let mut f = Function::new("round").unwrap();
        f.add_argument(Expr::raw("price"));
        f.add_argument(&p);

        let result = NamedObject::function_result(&f).unwrap();
        assert_eq!(result.kind(), ObjectKind::FunctionResult);
        assert_eq!(result.name(), "round");
        assert_eq!(result.text(), "round(price, $1)");
        assert_eq!(result.to_expr().parameters().len(), 1);
    }

    #[test]
    fn function_result_kind_needs_a_function() {
        let err = NamedObject::new(ObjectKind::FunctionResult, "f").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert!(NamedObject::table("users; --").is_err());
        let users = NamedObject::table("users").unwrap();
        assert!(users.column("").is_err());
    }

    #[test]
    fn aliased_object() {
        let users = NamedObject::table("users").unwrap();
        let e = users.aliased("u").unwrap();
        assert_eq!(e.text(), "users AS u");
        assert_eq!(e.reference_text(), "u");
    }
}
