//! Aliased expressions: `expr AS alias`.

use crate::error::SqlResult;
use crate::expr::{Expr, IntoExpr};
use crate::ident::{Ident, IntoIdent};
use crate::param::ParamList;

/// An expression with an optional alias.
///
/// Without an alias every accessor delegates to the wrapped expression. With
/// one, the text becomes `expr AS alias` and the fullname becomes the alias,
/// so other clauses (ORDER BY, GROUP BY) reference the alias.
#[derive(Clone, Debug)]
pub struct Alias {
    target: Expr,
    alias: Option<Ident>,
}

impl Alias {
    pub fn new(target: impl IntoExpr, alias: Option<&str>) -> SqlResult<Self> {
        let alias = alias.map(IntoIdent::into_ident).transpose()?;
        Ok(Self {
            target: target.into_expr(),
            alias,
        })
    }

    pub fn target(&self) -> &Expr {
        &self.target
    }

    pub fn alias(&self) -> Option<String> {
        self.alias.as_ref().map(Ident::to_sql)
    }

    pub fn set_alias(&mut self, alias: Option<&str>) -> SqlResult<()> {
        self.alias = alias.map(IntoIdent::into_ident).transpose()?;
        Ok(())
    }

    pub fn text(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} AS {}", self.target.text(), alias.to_sql()),
            None => self.target.text().to_string(),
        }
    }

    pub fn fullname(&self) -> String {
        match &self.alias {
            Some(alias) => alias.to_sql(),
            None => self.target.reference_text().to_string(),
        }
    }

    pub fn parameters(&self) -> &ParamList {
        self.target.parameters()
    }

    pub fn to_expr(&self) -> Expr {
        match &self.alias {
            Some(_) => Expr::named(self.text(), self.fullname(), self.target.parameters().clone()),
            None => self.target.clone(),
        }
    }
}

impl IntoExpr for Alias {
    fn into_expr(self) -> Expr {
        self.to_expr()
    }
}

impl IntoExpr for &Alias {
    fn into_expr(self) -> Expr {
        self.to_expr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::object::NamedObject;

    #[test]
    fn absent_alias_delegates() {
        let users = NamedObject::table("users").unwrap();
        let id = users.column("id").unwrap();
        let a = Alias::new(&id, None).unwrap();

        assert_eq!(a.text(), "users.id");
        assert_eq!(a.fullname(), "users.id");
        assert!(a.to_expr().is_named());
    }

    #[test]
    fn present_alias_renders_as() {
        let a = Alias::new(Function::count_all(), Some("total")).unwrap();
        assert_eq!(a.text(), "COUNT(*) AS total");
        assert_eq!(a.fullname(), "total");

        let e = a.to_expr();
        assert_eq!(e.text(), "COUNT(*) AS total");
        assert_eq!(e.reference_text(), "total");
    }

    #[test]
    fn set_alias_validates() {
        let mut a = Alias::new(Expr::raw("x"), None).unwrap();
        assert!(a.set_alias(Some("bad alias")).is_err());
        assert!(a.alias().is_none());
        a.set_alias(Some("y")).unwrap();
        assert_eq!(a.alias().as_deref(), Some("y"));
        a.set_alias(None).unwrap();
        assert_eq!(a.text(), "x");
    }
}
