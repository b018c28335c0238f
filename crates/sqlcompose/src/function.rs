//! SQL function calls: `name(arg0, arg1, ...)`.

use crate::cache::TextCache;
use crate::combined::Components;
use crate::error::SqlResult;
use crate::expr::{Expr, IntoExpr};
use crate::ident::{Ident, IntoIdent};
use crate::object::NamedObject;
use crate::param::ParamList;

/// A function call with an ordered argument list.
///
/// Arguments may repeat (`COALESCE(a, a)` is legal). The rendered text is
/// cached and cleared by every argument mutation.
#[derive(Clone, Debug)]
pub struct Function {
    name: Ident,
    args: Components,
    cache: TextCache,
}

impl Function {
    pub fn new(name: impl IntoIdent) -> SqlResult<Self> {
        Ok(Self {
            name: name.into_ident()?,
            args: Components::with_duplicates(),
            cache: TextCache::new(),
        })
    }

    /// Build a call in one go.
    pub fn call<I, E>(name: impl IntoIdent, args: I) -> SqlResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: IntoExpr,
    {
        let mut function = Self::new(name)?;
        for arg in args {
            function.add_argument(arg);
        }
        Ok(function)
    }

    /// `COUNT(*)`
    pub fn count_all() -> Self {
        let mut args = Components::with_duplicates();
        args.push(Expr::star());
        Self {
            name: Ident::trusted("COUNT"),
            args,
            cache: TextCache::new(),
        }
    }

    pub fn name(&self) -> String {
        self.name.to_sql()
    }

    pub fn add_argument(&mut self, arg: impl IntoExpr) {
        self.args.push(arg.into_expr());
        self.cache.invalidate();
    }

    /// Append present arguments; `None` entries are skipped.
    pub fn add_arguments<I>(&mut self, args: I) -> usize
    where
        I: IntoIterator<Item = Option<Expr>>,
    {
        let added = self.args.add(args);
        self.cache.invalidate();
        added
    }

    /// Append a named object argument, rendered through its fullname and
    /// optionally prefixed with `DISTINCT`.
    pub fn add_object_argument(&mut self, object: &NamedObject, distinct: bool) {
        let reference = object.to_expr();
        let text = if distinct {
            format!("DISTINCT {}", reference.reference_text())
        } else {
            reference.reference_text().to_string()
        };
        self.add_argument(Expr::raw_with_params(text, reference.into_parameters()));
    }

    pub fn remove_argument(&mut self, arg: &Expr) -> bool {
        let removed = self.args.remove(arg);
        if removed {
            self.cache.invalidate();
        }
        removed
    }

    pub fn clear_arguments(&mut self) {
        self.args.clear();
        self.cache.invalidate();
    }

    pub fn arguments(&self) -> &Components {
        &self.args
    }

    pub fn text(&self) -> &str {
        self.cache
            .get_or_render(|| format!("{}({})", self.name.to_sql(), self.args.join_text()))
    }

    pub fn parameters(&self) -> &ParamList {
        self.args.parameters()
    }

    /// Snapshot of the call as an expression.
    pub fn to_expr(&self) -> Expr {
        Expr::raw_with_params(self.text(), self.parameters().clone())
    }
}

impl IntoExpr for Function {
    fn into_expr(self) -> Expr {
        self.to_expr()
    }
}

impl IntoExpr for &Function {
    fn into_expr(self) -> Expr {
        self.to_expr()
    }
}
