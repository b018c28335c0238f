use super::{Clause, ClauseKind};
use crate::cache::TextCache;
use crate::error::{SqlError, SqlResult};
use crate::expr::{Expr, IntoExpr};
use crate::param::ParamList;
use std::fmt;

/// Join flavours supported by [`FromClause::join`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    /// No ON condition required.
    Cross,
}

impl JoinKind {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL",
            JoinKind::Cross => "CROSS",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} JOIN", self.keyword())
    }
}

/// `FROM <source>`
///
/// Joins fold into the source: after `inner_join(b, cond)` the source is the
/// single expression `a INNER JOIN b ON cond`.
#[derive(Clone, Debug, Default)]
pub struct FromClause {
    source: Option<Expr>,
    cache: TextCache,
}

impl FromClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&Expr> {
        self.source.as_ref()
    }

    /// Replace the source, dropping any previous joins.
    pub fn set_source(&mut self, source: impl IntoExpr) {
        self.source = Some(source.into_expr());
        self.cache.invalidate();
    }

    pub fn clear_source(&mut self) {
        self.source = None;
        self.cache.invalidate();
    }

    /// Join `source` onto the current source.
    ///
    /// Fails with `InvalidState` when no source is set yet and with
    /// `InvalidOperands` when `source` is missing or a non-cross join has no
    /// condition. Nothing changes on failure.
    pub fn join(&mut self, kind: JoinKind, source: Option<Expr>, condition: Option<Expr>) -> SqlResult<()> {
        let Some(current) = &self.source else {
            return Err(SqlError::invalid_state(format!(
                "{kind} requires an existing FROM source"
            )));
        };
        let Some(source) = source else {
            return Err(SqlError::invalid_operands(format!("{kind} without a source")));
        };
        if condition.is_none() && kind != JoinKind::Cross {
            return Err(SqlError::invalid_operands(format!("{kind} without an ON condition")));
        }

        // Validated; from here on nothing can fail.
        let mut text = format!("{} {} {}", current.text(), kind, source.text());
        let mut params = current.parameters().clone();
        params.extend(source.parameters());
        if let Some(condition) = &condition {
            text.push_str(" ON ");
            text.push_str(condition.text());
            params.extend(condition.parameters());
        }

        self.source = Some(Expr::raw_with_params(text, params));
        self.cache.invalidate();
        Ok(())
    }

    pub fn inner_join(&mut self, source: impl IntoExpr, condition: impl IntoExpr) -> SqlResult<()> {
        self.join(JoinKind::Inner, Some(source.into_expr()), Some(condition.into_expr()))
    }

    pub fn left_join(&mut self, source: impl IntoExpr, condition: impl IntoExpr) -> SqlResult<()> {
        self.join(JoinKind::Left, Some(source.into_expr()), Some(condition.into_expr()))
    }

    pub fn right_join(&mut self, source: impl IntoExpr, condition: impl IntoExpr) -> SqlResult<()> {
        self.join(JoinKind::Right, Some(source.into_expr()), Some(condition.into_expr()))
    }

    pub fn full_join(&mut self, source: impl IntoExpr, condition: impl IntoExpr) -> SqlResult<()> {
        self.join(JoinKind::Full, Some(source.into_expr()), Some(condition.into_expr()))
    }

    pub fn cross_join(&mut self, source: impl IntoExpr) -> SqlResult<()> {
        self.join(JoinKind::Cross, Some(source.into_expr()), None)
    }
}

impl Clause for FromClause {
    fn kind(&self) -> ClauseKind {
        ClauseKind::From
    }

    fn is_available(&self) -> bool {
        self.source.is_some()
    }

    fn text(&self) -> SqlResult<&str> {
        let Some(source) = &self.source else {
            return Ok("");
        };
        Ok(self.cache.get_or_render(|| format!("FROM {}", source.text())))
    }

    fn parameters(&self) -> ParamList {
        self.source
            .as_ref()
            .map(|s| s.parameters().clone())
            .unwrap_or_default()
    }
}
