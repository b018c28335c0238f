use super::{Clause, ClauseKind};
use crate::cache::TextCache;
use crate::error::{SqlError, SqlResult};
use crate::expr::{Expr, IntoExpr};
use crate::operator::{Operator, ops};
use crate::param::ParamList;

/// A single-condition clause: `WHERE <cond>` or `HAVING <cond>`.
#[derive(Clone, Debug)]
pub struct ConditionClause {
    kind: ClauseKind,
    condition: Option<Expr>,
    cache: TextCache,
}

impl ConditionClause {
    /// Create a condition clause of the given kind (`Where` or `Having`).
    pub fn new(kind: ClauseKind) -> SqlResult<Self> {
        if !matches!(kind, ClauseKind::Where | ClauseKind::Having) {
            return Err(SqlError::invalid_argument(format!(
                "{kind} is not a condition clause"
            )));
        }
        Ok(Self {
            kind,
            condition: None,
            cache: TextCache::new(),
        })
    }

    pub fn where_clause() -> Self {
        Self {
            kind: ClauseKind::Where,
            condition: None,
            cache: TextCache::new(),
        }
    }

    pub fn having_clause() -> Self {
        Self {
            kind: ClauseKind::Having,
            condition: None,
            cache: TextCache::new(),
        }
    }

    pub fn condition(&self) -> Option<&Expr> {
        self.condition.as_ref()
    }

    /// Replace the condition.
    pub fn set_condition(&mut self, condition: impl IntoExpr) {
        self.condition = Some(condition.into_expr());
        self.cache.invalidate();
    }

    pub fn clear_condition(&mut self) {
        self.condition = None;
        self.cache.invalidate();
    }

    /// `(existing) AND (condition)`, or just `condition` when unset.
    pub fn and_condition(&mut self, condition: impl IntoExpr) -> SqlResult<()> {
        self.combine(&ops::AND, condition.into_expr())
    }

    /// `(existing) OR (condition)`, or just `condition` when unset.
    pub fn or_condition(&mut self, condition: impl IntoExpr) -> SqlResult<()> {
        self.combine(&ops::OR, condition.into_expr())
    }

    fn combine(&mut self, op: &dyn Operator, condition: Expr) -> SqlResult<()> {
        let combined = match &self.condition {
            Some(existing) => op.compute(&[existing, &condition])?,
            None => condition,
        };
        self.condition = Some(combined);
        self.cache.invalidate();
        Ok(())
    }
}

impl Clause for ConditionClause {
    fn kind(&self) -> ClauseKind {
        self.kind
    }

    fn is_available(&self) -> bool {
        self.condition.is_some()
    }

    fn text(&self) -> SqlResult<&str> {
        let Some(condition) = &self.condition else {
            return Ok("");
        };
        Ok(self
            .cache
            .get_or_render(|| format!("{} {}", self.kind.keyword(), condition.text())))
    }

    fn parameters(&self) -> ParamList {
        self.condition
            .as_ref()
            .map(|c| c.parameters().clone())
            .unwrap_or_default()
    }
}
