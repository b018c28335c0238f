//! Statement fragments.
//!
//! Each clause owns its state, knows when it has enough of it to render
//! ([`Clause::is_available`]) and caches its text until the next mutation.
//! Statements hold concrete clause structs and expose them in rendering order
//! through [`Clause`] trait objects.

mod condition;
mod field_value;
mod from;
mod group_by;
mod order_by;
mod select;

pub use condition::ConditionClause;
pub use field_value::{FieldValueClause, FieldValueMode};
pub use from::{FromClause, JoinKind};
pub use group_by::GroupByClause;
pub use order_by::{OrderByClause, SortOrder};
pub use select::SelectClause;

use crate::error::SqlResult;
use crate::param::ParamList;
use std::fmt;

/// The closed set of clause kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    Select,
    From,
    Where,
    GroupBy,
    Having,
    OrderBy,
    FieldValue,
}

impl ClauseKind {
    /// Leading keyword; empty for keyword-less clauses.
    pub fn keyword(self) -> &'static str {
        match self {
            ClauseKind::Select => "SELECT",
            ClauseKind::From => "FROM",
            ClauseKind::Where => "WHERE",
            ClauseKind::GroupBy => "GROUP BY",
            ClauseKind::Having => "HAVING",
            ClauseKind::OrderBy => "ORDER BY",
            ClauseKind::FieldValue => "",
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseKind::FieldValue => f.write_str("field-value"),
            other => f.write_str(other.keyword()),
        }
    }
}

/// A renderable statement fragment.
pub trait Clause: fmt::Debug {
    fn kind(&self) -> ClauseKind;

    fn keyword(&self) -> &str {
        self.kind().keyword()
    }

    /// Whether the clause holds enough state to render.
    fn is_available(&self) -> bool;

    /// Rendered text, cached until the next mutation.
    ///
    /// Unavailable clauses render as an empty string, except where rendering
    /// without state is an error (field-value lists).
    fn text(&self) -> SqlResult<&str>;

    /// Parameters referenced by the clause, in first-occurrence order.
    fn parameters(&self) -> ParamList;
}
