//! Complete statements assembled from ordered clauses.
//!
//! A statement is Unpopulated until its required clause is available, then
//! Valid; [`SqlStatement::text`] refuses to render anything else. Rendered
//! text is cached on the statement and cleared by every `*_mut` accessor and
//! forwarding mutator, so a clause can never change behind a stale cache.
//!
//! # Example
//! ```ignore
//! use sqlcompose::prelude::*;
//!
//! let mut stmt = SelectStatement::new();
//! stmt.add_expression(Expr::raw("id"));
//! stmt.set_source(Expr::raw("users"));
//! stmt.set_condition(Expr::raw("id").equals(&Expr::literal(5))?);
//! assert_eq!(stmt.text()?, "SELECT id FROM users WHERE (id) = (5)");
//! # Ok::<(), sqlcompose::SqlError>(())
//! ```

mod delete;
mod insert;
mod raw;
mod select;
mod update;

pub use delete::DeleteStatement;
pub use insert::InsertStatement;
pub use raw::RawStatement;
pub use select::SelectStatement;
pub use update::UpdateStatement;

use crate::cache::TextCache;
use crate::clause::Clause;
use crate::error::{SqlError, SqlResult};
use crate::param::ParamList;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Raw,
}

impl StatementKind {
    /// Leading keyword; SELECT and raw statements have none.
    pub fn keyword(self) -> &'static str {
        match self {
            StatementKind::Select | StatementKind::Raw => "",
            StatementKind::Insert => "INSERT INTO",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
            StatementKind::Raw => "raw",
        })
    }
}

/// Rendering contract shared by every statement.
pub trait SqlStatement: fmt::Debug {
    fn kind(&self) -> StatementKind;

    fn keyword(&self) -> &str {
        self.kind().keyword()
    }

    /// Clauses in rendering order.
    fn clauses(&self) -> Vec<&dyn Clause>;

    /// Whether the statement holds enough state to render.
    fn is_valid(&self) -> bool;

    /// Rendered SQL; `InvalidState` while the statement is not valid.
    fn text(&self) -> SqlResult<&str>;

    /// Bind parameters of all available clauses, in clause order, each
    /// handle once. Recomputed on every call.
    fn parameters(&self) -> ParamList {
        let mut params = ParamList::new();
        for clause in self.clauses() {
            if clause.is_available() {
                params.extend(&clause.parameters());
            }
        }
        params
    }
}

/// Join the available clauses after `keyword`, single-space separated.
pub(crate) fn render_clauses(keyword: &str, clauses: &[&dyn Clause]) -> SqlResult<String> {
    let mut text = String::from(keyword);
    for clause in clauses.iter().filter(|c| c.is_available()) {
        let part = clause.text()?;
        // Raw and keyword-less statements start with an empty keyword
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(part);
    }
    Ok(text)
}

/// Validate, then return the cached text or render it into `cache`.
pub(crate) fn cached_text<'a>(
    statement: &dyn SqlStatement,
    cache: &'a TextCache,
) -> SqlResult<&'a str> {
    if !statement.is_valid() {
        return Err(SqlError::invalid_state(format!(
            "{} statement is missing a required clause",
            statement.kind()
        )));
    }
    cache.get_or_try_render(|| {
        let text = render_clauses(statement.keyword(), &statement.clauses())?;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlcompose::render",
            kind = %statement.kind(),
            len = text.len(),
            "rendered statement"
        );
        Ok(text)
    })
}

#[cfg(test)]
mod tests;
