//! Multi-statement command text.

use crate::error::{SqlError, SqlResult};
use crate::statement::SqlStatement;

/// Turns a sequence of statements into one command text.
pub trait CommandTextProvider {
    /// Render `statements` as a single command. Fails with `InvalidArgument`
    /// when the sequence is empty and propagates any statement render error.
    fn command_text(&self, statements: &[&dyn SqlStatement]) -> SqlResult<String>;
}

/// Joins statement texts with a fixed separator (`;` by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedCommandText {
    separator: String,
}

impl Default for DelimitedCommandText {
    fn default() -> Self {
        Self {
            separator: ";".to_string(),
        }
    }
}

impl DelimitedCommandText {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl CommandTextProvider for DelimitedCommandText {
    fn command_text(&self, statements: &[&dyn SqlStatement]) -> SqlResult<String> {
        if statements.is_empty() {
            return Err(SqlError::invalid_argument("no statements to combine"));
        }
        let texts = statements
            .iter()
            .map(|s| s.text())
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(texts.join(&self.separator))
    }
}
