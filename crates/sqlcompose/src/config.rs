use crate::error::{SqlError, SqlResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Execution settings attached to prepared commands.
///
/// Deserializes from any serde format; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Per-command timeout handed to the executor. `None` means no timeout (default).
    pub command_timeout: Option<Duration>,
    /// Maximum statements per command. `None` puts everything in one command.
    pub max_batch_size: Option<usize>,
    /// Text placed between statements of one command.
    pub separator: String,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            command_timeout: None,
            max_batch_size: None,
            separator: ";".to_string(),
        }
    }
}

impl ExecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = Some(timeout);
        self
    }

    /// Split statement lists into commands of at most `size` statements.
    pub fn with_max_batch_size(mut self, size: usize) -> Self {
        self.max_batch_size = Some(size);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Reject settings the batcher cannot honor.
    pub fn validate(&self) -> SqlResult<()> {
        if self.max_batch_size == Some(0) {
            return Err(SqlError::invalid_argument("max_batch_size must be at least 1"));
        }
        if self.separator.is_empty() {
            return Err(SqlError::invalid_argument("statement separator cannot be empty"));
        }
        Ok(())
    }
}
