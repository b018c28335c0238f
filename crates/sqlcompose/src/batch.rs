//! Hand-off from rendered statements to an executor.
//!
//! [`CommandBatcher`] splits a statement list into commands according to
//! [`ExecConfig`], renders each command through a [`CommandTextProvider`] and
//! merges the bind parameters of its statements by identity.
//!
//! PostgreSQL binds parameters only for a single statement per command. A
//! command holding several statements must go through the simple query
//! protocol (`batch_execute`) and so cannot carry parameters; run
//! parameterized statements with `max_batch_size(1)`.
//!
//! # Example
//! ```ignore
//! use sqlcompose::prelude::*;
//!
//! let batcher = CommandBatcher::new(ExecConfig::new().with_max_batch_size(1))?;
//! for cmd in batcher.prepare(&[&insert_a, &insert_b])? {
//!     if cmd.is_bindable() {
//!         client.execute(cmd.text.as_str(), &cmd.param_refs()).await?;
//!     } else {
//!         client.batch_execute(&cmd.text).await?;
//!     }
//! }
//! ```

use crate::command::{CommandTextProvider, DelimitedCommandText};
use crate::config::ExecConfig;
use crate::error::SqlResult;
use crate::param::ParamList;
use crate::statement::SqlStatement;
use std::time::Duration;
use tokio_postgres::types::ToSql;

/// One command ready for execution.
#[derive(Debug, Clone)]
pub struct PreparedCommand {
    pub text: String,
    pub params: ParamList,
    pub timeout: Option<Duration>,
    /// Number of statements rendered into `text`.
    pub statements: usize,
}

impl PreparedCommand {
    /// Whether `params` can be bound to `text` by a prepared-statement
    /// executor: one statement, or no parameters at all.
    pub fn is_bindable(&self) -> bool {
        self.statements == 1 || self.params.is_empty()
    }

    /// Parameter values in the form `tokio_postgres` query methods accept.
    pub fn param_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.as_refs()
    }
}

#[derive(Debug, Clone)]
pub struct CommandBatcher<P = DelimitedCommandText> {
    config: ExecConfig,
    provider: P,
}

impl CommandBatcher {
    /// Batcher joining statements with the configured separator.
    pub fn new(config: ExecConfig) -> SqlResult<Self> {
        let provider = DelimitedCommandText::new(config.separator.clone());
        Self::with_provider(config, provider)
    }
}

impl<P: CommandTextProvider> CommandBatcher<P> {
    pub fn with_provider(config: ExecConfig, provider: P) -> SqlResult<Self> {
        config.validate()?;
        Ok(Self { config, provider })
    }

    pub fn config(&self) -> &ExecConfig {
        &self.config
    }

    /// Render `statements` into commands of at most `max_batch_size` statements.
    ///
    /// Fails with `InvalidArgument` on an empty list and with the first
    /// statement render error otherwise.
    pub fn prepare(&self, statements: &[&dyn SqlStatement]) -> SqlResult<Vec<PreparedCommand>> {
        if statements.is_empty() {
            // Let the provider report the empty input.
            self.provider.command_text(statements)?;
            return Ok(Vec::new());
        }

        let size = self.config.max_batch_size.unwrap_or(statements.len());
        let mut commands = Vec::with_capacity(statements.len().div_ceil(size));
        for chunk in statements.chunks(size) {
            let text = self.provider.command_text(chunk)?;
            // First occurrence across the chunk fixes a parameter's position
            let mut params = ParamList::new();
            for statement in chunk {
                params.extend(&statement.parameters());
            }
            commands.push(PreparedCommand {
                text,
                params,
                timeout: self.config.command_timeout,
                statements: chunk.len(),
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqlcompose::batch",
            statements = statements.len(),
            batches = commands.len(),
            params = commands.iter().map(|c| c.params.len()).sum::<usize>(),
            "prepared command batches"
        );

        Ok(commands)
    }
}
