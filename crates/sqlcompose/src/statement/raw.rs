use super::{SqlStatement, StatementKind};
use crate::clause::Clause;
use crate::error::{SqlError, SqlResult};
use crate::param::{Param, ParamList};

/// Fixed SQL text with its bind parameters. Always valid, no clauses.
#[derive(Clone, Debug)]
pub struct RawStatement {
    text: String,
    params: ParamList,
}

impl RawStatement {
    pub fn new(text: impl Into<String>) -> SqlResult<Self> {
        Self::with_params(text, std::iter::empty())
    }

    pub fn with_params(
        text: impl Into<String>,
        params: impl IntoIterator<Item = Param>,
    ) -> SqlResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SqlError::invalid_argument("raw statement text cannot be empty"));
        }
        Ok(Self {
            text,
            params: params.into_iter().collect(),
        })
    }
}

impl SqlStatement for RawStatement {
    fn kind(&self) -> StatementKind {
        StatementKind::Raw
    }

    fn clauses(&self) -> Vec<&dyn Clause> {
        Vec::new()
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn text(&self) -> SqlResult<&str> {
        Ok(&self.text)
    }

    fn parameters(&self) -> ParamList {
        self.params.clone()
    }
}
