//! Keyword-joined operators: comparisons, boolean connectives, arithmetic, BETWEEN.

use super::{Arity, Operator};
use crate::error::{SqlError, SqlResult};
use crate::expr::Expr;

/// An operator rendered by interleaving keywords between parenthesized operands.
///
/// - one keyword, one operand: `KEYWORD (operand)`
/// - `k` keywords: `(op0) KW1 (op1) KW2 (op2) ...`, using the first `k + 1`
///   operands
#[derive(Debug, Clone, Copy)]
pub struct KeywordOperator {
    name: &'static str,
    keywords: &'static [&'static str],
    arity: Arity,
}

impl KeywordOperator {
    pub const fn new(name: &'static str, keywords: &'static [&'static str], arity: Arity) -> Self {
        Self {
            name,
            keywords,
            arity,
        }
    }

    /// A two-operand operator with a single keyword.
    pub const fn binary(name: &'static str, keywords: &'static [&'static str]) -> Self {
        Self::new(name, keywords, Arity::Exact(2))
    }

    pub fn keywords(&self) -> &[&'static str] {
        self.keywords
    }

    fn is_unary_form(&self, count: usize) -> bool {
        count == 1 && self.keywords.len() == 1
    }
}

impl Operator for KeywordOperator {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> Arity {
        self.arity
    }

    fn render(&self, operands: &[&Expr]) -> SqlResult<String> {
        if self.keywords.is_empty() {
            return Err(SqlError::invalid_argument(format!(
                "operator {} has no keywords",
                self.name
            )));
        }
        if self.is_unary_form(operands.len()) {
            return Ok(format!("{} ({})", self.keywords[0], operands[0].text()));
        }
        if operands.len() <= self.keywords.len() {
            return Err(SqlError::invalid_operands(format!(
                "operator {} needs {} operands for {} keyword(s), got {}",
                self.name,
                self.keywords.len() + 1,
                self.keywords.len(),
                operands.len()
            )));
        }

        let mut out = format!("({})", operands[0].text());
        for (keyword, operand) in self.keywords.iter().zip(&operands[1..]) {
            out.push(' ');
            out.push_str(keyword);
            out.push_str(" (");
            out.push_str(operand.text());
            out.push(')');
        }
        Ok(out)
    }

    fn relevant_operands(&self, count: usize) -> usize {
        if self.is_unary_form(count) {
            1
        } else {
            count.min(self.keywords.len() + 1)
        }
    }
}
