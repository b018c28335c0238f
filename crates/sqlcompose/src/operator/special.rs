//! Operators with their own text shapes: IN lists, assignment, NULL checks.

use super::{Arity, Operator};
use crate::error::SqlResult;
use crate::expr::Expr;

/// `(left) IN (right0, right1, ...)`
#[derive(Debug, Clone, Copy)]
pub struct InOperator {
    name: &'static str,
    keyword: &'static str,
}

impl InOperator {
    pub const fn new(name: &'static str, keyword: &'static str) -> Self {
        Self { name, keyword }
    }
}

impl Operator for InOperator {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(2)
    }

    fn render(&self, operands: &[&Expr]) -> SqlResult<String> {
        self.arity().check(self.name(), operands.len())?;
        let values = operands[1..]
            .iter()
            .map(|e| e.text())
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("({}) {} ({})", operands[0].text(), self.keyword, values))
    }
}

/// `left = (right)`
#[derive(Debug, Clone, Copy)]
pub struct AssignOperator;

impl Operator for AssignOperator {
    fn name(&self) -> &str {
        "ASSIGN"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(2)
    }

    fn render(&self, operands: &[&Expr]) -> SqlResult<String> {
        self.arity().check(self.name(), operands.len())?;
        Ok(format!("{} = ({})", operands[0].text(), operands[1].text()))
    }
}

/// `(left) IS NULL` / `(left) IS NOT NULL`
#[derive(Debug, Clone, Copy)]
pub struct NullCheckOperator {
    name: &'static str,
    keyword: &'static str,
}

impl NullCheckOperator {
    pub const fn new(name: &'static str, keyword: &'static str) -> Self {
        Self { name, keyword }
    }
}

impl Operator for NullCheckOperator {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn render(&self, operands: &[&Expr]) -> SqlResult<String> {
        self.arity().check(self.name(), operands.len())?;
        Ok(format!("({}) {}", operands[0].text(), self.keyword))
    }
}
