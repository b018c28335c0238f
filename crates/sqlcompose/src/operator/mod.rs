//! Operators: named, stateless transformers from N expressions to one.
//!
//! Every operator pairs a text strategy ([`Operator::render`]) with a
//! parameter strategy ([`Operator::collect_parameters`]). [`Operator::compute`]
//! checks the operand list against the operator's [`Arity`] before running
//! either strategy, so a failed call never produces a partial expression.
//!
//! The built-in operators are singletons in [`ops`]. New operators are added
//! by implementing the trait.
//!
//! # Example
//! ```ignore
//! use sqlcompose::{Expr, ops, Operator};
//!
//! let cond = ops::BETWEEN.compute(&[&Expr::raw("age"), &Expr::literal(18), &Expr::literal(65)])?;
//! assert_eq!(cond.text(), "(age) BETWEEN (18) AND (65)");
//! ```

mod keyword;
pub mod ops;
mod special;

pub use keyword::KeywordOperator;
pub use special::{AssignOperator, InOperator, NullCheckOperator};

use crate::error::{SqlError, SqlResult};
use crate::expr::Expr;
use crate::param::ParamList;
use std::fmt;

/// Operand-count contract of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }

    /// Fail with `InvalidOperands` unless `count` satisfies the contract.
    pub fn check(self, operator: &str, count: usize) -> SqlResult<()> {
        if self.accepts(count) {
            return Ok(());
        }
        Err(SqlError::invalid_operands(format!(
            "operator {operator} expects {self} operand(s), got {count}"
        )))
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A named transformer combining operand expressions into a new expression.
pub trait Operator: fmt::Debug + Send + Sync {
    /// Identity key of the operator.
    fn name(&self) -> &str;

    fn arity(&self) -> Arity;

    /// Text strategy. Called only with an operand count accepted by `arity`.
    fn render(&self, operands: &[&Expr]) -> SqlResult<String>;

    /// How many leading operands the rendered text references.
    fn relevant_operands(&self, count: usize) -> usize {
        count
    }

    /// Parameter strategy: identity-union of the relevant operands' parameters,
    /// in positional order.
    fn collect_parameters(&self, operands: &[&Expr]) -> ParamList {
        let mut params = ParamList::new();
        for operand in operands.iter().take(self.relevant_operands(operands.len())) {
            params.extend(operand.parameters());
        }
        params
    }

    /// Apply the operator.
    fn compute(&self, operands: &[&Expr]) -> SqlResult<Expr> {
        if operands.is_empty() {
            return Err(SqlError::invalid_operands(format!(
                "operator {} called without operands",
                self.name()
            )));
        }
        self.arity().check(self.name(), operands.len())?;
        let text = self.render(operands)?;
        Ok(Expr::raw_with_params(text, self.collect_parameters(operands)))
    }

    /// Apply the operator to possibly missing operands.
    ///
    /// Any `None` fails with `InvalidOperands`.
    fn compute_opt(&self, operands: &[Option<&Expr>]) -> SqlResult<Expr> {
        let present = operands
            .iter()
            .enumerate()
            .map(|(i, operand)| {
                operand.ok_or_else(|| {
                    SqlError::invalid_operands(format!(
                        "operator {}: operand {i} is missing",
                        self.name()
                    ))
                })
            })
            .collect::<SqlResult<Vec<&Expr>>>()?;
        self.compute(&present)
    }
}
