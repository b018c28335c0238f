//! Built-in operator singletons and name lookup.

use super::{Arity, AssignOperator, InOperator, KeywordOperator, NullCheckOperator, Operator};

pub static AND: KeywordOperator = KeywordOperator::binary("AND", &["AND"]);
pub static OR: KeywordOperator = KeywordOperator::binary("OR", &["OR"]);
pub static NOT: KeywordOperator = KeywordOperator::new("NOT", &["NOT"], Arity::Exact(1));

pub static EQ: KeywordOperator = KeywordOperator::binary("=", &["="]);
pub static NE: KeywordOperator = KeywordOperator::binary("<>", &["<>"]);
pub static LT: KeywordOperator = KeywordOperator::binary("<", &["<"]);
pub static LTE: KeywordOperator = KeywordOperator::binary("<=", &["<="]);
pub static GT: KeywordOperator = KeywordOperator::binary(">", &[">"]);
pub static GTE: KeywordOperator = KeywordOperator::binary(">=", &[">="]);

pub static LIKE: KeywordOperator = KeywordOperator::binary("LIKE", &["LIKE"]);
pub static NOT_LIKE: KeywordOperator = KeywordOperator::binary("NOT LIKE", &["NOT LIKE"]);

pub static BETWEEN: KeywordOperator =
    KeywordOperator::new("BETWEEN", &["BETWEEN", "AND"], Arity::Exact(3));
pub static NOT_BETWEEN: KeywordOperator =
    KeywordOperator::new("NOT BETWEEN", &["NOT BETWEEN", "AND"], Arity::Exact(3));

pub static ADD: KeywordOperator = KeywordOperator::binary("+", &["+"]);
pub static SUB: KeywordOperator = KeywordOperator::binary("-", &["-"]);
pub static MUL: KeywordOperator = KeywordOperator::binary("*", &["*"]);
pub static DIV: KeywordOperator = KeywordOperator::binary("/", &["/"]);
pub static MOD: KeywordOperator = KeywordOperator::binary("%", &["%"]);

pub static IN: InOperator = InOperator::new("IN", "IN");
pub static NOT_IN: InOperator = InOperator::new("NOT IN", "NOT IN");

pub static ASSIGN: AssignOperator = AssignOperator;

pub static IS_NULL: NullCheckOperator = NullCheckOperator::new("IS NULL", "IS NULL");
pub static IS_NOT_NULL: NullCheckOperator = NullCheckOperator::new("IS NOT NULL", "IS NOT NULL");

static BUILTIN: [&dyn Operator; 23] = [
    &AND,
    &OR,
    &NOT,
    &EQ,
    &NE,
    &LT,
    &LTE,
    &GT,
    &GTE,
    &LIKE,
    &NOT_LIKE,
    &BETWEEN,
    &NOT_BETWEEN,
    &ADD,
    &SUB,
    &MUL,
    &DIV,
    &MOD,
    &IN,
    &NOT_IN,
    &ASSIGN,
    &IS_NULL,
    &IS_NOT_NULL,
];

/// Look up a built-in operator by name (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static dyn Operator> {
    let name = name.trim();
    BUILTIN
        .iter()
        .copied()
        .find(|op| op.name().eq_ignore_ascii_case(name))
}

/// All built-in operators.
pub fn builtin() -> &'static [&'static dyn Operator] {
    &BUILTIN
}
