//! # sqlcompose
//!
//! A composable SQL statement object model.
//!
//! ## Features
//!
//! - **Expressions**: immutable text + bind parameters, combined through operators
//! - **Named objects**: schemas, tables, columns and variables with fullname resolution
//! - **Clauses and statements**: SELECT / INSERT / UPDATE / DELETE built from ordered clauses
//! - **Cached rendering**: text is rendered lazily and cleared on every mutation
//! - **Parameter de-duplication**: a handle shared by several clauses is bound once
//! - **Batching**: statements grouped into commands for a `tokio-postgres` executor
//!
//! ```ignore
//! use sqlcompose::prelude::*;
//!
//! let users = NamedObject::table("users")?;
//! let id = users.column("id")?;
//! let wanted = Param::new("$1", 5_i64)?;
//!
//! let mut stmt = SelectStatement::new();
//! stmt.add_expression(&id);
//! stmt.add_expression(users.column("name")?);
//! stmt.set_source(&users);
//! stmt.set_condition(id.to_expr().equals(&Expr::param(wanted))?);
//!
//! // SELECT users.id, users.name FROM users WHERE (users.id) = ($1)
//! let rows = client.query(stmt.text()?, &stmt.parameters().as_refs()).await?;
//! ```

pub mod alias;
pub mod batch;
mod cache;
pub mod clause;
pub mod combined;
pub mod command;
pub mod config;
pub mod error;
pub mod expr;
pub mod function;
pub mod ident;
pub mod object;
pub mod operator;
pub mod param;
pub mod prelude;
pub mod statement;

pub use alias::Alias;
pub use batch::{CommandBatcher, PreparedCommand};
pub use clause::{
    Clause, ClauseKind, ConditionClause, FieldValueClause, FieldValueMode, FromClause,
    GroupByClause, JoinKind, OrderByClause, SelectClause, SortOrder,
};
pub use combined::Components;
pub use command::{CommandTextProvider, DelimitedCommandText};
pub use config::ExecConfig;
pub use error::{SqlError, SqlResult};
pub use expr::{Expr, IntoExpr, all_of, any_of};
pub use function::Function;
pub use ident::{Ident, IdentPart, IntoIdent};
pub use object::{NamedObject, ObjectKind};
pub use operator::{Arity, Operator, ops};
pub use param::{Param, ParamDirection, ParamList};
pub use statement::{
    DeleteStatement, InsertStatement, RawStatement, SelectStatement, SqlStatement, StatementKind,
    UpdateStatement,
};

// Re-export the parameter type vocabulary used by `Param::typed`.
pub use tokio_postgres::types::{ToSql, Type};
