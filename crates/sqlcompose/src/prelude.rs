//! Convenient imports for typical `sqlcompose` usage.
//!
//! ```ignore
//! use sqlcompose::prelude::*;
//! ```

pub use crate::{
    Alias, Expr, Function, IntoExpr, NamedObject, Param, ParamList, SqlError, SqlResult,
};

pub use crate::{
    DeleteStatement, InsertStatement, RawStatement, SelectStatement, SortOrder, SqlStatement,
    UpdateStatement,
};

pub use crate::{CommandBatcher, ExecConfig, PreparedCommand};
