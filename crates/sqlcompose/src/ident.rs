//! Validated SQL identifiers for named objects.
//!
//! [`Ident`] is how schema, table, column, variable and function names enter
//! the object model. Parsing rejects anything that could smuggle SQL through
//! a name:
//!
//! - Unquoted parts must match `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow any characters except NUL; `"` is escaped as `""`
//! - Parts are separated by `.`
//!
//! # Example
//! ```ignore
//! use sqlcompose::Ident;
//!
//! let t = Ident::parse("public.users")?;
//! assert_eq!(t.to_sql(), "public.users");
//! # Ok::<(), sqlcompose::SqlError>(())
//! ```

use crate::error::{SqlError, SqlResult};
use std::fmt;

/// A part of a SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    /// Unquoted identifier: must match `[A-Za-z_][A-Za-z0-9_$]*`.
    Unquoted(String),
    /// Quoted identifier: allows any characters except NUL.
    Quoted(String),
}

impl IdentPart {
    fn write_sql(&self, out: &mut String) {
        match self {
            IdentPart::Unquoted(s) => out.push_str(s),
            IdentPart::Quoted(s) => {
                out.push('"');
                out.push_str(&s.replace('"', "\"\""));
                out.push('"');
            }
        }
    }
}

/// A possibly dotted SQL identifier (`name`, `schema.table`, `"Odd Name"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    parts: Vec<IdentPart>,
}

impl Ident {
    /// Create a single quoted identifier from arbitrary text.
    pub fn quoted(name: &str) -> SqlResult<Self> {
        if name.is_empty() {
            return Err(SqlError::invalid_argument("Empty quoted identifier"));
        }
        if name.contains('\0') {
            return Err(SqlError::invalid_argument(
                "Identifier cannot contain NUL character",
            ));
        }
        Ok(Self {
            parts: vec![IdentPart::Quoted(name.to_string())],
        })
    }

    /// Single unquoted part for names known to be valid at compile time.
    pub(crate) fn trusted(name: &'static str) -> Self {
        Self {
            parts: vec![IdentPart::Unquoted(name.to_string())],
        }
    }

    /// Parse an identifier string, supporting dotted and quoted forms.
    ///
    /// - Dotted: `schema.table.column`
    /// - Quoted: `"CamelCase"."UserTable"`
    /// - Mixed: `public."UserTable".id`
    pub fn parse(s: &str) -> SqlResult<Self> {
        if s.is_empty() {
            return Err(SqlError::invalid_argument("Identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(SqlError::invalid_argument(
                "Identifier cannot contain NUL character",
            ));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        while chars.peek().is_some() {
            // A '.' separates parts and must be followed by another part.
            if !parts.is_empty() {
                match chars.next() {
                    Some('.') if chars.peek().is_none() => {
                        return Err(SqlError::invalid_argument("Trailing '.' in identifier"));
                    }
                    Some('.') => {}
                    Some(c) => {
                        return Err(SqlError::invalid_argument(format!(
                            "Expected '.' between identifier parts, got '{c}'"
                        )));
                    }
                    None => break,
                }
            }

            // Quoted part.
            if chars.peek() == Some(&'"') {
                chars.next(); // opening quote
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            // Escaped quote: ""
                            chars.next();
                            name.push('"');
                        }
                        Some('"') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(SqlError::invalid_argument("Unclosed quoted identifier"));
                        }
                    }
                }
                if name.is_empty() {
                    return Err(SqlError::invalid_argument("Empty quoted identifier"));
                }
                parts.push(IdentPart::Quoted(name));
                continue;
            }

            // Unquoted part.
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c == '.' {
                    break;
                }
                let accepted = if name.is_empty() {
                    // First char: letter or underscore.
                    c == '_' || c.is_ascii_alphabetic()
                } else {
                    // Then letters, digits, underscore or $.
                    c == '_' || c == '$' || c.is_ascii_alphanumeric()
                };
                if !accepted {
                    return Err(SqlError::invalid_argument(format!(
                        "Invalid character '{c}' in identifier '{s}'"
                    )));
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return Err(SqlError::invalid_argument("Empty identifier segment"));
            }
            parts.push(IdentPart::Unquoted(name));
        }

        if parts.is_empty() {
            return Err(SqlError::invalid_argument("Empty identifier"));
        }

        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[IdentPart] {
        &self.parts
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            part.write_sql(&mut out);
        }
        out
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Convert an input into an [`Ident`].
///
/// This is mainly for ergonomics in constructor APIs.
pub trait IntoIdent {
    fn into_ident(self) -> SqlResult<Ident>;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> SqlResult<Ident> {
        Ok(self)
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> SqlResult<Ident> {
        Ok(self.clone())
    }
}

impl IntoIdent for &str {
    fn into_ident(self) -> SqlResult<Ident> {
        Ident::parse(self)
    }
}

impl IntoIdent for String {
    fn into_ident(self) -> SqlResult<Ident> {
        Ident::parse(&self)
    }
}
