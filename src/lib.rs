//! # QuoteSQL
//!
//! `quotesql` turns in-memory values into SQL text that is safe to
//! concatenate into a query: identifiers, string literals and typed
//! literals (numbers, booleans, blobs, dates, NULL).
//! The result is a [Sql](./struct.Sql.html) value, which every operation
//! passes through unchanged, so quoting twice never escapes twice.
//!
//! ```rust
//! use quotesql::prelude::*;
//!
//! let ansi = Ansi::new();
//!
//! let table = quote_identifier(&ansi, ident!("public", "users")).unwrap();
//! let name = quote_string(&ansi, "Robert'); DROP TABLE Students;--").unwrap();
//! let sql = format!("SELECT * FROM {} WHERE name = {}", table.join(""), name.join(""));
//! assert_eq!(sql, r#"SELECT * FROM "public"."users" WHERE name = 'Robert''); DROP TABLE Students;--'"#);
//!
//! // Already escaped, left alone.
//! assert_eq!(quote_string(&ansi, &name).unwrap(), name);
//!
//! let literals = quote_literal(&ansi, vec![Some(true), Some(false), None]).unwrap();
//! assert_eq!(literals.as_slice(), ["1", "0", "NULL"]);
//!
//! let blobs = quote_literal(&ansi, vec![Some(vec![1u8, 2, 3]), None]).unwrap();
//! assert_eq!(blobs.as_slice(), ["X'010203'", "NULL"]);
//! ```

mod dialect;
mod error;
mod fragment;
mod identifier;
pub mod quote;
mod value;

pub use crate::dialect::{Ansi, Dialect, HexCase};
pub use crate::error::{Error, ErrorLevel, Operation};
pub use crate::fragment::{make_escaped, Sql};
pub use crate::identifier::Ident;
pub use crate::value::{RawValue, Value};

/// A typedef of the result returned by many methods.
pub type Result<T, E = crate::error::Error> = std::result::Result<T, E>;

pub mod prelude {
    pub use crate::{
        ident, make_escaped, quote_identifier, quote_literal, quote_string, sql, unquote_identifier,
        Ansi, Dialect, Ident, RawValue, Sql, Value,
    };
}

/// Quotes `value` for use as a table, column or schema name.
///
/// Text is wrapped in `"` with every `"` doubled. An [Ident](./struct.Ident.html)
/// becomes one element with its quoted parts joined by `.`. Missing elements
/// are an error, as identifiers cannot be NULL.
///
/// # Examples
///
/// ```
/// # use quotesql::{quote_identifier, Ansi, Error};
/// let ansi = Ansi::new();
/// assert_eq!(quote_identifier(&ansi, r#"my"table"#).unwrap().as_slice(), [r#""my""table""#]);
/// assert!(matches!(quote_identifier(&ansi, 42), Err(Error::Type { .. })));
/// assert!(matches!(quote_identifier(&ansi, vec![None::<&str>]), Err(Error::NullInput { .. })));
/// ```
pub fn quote_identifier<'a, D, V>(dialect: &D, value: V) -> Result<Sql>
where
    D: Dialect + ?Sized,
    V: Into<RawValue<'a>>,
{
    dialect.quote_identifier(value.into())
}

/// Quotes text `value` as string literals.
///
/// Each element is wrapped in `'` with every `'` doubled; a missing element
/// becomes the keyword `NULL`.
///
/// # Examples
///
/// ```
/// # use quotesql::{quote_string, Ansi};
/// let sql = quote_string(&Ansi::new(), vec![Some("x"), None]).unwrap();
/// assert_eq!(sql.as_slice(), ["'x'", "NULL"]);
/// ```
pub fn quote_string<'a, D, V>(dialect: &D, value: V) -> Result<Sql>
where
    D: Dialect + ?Sized,
    V: Into<RawValue<'a>>,
{
    dialect.quote_string(value.into())
}

/// Quotes `value` as literals of the SQL type matching its kind.
///
/// Kind                  | Literal
/// --------------------- | -------
/// text                  | `'O''Reilly'`
/// list of bytes or NULL | `X'0102'`
/// bool                  | `1`, `0`
/// int, float            | `42`, `1.5`
/// date                  | `'2024-01-31'`
/// timestamp             | `'2024-01-31 12:00:00'`
/// uuid                  | `'67e55044-10b1-426f-9247-bb680e5fe0c8'`
/// null, missing, NaN    | `NULL`
///
/// # Examples
///
/// ```
/// # use quotesql::{quote_literal, Ansi, Value};
/// let ansi = Ansi::new();
/// assert_eq!(quote_literal(&ansi, 1.5).unwrap().as_slice(), ["1.5"]);
/// assert_eq!(quote_literal(&ansi, "1.5").unwrap().as_slice(), ["'1.5'"]);
/// assert!(quote_literal(&ansi, vec![Value::Null, Value::Int(1)]).is_err());
/// ```
pub fn quote_literal<'a, D, V>(dialect: &D, value: V) -> Result<Sql>
where
    D: Dialect + ?Sized,
    V: Into<RawValue<'a>>,
{
    dialect.quote_literal(value.into())
}

/// Parses a quoted identifier back into its parts.
///
/// # Examples
///
/// ```
/// # use quotesql::{ident, quote_identifier, unquote_identifier, Ansi};
/// let ansi = Ansi::new();
/// let quoted = quote_identifier(&ansi, ident!("my.schema", "ta\"ble")).unwrap();
/// assert_eq!(unquote_identifier(&ansi, &quoted.join("")).unwrap(), ident!("my.schema", "ta\"ble"));
/// ```
pub fn unquote_identifier<D>(dialect: &D, quoted: &str) -> Result<Ident>
where
    D: Dialect + ?Sized,
{
    dialect.unquote_identifier(quoted)
}

/// Marks the given fragments as valid SQL.
///
/// Don't use if the values are unreliable (e.g. entered by user).
///
/// ```rust
/// use quotesql::sql;
/// let sql = sql!("COUNT(*)", "NULL");
/// assert_eq!(sql.as_slice(), ["COUNT(*)", "NULL"]);
/// ```
#[macro_export]
macro_rules! sql {
    () => {
        $crate::Sql::empty()
    };
    ( $( $fragment:expr ),+ $(,)? ) => {
        $crate::Sql::new(vec![ $( ::std::string::String::from($fragment) ),+ ])
    };
}

/// Builds a composite [Ident](./struct.Ident.html) from its parts.
///
/// ```rust
/// use quotesql::ident;
/// assert_eq!(ident!("public", "users").parts(), ["public", "users"]);
/// ```
#[macro_export]
macro_rules! ident {
    ( $( $part:expr ),* $(,)? ) => {
        $crate::Ident::new(::std::vec::Vec::<::std::string::String>::from([ $( ::std::string::String::from($part) ),* ]))
    };
}
