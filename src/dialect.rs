use chrono::{DateTime, NaiveDate, Utc};

use crate::Result;
use crate::error::ErrorLevel;
use crate::identifier::{self, Ident};
use crate::quote;
use crate::fragment::Sql;
use crate::value::RawValue;

/// The quoting rules of a database backend.
///
/// Every method has an ANSI SQL-92 default. A backend overrides only what
/// differs: usually one of the element hooks (`escape_identifier`,
/// `escape_string`, `blob_literal`, ...), or one of the operations when
/// a whole kind of value must be handled differently.
///
/// ```
/// use quotesql::{quote_identifier, quote_literal, Dialect};
///
/// struct Backtick;
///
/// impl Dialect for Backtick {
///     fn name(&self) -> &str {
///         "backtick"
///     }
///
///     fn escape_identifier(&self, name: &str) -> String {
///         format!("`{}`", name.replace('`', "``"))
///     }
/// }
///
/// assert_eq!(quote_identifier(&Backtick, "a`b").unwrap().as_slice(), ["`a``b`"]);
/// assert_eq!(quote_literal(&Backtick, 42).unwrap().as_slice(), ["42"]);
/// ```
pub trait Dialect: Send + Sync {
    fn name(&self) -> &str {
        "ANSI"
    }

    /// Controls how much context errors carry.
    fn error_level(&self) -> ErrorLevel {
        ErrorLevel::default()
    }

    /// Quotes one identifier part.
    fn escape_identifier(&self, name: &str) -> String {
        quote::escape_identifier(name)
    }

    /// Quotes one string literal.
    fn escape_string(&self, s: &str) -> String {
        quote::escape_string(s)
    }

    /// Renders one blob literal.
    fn blob_literal(&self, bytes: &[u8]) -> String {
        quote::to_binary_literal(bytes, HexCase::Upper)
    }

    /// Renders one boolean as the numbers `1` and `0`.
    fn bool_literal(&self, value: bool) -> String {
        i64::from(value).to_string()
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        self.escape_string(&date.format("%Y-%m-%d").to_string())
    }

    fn timestamp_literal(&self, time: &DateTime<Utc>) -> String {
        self.escape_string(&quote::format_timestamp(time))
    }

    fn quote_identifier(&self, value: RawValue<'_>) -> Result<Sql> {
        quote::identifier(self, value)
    }

    fn quote_string(&self, value: RawValue<'_>) -> Result<Sql> {
        quote::string(self, value)
    }

    fn quote_literal(&self, value: RawValue<'_>) -> Result<Sql> {
        quote::literal(self, value)
    }

    fn unquote_identifier(&self, quoted: &str) -> Result<Ident> {
        identifier::unquote(quoted, self.error_level())
    }
}

/// Digit case of blob literals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum HexCase {
    #[default]
    Upper,
    Lower,
}

/// The default ANSI SQL-92 dialect.
///
/// ```
/// # use quotesql::{quote_literal, Ansi, ErrorLevel, HexCase};
/// let ansi = Ansi::new()
///     .with_error_level(ErrorLevel::Release)
///     .with_hex_case(HexCase::Lower);
/// assert_eq!(quote_literal(&ansi, vec![0xABu8]).unwrap().as_slice(), ["X'ab'"]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Ansi {
    error_level: ErrorLevel,
    hex_case:    HexCase,
}

impl Ansi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the error level.
    /// The default value is [ErrorLevel](./enum.ErrorLevel.html)::Develop for debug builds and [ErrorLevel](./enum.ErrorLevel.html)::Release for release builds.
    pub fn with_error_level(mut self, level: ErrorLevel) -> Self {
        self.error_level = level;
        self
    }

    pub fn with_hex_case(mut self, case: HexCase) -> Self {
        self.hex_case = case;
        self
    }
}

impl Dialect for Ansi {
    fn error_level(&self) -> ErrorLevel {
        self.error_level
    }

    fn blob_literal(&self, bytes: &[u8]) -> String {
        quote::to_binary_literal(bytes, self.hex_case)
    }
}
