mod common;

use std::borrow::Cow;
use std::sync::Arc;

use quotesql::prelude::*;
use quotesql::{Error, Result};

/// A MySQL flavoured dialect: backtick identifiers, backslash escapes, TRUE/FALSE.
struct Backtick;

impl Dialect for Backtick {
    fn name(&self) -> &str {
        "backtick"
    }

    fn escape_identifier(&self, name: &str) -> String {
        format!("`{}`", name.replace('`', "``"))
    }

    fn escape_string(&self, s: &str) -> String {
        format!("'{}'", s.replace('\\', "\\\\").replace('\'', "''"))
    }

    fn bool_literal(&self, value: bool) -> String {
        String::from(if value { "TRUE" } else { "FALSE" })
    }
}

/// A PostgreSQL flavoured dialect: bytea blobs, and quoted identifiers must be
/// lower case.
struct Bytea;

impl Dialect for Bytea {
    fn blob_literal(&self, bytes: &[u8]) -> String {
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        format!("'\\x{}'", hex)
    }

    fn quote_identifier(&self, value: RawValue<'_>) -> Result<Sql> {
        let value = match value {
            RawValue::Text(names) => RawValue::Text(
                names.into_iter().map(|name| name.map(|n| Cow::Owned(n.to_lowercase()))).collect()),
            other => other,
        };
        quotesql::quote::identifier(self, value)
    }
}

#[test]
fn element_hooks() {
    common::init_tracing();
    assert_eq!(quote_identifier(&Backtick, "a`b").unwrap().as_slice(), ["`a``b`"]);
    assert_eq!(quote_identifier(&Backtick, ident!("db", "t")).unwrap().as_slice(), ["`db`.`t`"]);
    assert_eq!(quote_string(&Backtick, "a\\'b").unwrap().as_slice(), ["'a\\\\''b'"]);
    assert_eq!(
        quote_literal(&Backtick, vec![Some(true), Some(false), None]).unwrap().as_slice(),
        ["TRUE", "FALSE", "NULL"]);
    // Text literals go through the dialect's string quoting.
    assert_eq!(quote_literal(&Backtick, "a\\b").unwrap().as_slice(), ["'a\\\\b'"]);
    // Untouched defaults stay ANSI.
    assert_eq!(quote_literal(&Backtick, vec![1u8, 2]).unwrap().as_slice(), ["X'0102'"]);
}

#[test]
fn operation_override() {
    common::init_tracing();
    assert_eq!(quote_identifier(&Bytea, "Users").unwrap().as_slice(), ["\"users\""]);
    // Composite parts are quoted through the overridden operation.
    assert_eq!(quote_identifier(&Bytea, ident!("Public", "Users")).unwrap().as_slice(), ["\"public\".\"users\""]);
    assert_eq!(
        quote_literal(&Bytea, vec![Some(vec![0xde_u8, 0xad]), None]).unwrap().as_slice(),
        ["'\\xdead'", "NULL"]);
}

#[test]
fn escaped_passthrough_in_every_dialect() {
    common::init_tracing();
    let sql = sql!("`x`", "'y'");
    let dialects: Vec<Box<dyn Dialect>> = vec![Box::new(Ansi::new()), Box::new(Backtick), Box::new(Bytea)];
    for dialect in &dialects {
        assert_eq!(quote_identifier(dialect.as_ref(), &sql).unwrap(), sql);
        assert_eq!(quote_string(dialect.as_ref(), &sql).unwrap(), sql);
        assert_eq!(quote_literal(dialect.as_ref(), &sql).unwrap(), sql);
    }
}

#[test]
fn errors_are_the_same_kind_in_every_dialect() {
    common::init_tracing();
    assert!(matches!(quote_identifier(&Backtick, 1), Err(Error::Type { .. })));
    assert!(matches!(quote_identifier(&Bytea, vec![None::<&str>]), Err(Error::NullInput { .. })));
    assert!(matches!(quote_string(&Backtick, true), Err(Error::Type { .. })));
}

#[test]
fn shared_between_threads() {
    common::init_tracing();
    let dialect: Arc<dyn Dialect> = Arc::new(Ansi::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dialect = Arc::clone(&dialect);
            std::thread::spawn(move || {
                let name = format!("col'{}\"", i);
                (
                    quote_identifier(dialect.as_ref(), name.as_str()).unwrap(),
                    quote_string(dialect.as_ref(), name).unwrap(),
                )
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (identifier, string) = handle.join().unwrap();
        assert_eq!(identifier.as_slice(), [format!("\"col'{}\"\"\"", i)]);
        assert_eq!(string.as_slice(), [format!("'col''{}\"'", i)]);
    }
}
