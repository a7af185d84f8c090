//! The default bodies of the [Dialect](../trait.Dialect.html) operations.
//!
//! An override that only adjusts its input can hand it on to these, keeping
//! itself as the dialect so that its other overrides still apply.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::Result;
use crate::dialect::{Dialect, HexCase};
use crate::error::{preview, Error, Operation};
use crate::fragment::Sql;
use crate::value::{RawValue, Value};

/// The SQL NULL keyword, never quoted.
pub(crate) const NULL: &str = "NULL";

/// Wraps `name` in `"`, doubling every `"` inside.
pub(crate) fn escape_identifier(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len() + 2);
    escaped.push('"');
    for c in name.chars() {
        if c == '"' {
            escaped.push('"');
        }
        escaped.push(c);
    }
    escaped.push('"');
    escaped
}

/// Wraps `s` in `'`, doubling every `'` inside.
pub(crate) fn escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    escaped.push('\'');
    for c in s.chars() {
        if c == '\'' {
            escaped.push('\'');
        }
        escaped.push(c);
    }
    escaped.push('\'');
    escaped
}

pub(crate) fn to_hex(bytes: &[u8], case: HexCase) -> String {
    use lazy_static::lazy_static;
    lazy_static! {
        static ref UPPER: Vec<String> = (0u8..=255).map(|n| format!("{:02X}", n)).collect();
        static ref LOWER: Vec<String> = (0u8..=255).map(|n| format!("{:02x}", n)).collect();
    }

    let lut = match case {
        HexCase::Upper => &*UPPER,
        HexCase::Lower => &*LOWER,
    };
    let mut hex = String::with_capacity(bytes.len() * 2);
    for &n in bytes {
        hex.push_str(&lut[n as usize]);
    }
    hex
}

pub(crate) fn to_binary_literal(bytes: &[u8], case: HexCase) -> String {
    format!("X'{}'", to_hex(bytes, case))
}

/// `YYYY-MM-DD HH:MM:SS`, with microseconds only when there are any.
/// Sub-microsecond digits are dropped.
pub(crate) fn format_timestamp(t: &DateTime<Utc>) -> String {
    if t.timestamp_subsec_micros() == 0 {
        t.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        t.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

fn passthrough(operation: Operation, sql: Sql) -> Sql {
    trace!(%operation, elements = sql.len(), "already escaped, passing through");
    sql
}

fn quoted(operation: Operation, fragments: Vec<String>) -> Sql {
    trace!(%operation, elements = fragments.len(), "quoted");
    Sql::from_vec(fragments)
}

fn type_error<D>(dialect: &D, operation: Operation, value: &RawValue<'_>) -> Error
where
    D: Dialect + ?Sized,
{
    debug!(%operation, kind = value.kind(), dialect = dialect.name(), "rejected value");
    Error::Type {
        operation,
        kind:   value.kind(),
        detail: dialect.error_level().detail(operation.expected(), || preview(value)),
    }
}

fn null_input<D>(dialect: &D, operation: Operation, index: usize) -> Error
where
    D: Dialect + ?Sized,
{
    debug!(%operation, index, dialect = dialect.name(), "rejected missing value");
    Error::NullInput {
        operation,
        index,
        detail: dialect.error_level().detail("use an identifier, not NULL", || format!("element {}", index)),
    }
}

/// Maps present elements with `f` and missing ones to `NULL`.
fn map_or_null<T, F>(values: Vec<Option<T>>, mut f: F) -> Vec<String>
where
    F: FnMut(T) -> String,
{
    values.into_iter()
        .map(|value| value.map_or_else(|| NULL.to_string(), &mut f))
        .collect()
}

/// Default of [Dialect::quote_identifier](../trait.Dialect.html#method.quote_identifier).
pub fn identifier<D>(dialect: &D, value: RawValue<'_>) -> Result<Sql>
where
    D: Dialect + ?Sized,
{
    const OP: Operation = Operation::Identifier;
    match value {
        RawValue::Sql(sql) => Ok(passthrough(OP, sql)),
        RawValue::Ident(ident) => {
            if ident.is_empty() {
                return Ok(quoted(OP, Vec::new()));
            }
            let mut parts = Vec::with_capacity(ident.len());
            for part in ident.parts() {
                let part = dialect.quote_identifier(RawValue::Text(vec![ Some(Cow::Borrowed(part.as_str())) ]))?;
                parts.extend(part);
            }
            Ok(quoted(OP, vec![ parts.join(".") ]))
        }
        RawValue::Text(names) => {
            let mut fragments = Vec::with_capacity(names.len());
            for (index, name) in names.iter().enumerate() {
                match name {
                    Some(name) => fragments.push(dialect.escape_identifier(name)),
                    None => return Err(null_input(dialect, OP, index)),
                }
            }
            Ok(quoted(OP, fragments))
        }
        RawValue::Null => Err(null_input(dialect, OP, 0)),
        other => Err(type_error(dialect, OP, &other)),
    }
}

/// Default of [Dialect::quote_string](../trait.Dialect.html#method.quote_string).
pub fn string<D>(dialect: &D, value: RawValue<'_>) -> Result<Sql>
where
    D: Dialect + ?Sized,
{
    const OP: Operation = Operation::String;
    match value {
        RawValue::Sql(sql) => Ok(passthrough(OP, sql)),
        RawValue::Text(texts) => {
            Ok(quoted(OP, map_or_null(texts, |text| dialect.escape_string(&text))))
        }
        other => Err(type_error(dialect, OP, &other)),
    }
}

/// Default of [Dialect::quote_literal](../trait.Dialect.html#method.quote_literal).
// Arms are in precedence order: escaped, text, blob list, bool, numeric.
pub fn literal<D>(dialect: &D, value: RawValue<'_>) -> Result<Sql>
where
    D: Dialect + ?Sized,
{
    const OP: Operation = Operation::Literal;
    match value {
        RawValue::Sql(sql) => Ok(passthrough(OP, sql)),
        text @ RawValue::Text(_) => dialect.quote_string(text),
        RawValue::List(items) => {
            let mut fragments = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::Null => fragments.push(NULL.to_string()),
                    Value::Bytes(bytes) => fragments.push(dialect.blob_literal(bytes)),
                    other => {
                        debug!(operation = %OP, index, kind = other.kind(), "rejected list element");
                        return Err(Error::UnsupportedElement {
                            index,
                            kind:   other.kind(),
                            detail: dialect.error_level().detail("expected bytes or NULL", || preview(other)),
                        });
                    }
                }
            }
            Ok(quoted(OP, fragments))
        }
        RawValue::Bool(flags) => Ok(quoted(OP, map_or_null(flags, |flag| dialect.bool_literal(flag)))),
        RawValue::Int(ints) => Ok(quoted(OP, map_or_null(ints, |int| int.to_string()))),
        RawValue::Float(floats) => {
            let mut fragments = Vec::with_capacity(floats.len());
            for (index, float) in floats.into_iter().enumerate() {
                match float {
                    Some(float) if float.is_infinite() => {
                        debug!(operation = %OP, index, "rejected infinite float");
                        return Err(Error::NonFinite {
                            index,
                            detail: dialect.error_level().detail("no literal for infinity", || float.to_string()),
                        });
                    }
                    Some(float) if !float.is_nan() => fragments.push(float.to_string()),
                    _ => fragments.push(NULL.to_string()),
                }
            }
            Ok(quoted(OP, fragments))
        }
        RawValue::Null => Ok(quoted(OP, vec![ NULL.to_string() ])),
        RawValue::Date(dates) => Ok(quoted(OP, map_or_null(dates, |date| dialect.date_literal(&date)))),
        RawValue::Timestamp(times) => Ok(quoted(OP, map_or_null(times, |time| dialect.timestamp_literal(&time)))),
        RawValue::Uuid(uuids) => {
            Ok(quoted(OP, map_or_null(uuids, |uuid| dialect.escape_string(&uuid.hyphenated().to_string()))))
        }
        other @ RawValue::Ident(_) => Err(type_error(dialect, OP, &other)),
    }
}
