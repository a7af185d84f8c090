use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::identifier::Ident;
use crate::fragment::Sql;

/// A single element of a [RawValue::List](./enum.RawValue.html#variant.List).
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
}

impl<'a> Value<'a> {
    /// The name of this element's kind, as reported in errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null     => "null",
            Value::Bool(_)  => "bool",
            Value::Int(_)   => "int",
            Value::Float(_) => "float",
            Value::Text(_)  => "text",
            Value::Bytes(_) => "bytes",
        }
    }
}

/// Values accepted by the quoting operations.
///
/// Most variants hold a sequence of elements where `None` is a missing value.
/// The quoting operations dispatch on the variant, so the kind of a value is
/// always known before anything is escaped.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue<'a> {
    /// A single NULL of no particular type.
    Null,
    Bool(Vec<Option<bool>>),
    /// Wide enough for every `u64` and `i128`. `u128` has no conversion.
    Int(Vec<Option<i128>>),
    Float(Vec<Option<f64>>),
    Text(Vec<Option<Cow<'a, str>>>),
    /// A heterogeneous list. As a literal only `Bytes` and `Null` elements are accepted.
    List(Vec<Value<'a>>),
    Date(Vec<Option<NaiveDate>>),
    Timestamp(Vec<Option<DateTime<Utc>>>),
    Uuid(Vec<Option<Uuid>>),
    /// Already escaped. Returned unchanged by every operation.
    Sql(Sql),
    /// A composite identifier. Accepted by identifier quoting only.
    Ident(Ident),
}

impl<'a> RawValue<'a> {
    /// The name of this value's kind, as reported in errors.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null         => "null",
            RawValue::Bool(_)      => "bool",
            RawValue::Int(_)       => "int",
            RawValue::Float(_)     => "float",
            RawValue::Text(_)      => "text",
            RawValue::List(_)      => "list",
            RawValue::Date(_)      => "date",
            RawValue::Timestamp(_) => "timestamp",
            RawValue::Uuid(_)      => "uuid",
            RawValue::Sql(_)       => "sql",
            RawValue::Ident(_)     => "ident",
        }
    }
}

impl<'a> From<()> for RawValue<'a> {
    fn from(_: ()) -> Self {
        RawValue::Null
    }
}

impl<'a> From<Sql> for RawValue<'a> {
    fn from(sql: Sql) -> Self {
        RawValue::Sql(sql)
    }
}

impl<'a, 'b> From<&'b Sql> for RawValue<'a> {
    fn from(sql: &'b Sql) -> Self {
        RawValue::Sql(sql.clone())
    }
}

impl<'a> From<Ident> for RawValue<'a> {
    fn from(ident: Ident) -> Self {
        RawValue::Ident(ident)
    }
}

impl<'a> From<Vec<Value<'a>>> for RawValue<'a> {
    fn from(values: Vec<Value<'a>>) -> Self {
        RawValue::List(values)
    }
}

macro_rules! impl_from_scalar_for_RawValue {
    ( $variant:ident => $( $t:ty : $conv:path ),* ) => {$(
        impl<'a> From<$t> for RawValue<'a> {
            fn from(x: $t) -> Self {
                RawValue::$variant(vec![ Some($conv(x)) ])
            }
        }

        impl<'a> From<Option<$t>> for RawValue<'a> {
            fn from(x: Option<$t>) -> Self {
                RawValue::$variant(vec![ x.map($conv) ])
            }
        }

        impl<'a> From<Vec<$t>> for RawValue<'a> {
            fn from(x: Vec<$t>) -> Self {
                RawValue::$variant(x.into_iter().map(|x| Some($conv(x))).collect())
            }
        }

        impl<'a> From<Vec<Option<$t>>> for RawValue<'a> {
            fn from(x: Vec<Option<$t>>) -> Self {
                RawValue::$variant(x.into_iter().map(|x| x.map($conv)).collect())
            }
        }

        impl<'a, 'b> From<&'b [$t]> for RawValue<'a> {
            fn from(x: &'b [$t]) -> Self {
                RawValue::$variant(x.iter().map(|&x| Some($conv(x))).collect())
            }
        }
    )*};
}

fn usize_to_int(x: usize) -> i128 {
    x as i128
}

fn isize_to_int(x: isize) -> i128 {
    x as i128
}

/// Widens through the shortest decimal form of `x`, so `0.1f32` renders as
/// `0.1` and not as the exact binary value `0.10000000149011612`.
fn f32_to_float(x: f32) -> f64 {
    x.to_string().parse().unwrap_or_else(|_| f64::from(x))
}

impl_from_scalar_for_RawValue!(Bool => bool: bool::from);
impl_from_scalar_for_RawValue!(Int =>
    i8: i128::from, i16: i128::from, i32: i128::from, i64: i128::from, i128: i128::from,
    u16: i128::from, u32: i128::from, u64: i128::from, usize: usize_to_int, isize: isize_to_int);
impl_from_scalar_for_RawValue!(Float => f32: f32_to_float, f64: f64::from);
impl_from_scalar_for_RawValue!(Date => NaiveDate: NaiveDate::from);
impl_from_scalar_for_RawValue!(Timestamp => DateTime<Utc>: DateTime::<Utc>::from);
impl_from_scalar_for_RawValue!(Uuid => Uuid: Uuid::from);

// `Vec<u8>` is a blob, so `u8` only converts as a scalar.
impl<'a> From<u8> for RawValue<'a> {
    fn from(x: u8) -> Self {
        RawValue::Int(vec![ Some(i128::from(x)) ])
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(s: &'a str) -> Self {
        RawValue::Text(vec![ Some(Cow::Borrowed(s)) ])
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(s: &'a String) -> Self {
        RawValue::Text(vec![ Some(Cow::Borrowed(s.as_str())) ])
    }
}

impl<'a> From<String> for RawValue<'a> {
    fn from(s: String) -> Self {
        RawValue::Text(vec![ Some(Cow::Owned(s)) ])
    }
}

impl<'a> From<Option<&'a str>> for RawValue<'a> {
    fn from(s: Option<&'a str>) -> Self {
        RawValue::Text(vec![ s.map(Cow::Borrowed) ])
    }
}

impl<'a> From<Option<String>> for RawValue<'a> {
    fn from(s: Option<String>) -> Self {
        RawValue::Text(vec![ s.map(Cow::Owned) ])
    }
}

impl<'a> From<Vec<&'a str>> for RawValue<'a> {
    fn from(texts: Vec<&'a str>) -> Self {
        RawValue::Text(texts.into_iter().map(|s| Some(Cow::Borrowed(s))).collect())
    }
}

impl<'a> From<Vec<String>> for RawValue<'a> {
    fn from(texts: Vec<String>) -> Self {
        RawValue::Text(texts.into_iter().map(|s| Some(Cow::Owned(s))).collect())
    }
}

impl<'a, 'b> From<&'b [&'a str]> for RawValue<'a> {
    fn from(texts: &'b [&'a str]) -> Self {
        RawValue::Text(texts.iter().map(|&s| Some(Cow::Borrowed(s))).collect())
    }
}

impl<'a> From<&'a [String]> for RawValue<'a> {
    fn from(texts: &'a [String]) -> Self {
        RawValue::Text(texts.iter().map(|s| Some(Cow::Borrowed(s.as_str()))).collect())
    }
}

impl<'a> From<&'a Vec<String>> for RawValue<'a> {
    fn from(texts: &'a Vec<String>) -> Self {
        RawValue::from(texts.as_slice())
    }
}

impl<'a> From<Vec<Option<&'a str>>> for RawValue<'a> {
    fn from(texts: Vec<Option<&'a str>>) -> Self {
        RawValue::Text(texts.into_iter().map(|s| s.map(Cow::Borrowed)).collect())
    }
}

impl<'a> From<Vec<Option<String>>> for RawValue<'a> {
    fn from(texts: Vec<Option<String>>) -> Self {
        RawValue::Text(texts.into_iter().map(|s| s.map(Cow::Owned)).collect())
    }
}

/// A single blob.
impl<'a> From<Vec<u8>> for RawValue<'a> {
    fn from(bytes: Vec<u8>) -> Self {
        RawValue::List(vec![ Value::Bytes(Cow::Owned(bytes)) ])
    }
}

/// A single blob.
impl<'a> From<&'a [u8]> for RawValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        RawValue::List(vec![ Value::Bytes(Cow::Borrowed(bytes)) ])
    }
}

/// A sequence of blobs, `None` is NULL.
impl<'a> From<Vec<Option<Vec<u8>>>> for RawValue<'a> {
    fn from(blobs: Vec<Option<Vec<u8>>>) -> Self {
        RawValue::List(
            blobs.into_iter()
                .map(|blob| blob.map_or(Value::Null, |b| Value::Bytes(Cow::Owned(b))))
                .collect())
    }
}

/// A sequence of blobs, `None` is NULL.
impl<'a> From<Vec<Option<&'a [u8]>>> for RawValue<'a> {
    fn from(blobs: Vec<Option<&'a [u8]>>) -> Self {
        RawValue::List(
            blobs.into_iter()
                .map(|blob| blob.map_or(Value::Null, |b| Value::Bytes(Cow::Borrowed(b))))
                .collect())
    }
}

impl<'a> From<Vec<Vec<u8>>> for RawValue<'a> {
    fn from(blobs: Vec<Vec<u8>>) -> Self {
        RawValue::List(blobs.into_iter().map(|b| Value::Bytes(Cow::Owned(b))).collect())
    }
}

impl<'a> From<()> for Value<'a> {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(x: bool) -> Self {
        Value::Bool(x)
    }
}

macro_rules! impl_from_int_for_Value {
    ( $($t:ty),* ) => {$(
        impl<'a> From<$t> for Value<'a> {
            fn from(x: $t) -> Self {
                Value::Int(i64::from(x))
            }
        }
    )*};
}

impl_from_int_for_Value!(i8, i16, i32, i64, u8, u16, u32);

impl<'a> From<f64> for Value<'a> {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<String> for Value<'a> {
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Value::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a> From<Vec<u8>> for Value<'a> {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(Cow::Owned(bytes))
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(x: Option<T>) -> Self {
        x.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::approx_constant)]
    fn scalars() {
        assert_eq!(RawValue::from(42), RawValue::Int(vec![Some(42)]));
        assert_eq!(RawValue::from(7u8), RawValue::Int(vec![Some(7)]));
        assert_eq!(RawValue::from(None::<i32>), RawValue::Int(vec![None]));
        assert_eq!(RawValue::from(3.14f64), RawValue::Float(vec![Some(3.14)]));
        assert_eq!(RawValue::from(true), RawValue::Bool(vec![Some(true)]));
        assert_eq!(RawValue::from(()), RawValue::Null);
    }

    #[test]
    fn wide_integers() {
        assert_eq!(RawValue::from(3usize), RawValue::Int(vec![Some(3)]));
        assert_eq!(RawValue::from(-3isize), RawValue::Int(vec![Some(-3)]));
        assert_eq!(RawValue::from(u64::MAX), RawValue::Int(vec![Some(18_446_744_073_709_551_615)]));
        assert_eq!(RawValue::from(vec![i128::MIN]), RawValue::Int(vec![Some(i128::MIN)]));
    }

    #[test]
    fn f32_keeps_its_decimal_form() {
        assert_eq!(RawValue::from(0.1f32), RawValue::Float(vec![Some(0.1)]));
        assert_eq!(RawValue::from(vec![Some(1.1f32), None]), RawValue::Float(vec![Some(1.1), None]));
        assert_eq!(RawValue::from(f32::INFINITY), RawValue::Float(vec![Some(f64::INFINITY)]));
        assert!(matches!(RawValue::from(f32::NAN), RawValue::Float(v) if v[0].is_some_and(f64::is_nan)));
    }

    #[test]
    fn sequences() {
        assert_eq!(
            RawValue::from(vec![Some(true), None]),
            RawValue::Bool(vec![Some(true), None]));
        assert_eq!(
            RawValue::from(&[1i32, 2][..]),
            RawValue::Int(vec![Some(1), Some(2)]));
        assert_eq!(
            RawValue::from(vec![Some("x"), None]),
            RawValue::Text(vec![Some(Cow::Borrowed("x")), None]));
        let owned = vec![String::from("a"), String::from("b")];
        assert_eq!(RawValue::from(&owned), RawValue::from(vec!["a", "b"]));
    }

    #[test]
    fn blobs() {
        assert_eq!(
            RawValue::from(vec![1u8, 2, 3]),
            RawValue::List(vec![Value::Bytes(Cow::Owned(vec![1, 2, 3]))]));
        assert_eq!(
            RawValue::from(vec![Some(vec![1u8]), None]),
            RawValue::List(vec![Value::from(vec![1u8]), Value::Null]));
    }

    #[test]
    fn values() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some(5i32)), Value::Int(5));
        assert_eq!(Value::from(()).kind(), "null");
        assert_eq!(Value::from("a").kind(), "text");
        assert_eq!(Value::from(1.5).kind(), "float");
    }

    #[test]
    fn kind() {
        assert_eq!(RawValue::from("a").kind(), "text");
        assert_eq!(RawValue::from(vec![Value::Null]).kind(), "list");
        assert_eq!(RawValue::from(Sql::empty()).kind(), "sql");
        assert_eq!(RawValue::from(Ident::new(["a"])).kind(), "ident");
        assert_eq!(RawValue::from(Uuid::nil()).kind(), "uuid");
    }
}
