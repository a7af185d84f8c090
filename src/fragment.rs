use std::fmt;
use std::ops::Add;

/// A sequence of SQL fragments that are already escaped.
///
/// Every quoting operation returns a `Sql`, and every quoting operation
/// returns a `Sql` input unchanged, so quoting twice never escapes twice.
///
/// # Examples
///
/// ```
/// use quotesql::{quote_string, Ansi, Sql};
///
/// let once = quote_string(&Ansi::new(), "O'Brien").unwrap();
/// let twice = quote_string(&Ansi::new(), &once).unwrap();
/// assert_eq!(once, twice);
/// assert_eq!(twice.as_slice(), ["'O''Brien'"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sql {
    fragments: Vec<String>,
}

impl Sql {
    /// Marks every element of `fragments` as valid SQL without escaping it.
    ///
    /// Don't use if the values are unreliable (e.g. entered by user).
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// A fragment sequence without elements.
    pub const fn empty() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    pub(crate) fn from_vec(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.fragments.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.fragments
    }

    pub fn into_inner(self) -> Vec<String> {
        self.fragments
    }

    /// Concatenates the fragments with `sep` into one piece of SQL text.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quotesql::{quote_literal, Ansi};
    /// let values = quote_literal(&Ansi::new(), vec![Some(1), None, Some(3)]).unwrap();
    /// assert_eq!(format!("VALUES ({})", values.join(", ")), "VALUES (1, NULL, 3)");
    /// ```
    pub fn join(&self, sep: &str) -> String {
        self.fragments.join(sep)
    }
}

/// Same as [Sql::new](./struct.Sql.html#method.new).
pub fn make_escaped<I, S>(fragments: I) -> Sql
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Sql::new(fragments)
}

/// One `<SQL> ` prefixed line per fragment, for diagnostics.
impl fmt::Display for Sql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "<SQL> {}", fragment)?;
        }
        Ok(())
    }
}

impl Add for Sql {
    type Output = Sql;
    #[inline]
    fn add(mut self, other: Sql) -> Sql {
        self.fragments.extend(other.fragments);
        self
    }
}

impl<'b> Add<&'b Sql> for Sql {
    type Output = Sql;
    #[inline]
    fn add(mut self, other: &'b Sql) -> Sql {
        self.fragments.extend_from_slice(&other.fragments);
        self
    }
}

/// Hard-coded strings are trusted.
impl From<&'static str> for Sql {
    fn from(s: &'static str) -> Self {
        Self::new([s])
    }
}

impl From<Vec<&'static str>> for Sql {
    fn from(v: Vec<&'static str>) -> Self {
        Self::new(v)
    }
}

impl FromIterator<String> for Sql {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl IntoIterator for Sql {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;
    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sql {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

impl AsRef<[String]> for Sql {
    #[inline]
    fn as_ref(&self) -> &[String] {
        &self.fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct() {
        assert!(Sql::empty().is_empty());
        assert_eq!(Sql::new(Vec::<String>::new()), Sql::empty());
        assert_eq!(Sql::from("SELECT").as_slice(), ["SELECT"]);
        assert_eq!(make_escaped(["a", "b"]).len(), 2);
        assert_eq!(crate::sql!("a", "b"), make_escaped(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(crate::sql!(), Sql::empty());
    }

    #[test]
    fn display() {
        assert_eq!(Sql::empty().to_string(), "");
        assert_eq!(Sql::from("1").to_string(), "<SQL> 1");
        assert_eq!(Sql::new(["'a'", "NULL"]).to_string(), "<SQL> 'a'\n<SQL> NULL");
    }

    #[test]
    #[allow(clippy::op_ref)]
    fn concat() {
        let a = Sql::from("SELECT");
        let b = Sql::new(["1", "2"]);
        assert_eq!((a.clone() + &b).as_slice(), ["SELECT", "1", "2"]);
        assert_eq!((a + b + Sql::empty()).len(), 3);
    }

    #[test]
    fn join_and_iterate() {
        let sql: Sql = vec!["\"a\"".to_string(), "\"b\"".to_string()].into_iter().collect();
        assert_eq!(sql.join(", "), "\"a\", \"b\"");
        assert_eq!(sql.iter().count(), 2);
        assert_eq!((&sql).into_iter().map(String::len).sum::<usize>(), 6);
        assert_eq!(sql.into_inner(), ["\"a\"", "\"b\""]);
    }
}
