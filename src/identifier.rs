use std::fmt;

use crate::Result;
use crate::error::{preview, Error, ErrorLevel};

/// A composite identifier, such as `schema.table`.
///
/// Each part is quoted on its own and the results are joined with `.`.
///
/// ```
/// # use quotesql::{ident, quote_identifier, Ansi};
/// let table = ident!("myschema", "mytable");
/// let sql = quote_identifier(&Ansi::new(), table).unwrap();
/// assert_eq!(sql.as_slice(), [r#""myschema"."mytable""#]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ident {
    parts: Vec<String>,
}

impl Ident {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Appends a part, e.g. a column after a table.
    pub fn join<S: Into<String>>(mut self, part: S) -> Self {
        self.parts.push(part.into());
        self
    }
}

/// Unquoted, for diagnostics only.
impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("."))
    }
}

impl From<Vec<String>> for Ident {
    fn from(parts: Vec<String>) -> Self {
        Self { parts }
    }
}

impl<'a> From<Vec<&'a str>> for Ident {
    fn from(parts: Vec<&'a str>) -> Self {
        Self::new(parts)
    }
}

struct Parser<'a> {
    input:       &'a str,
    pos:         usize,
    error_level: ErrorLevel,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, error_level: ErrorLevel) -> Self {
        Self {
            input,
            pos: 0,
            error_level,
        }
    }

    fn eof(&self) -> bool {
        self.input.len() <= self.pos
    }

    fn next_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn consume_char(&mut self) -> Result<char> {
        let c = self.next_char().ok_or_else(|| self.error("unexpected end of input"))?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    fn consume_while<F>(&mut self, f: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let start = self.pos;
        while let Some(c) = self.next_char() {
            if !f(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.input[start..self.pos].to_string()
    }

    /// Consumes a `quote` delimited string, collapsing doubled quotes.
    fn consume_quoted(&mut self, quote: char) -> Result<String> {
        let mut s = String::new();
        self.consume_char()?;

        while !self.eof() {
            let c = self.consume_char()?;
            if c == quote {
                if self.next_char() == Some(quote) {
                    self.consume_char()?;
                } else {
                    return Ok(s);
                }
            }
            s.push(c);
        }

        Err(self.error("unterminated quoted identifier"))
    }

    fn error(&self, hint: &str) -> Error {
        Error::Unquote {
            position: self.pos,
            detail:   self.error_level.detail(hint, || preview(self.input)),
        }
    }
}

/// Parses the output of ANSI identifier quoting back into its parts.
///
/// Quoted parts (`"a""b"`) and bare parts (`a`) may be mixed, separated by `.`.
pub(crate) fn unquote(input: &str, error_level: ErrorLevel) -> Result<Ident> {
    let mut parser = Parser::new(input, error_level);
    let mut parts = Vec::new();

    if parser.eof() {
        return Ok(Ident::default());
    }

    loop {
        let part = match parser.next_char() {
            Some('"') => parser.consume_quoted('"')?,
            _ => {
                let bare = parser.consume_while(|c| c != '.' && c != '"');
                if bare.is_empty() {
                    return Err(parser.error("empty identifier"));
                }
                bare
            }
        };
        parts.push(part);

        if parser.eof() {
            break;
        }
        match parser.consume_char()? {
            '.' if !parser.eof() => continue,
            '.' => return Err(parser.error("trailing '.'")),
            _ => return Err(parser.error("expected '.' after identifier")),
        }
    }

    Ok(Ident { parts })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Vec<String>> {
        unquote(s, ErrorLevel::Release).map(|ident| ident.parts)
    }

    #[test]
    fn quoted() {
        assert_eq!(parse(r#""users""#).unwrap(), ["users"]);
        assert_eq!(parse(r#""my""table""#).unwrap(), [r#"my"table"#]);
        assert_eq!(parse(r#""myschema"."mytable""#).unwrap(), ["myschema", "mytable"]);
        assert_eq!(parse(r#""a.b"."c""#).unwrap(), ["a.b", "c"]);
        assert_eq!(parse(r#""""#).unwrap(), [""]);
        assert_eq!(parse(r#""日本"."語""#).unwrap(), ["日本", "語"]);
    }

    #[test]
    fn bare() {
        assert_eq!(parse("").unwrap(), Vec::<String>::new());
        assert_eq!(parse("users").unwrap(), ["users"]);
        assert_eq!(parse("public.users").unwrap(), ["public", "users"]);
        assert_eq!(parse(r#"public."Users""#).unwrap(), ["public", "Users"]);
    }

    #[test]
    fn malformed() {
        assert_eq!(parse(r#""users"#), Err(Error::Unquote { position: 6, detail: None }));
        assert_eq!(parse(r#""a"b"#), Err(Error::Unquote { position: 4, detail: None }));
        assert_eq!(parse("a."), Err(Error::Unquote { position: 2, detail: None }));
        assert_eq!(parse("a..b"), Err(Error::Unquote { position: 2, detail: None }));
        assert_eq!(parse(r#"ab"c""#), Err(Error::Unquote { position: 3, detail: None }));
        assert!(parse(".a").is_err());
    }

    #[test]
    fn detail_follows_error_level() {
        let err = unquote(r#""x"#, ErrorLevel::Develop).unwrap_err();
        assert_eq!(err.detail(), Some("unterminated quoted identifier"));
    }

    #[test]
    fn ident() {
        let id = Ident::new(["public"]).join("users");
        assert_eq!(id.parts(), ["public", "users"]);
        assert_eq!(id.to_string(), "public.users");
        assert_eq!(Ident::from(vec!["a", "b"]).len(), 2);
        assert!(Ident::default().is_empty());
    }
}
