use std::fmt;

/// The quoting operation an [Error](./enum.Error.html) was raised from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    /// [quote_identifier](../fn.quote_identifier.html)
    Identifier,
    /// [quote_string](../fn.quote_string.html)
    String,
    /// [quote_literal](../fn.quote_literal.html)
    Literal,
}

impl Operation {
    pub(crate) fn expected(&self) -> &'static str {
        match self {
            Operation::Identifier |
            Operation::String     => "value must be character or already-escaped",
            Operation::Literal    => "value must be text, bool, int, float, blob list, date, timestamp, uuid or already-escaped",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Identifier => "quote_identifier",
            Operation::String     => "quote_string",
            Operation::Literal    => "quote_literal",
        })
    }
}

/// Enum listing possible errors from quotesql.
///
/// Every variant carries the structured context of the failure. The `detail`
/// field is filled in according to the [ErrorLevel](./enum.ErrorLevel.html)
/// of the dialect that raised it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// The value's kind is not accepted by the operation.
    #[error("{operation}: unsupported value of kind `{kind}`{}", suffix(.detail))]
    Type {
        operation: Operation,
        kind:      &'static str,
        detail:    Option<String>,
    },

    /// A missing value was supplied where NULL is not allowed.
    #[error("{operation}: element {index} is missing, identifiers cannot be NULL{}", suffix(.detail))]
    NullInput {
        operation: Operation,
        index:     usize,
        detail:    Option<String>,
    },

    /// A list element that is neither a byte sequence nor NULL.
    #[error("quote_literal: list element {index} of kind `{kind}` is neither bytes nor NULL{}", suffix(.detail))]
    UnsupportedElement {
        index:  usize,
        kind:   &'static str,
        detail: Option<String>,
    },

    /// An infinite float has no numeric literal form.
    #[error("quote_literal: element {index} is not a finite number{}", suffix(.detail))]
    NonFinite {
        index:  usize,
        detail: Option<String>,
    },

    /// The input of `unquote_identifier` is not a well-formed identifier.
    #[error("unquote_identifier: malformed identifier at byte {position}{}", suffix(.detail))]
    Unquote {
        position: usize,
        detail:   Option<String>,
    },
}

impl Error {
    /// Returns the extra message attached by the error level, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Type { detail, .. } |
            Error::NullInput { detail, .. } |
            Error::UnsupportedElement { detail, .. } |
            Error::NonFinite { detail, .. } |
            Error::Unquote { detail, .. } => detail.as_deref(),
        }
    }
}

fn suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" ({})", detail),
        None => String::new(),
    }
}

/// Change the output error message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorLevel {
    /// Only the structured fields. This is the level that should be set at release.
    Release,
    /// Adds a short hint. This is the level that should be set during development.
    Develop,

    #[cfg(debug_assertions)]
    /// Also shows a preview of the offending value.
    /// &#x26a0;&#xfe0f; **Not available when Release build**
    Debug,
}

impl Default for ErrorLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ErrorLevel::Develop
        } else {
            ErrorLevel::Release
        }
    }
}

impl ErrorLevel {
    #[allow(unused_variables)]
    pub(crate) fn detail<F>(&self, hint: &str, preview: F) -> Option<String>
    where
        F: FnOnce() -> String,
    {
        match self {
            ErrorLevel::Release => None,
            ErrorLevel::Develop => Some(hint.to_string()),
            #[cfg(debug_assertions)]
            ErrorLevel::Debug   => Some(format!("{}: {}", hint, preview())),
        }
    }
}

const PREVIEW_LEN: usize = 48;

/// Debug-formats `value`, cut to a bounded number of characters.
pub(crate) fn preview<T: fmt::Debug + ?Sized>(value: &T) -> String {
    let full = format!("{:?}", value);
    match full.char_indices().nth(PREVIEW_LEN) {
        Some((end, _)) => format!("{}...", &full[..end]),
        None => full,
    }
}
