//! Error type shared by every stage of a conversion.
//!
//! A run stops at the first error; there is no partial-result mode.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A token matched none of the literal, constant or postfix forms.
    #[error("unknown token in expression: {token}")]
    UnknownToken { token: String },

    /// A postfix expression underflowed its stack, left the wrong number of
    /// values behind, or hit an arithmetic failure; also out-of-range literals.
    #[error("invalid expression '{expr}': {reason}")]
    InvalidExpression { expr: String, reason: String },

    /// A line is neither a constant declaration nor an assignment.
    #[error("invalid syntax on line {line}: {text}")]
    Syntax { line: usize, text: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn unknown_token(token: impl Into<String>) -> Self {
        Error::UnknownToken { token: token.into() }
    }

    pub(crate) fn invalid(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidExpression {
            expr: expr.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::unknown_token("foo").to_string(),
            "unknown token in expression: foo"
        );
        assert_eq!(
            Error::invalid("1 +", "stack underflow").to_string(),
            "invalid expression '1 +': stack underflow"
        );
        let e = Error::Syntax {
            line: 2,
            text: "invalid line".into(),
        };
        assert_eq!(e.to_string(), "invalid syntax on line 2: invalid line");
    }
}
