//! Parser error types.

use crate::lexer::{LexError, TokenKind};
use crate::schema::Schema;

/// A parse error. The first error aborts the current parse; there is no
/// recovery or resynchronization.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A token was present but did not match the expected production.
    /// When several tokens were consumed before the mismatch was
    /// detected, `found` is the concatenation of their literals.
    #[error("found {found:?}, expected {expected}")]
    Unexpected {
        /// Literal text of the offending token(s).
        found: String,
        /// Name of the expected construct.
        expected: String,
    },

    /// End of input where a token was required.
    #[error("unexpected EOF")]
    UnexpectedEof,

    /// A top-level token outside the supported dialect.
    #[error("unexpected {kind:?}: {literal:?}")]
    UnexpectedStatement {
        /// Kind of the offending token.
        kind: TokenKind,
        /// Literal text of the offending token.
        literal: String,
    },

    /// The scanner failed.
    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    /// Creates a "found X, expected Y" error.
    pub(crate) fn unexpected(found: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Unexpected {
            found: found.into(),
            expected: expected.into(),
        }
    }
}

/// A schema parse failure, carrying every table successfully parsed
/// before the error.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct SchemaError {
    /// Tables accumulated before the failure.
    pub partial: Schema,
    /// The underlying parse error.
    #[source]
    pub source: ParseError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_message_shape() {
        let err = ParseError::unexpected("*", "table name");
        assert_eq!(err.to_string(), "found \"*\", expected table name");
    }

    #[test]
    fn test_unexpected_eof_message() {
        assert_eq!(ParseError::UnexpectedEof.to_string(), "unexpected EOF");
    }

    #[test]
    fn test_lex_error_is_transparent() {
        let err = ParseError::from(LexError::UnterminatedString);
        assert_eq!(err.to_string(), "unterminated string literal");
    }
}
