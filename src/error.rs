//! Error types reported by constructors and the parser

use thiserror::Error;

/// Error from [`Uuid::from_fields`](crate::Uuid::from_fields) when a field
/// value exceeds its declared bit width.
#[derive(Error, Clone, Eq, PartialEq, Hash, Debug)]
#[error("field `{field}` out of range: expected 0..={max}, got {value}")]
pub struct RangeError {
    /// Name of the offending field.
    pub field: &'static str,

    /// Largest value the field admits.
    pub max: u64,

    /// Value actually supplied.
    pub value: u64,
}

/// Error from `Uuid::try_from(&[u32])` when the slice does not hold exactly
/// four words.
#[derive(Error, Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[error("expected exactly 4 words, got {actual}")]
pub struct WordCountError {
    /// Number of words actually supplied.
    pub actual: usize,
}

/// Error parsing an invalid string representation of UUID.
///
/// Carries the rejected input together with a [`ParseErrorKind`] locating
/// the first violation of the 8-4-4-4-12 shape.
#[derive(Error, Clone, Eq, PartialEq, Hash, Debug)]
#[error("could not parse {input:?}: {kind}")]
pub struct ParseError {
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }

    /// Returns the input that was rejected.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the reason the input was rejected.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Reason a string failed to parse as a UUID.
#[derive(Error, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ParseErrorKind {
    /// The input was not exactly 36 characters long.
    #[error("expected 36 characters, got {actual}")]
    Length {
        /// Length of the actual input.
        actual: usize,
    },

    /// A hyphen was missing or misplaced.
    #[error("expected {expected:?} at position {position}, found {found:?}")]
    Separator {
        /// Character required at the position.
        expected: char,
        /// Character actually found.
        found: char,
        /// Byte position within the input.
        position: usize,
    },

    /// A digit group contained a non-hexadecimal character.
    #[error("invalid hexadecimal digit {found:?} at position {position}")]
    Digit {
        /// Character actually found.
        found: char,
        /// Byte position within the input.
        position: usize,
    },
}
