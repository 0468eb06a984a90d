//! Error types.

use thiserror::Error;

use crate::BinaryGroupKind;

/// Error produced when a string contains a character that is not valid
/// notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid character '{character}' at position {position}.")]
pub struct LexError {
    /// Offending character.
    pub character: char,
    /// 1-based character position in the input.
    pub position: usize,
}

/// Error produced when a token sequence does not form a valid algorithm.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    /// 0-based token index where parsing failed.
    pub index: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

/// Reason for a [`ParseError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input ended while a group was still open.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A token appeared where no production accepts it.
    #[error("Unexpected token {value} at position {position}.")]
    UnexpectedToken {
        /// Source text of the token.
        value: String,
        /// 1-based token position.
        position: usize,
    },
    /// A bracketed group has no `:` or `,`.
    #[error("Missing seperator : or , inside brackets.")]
    MissingSeparator,
    /// A bracketed group has nothing before its separator.
    #[error("Left side of {0} can't be empty.")]
    EmptyLeftSide(BinaryGroupKind),
    /// A bracketed group has nothing after its separator.
    #[error("Right side of {0} can't be empty.")]
    EmptyRightSide(BinaryGroupKind),
    /// A parenthesized group has no contents.
    #[error("Repeating group can't be empty.")]
    EmptyRepeatingGroup,
    /// A parenthesized group is not followed by a number.
    #[error("Repeating group must be followed by a multiplier.")]
    MissingMultiplier,
}

/// Error produced when a parsed algorithm breaks a semantic rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A repeating group multiplier is above the limit.
    #[error("Multiplier can't be higher than {max}.")]
    MultiplierTooLarge {
        /// Multiplier found in the input.
        multiplier: u32,
        /// Largest allowed multiplier.
        max: u32,
    },
}

/// Error produced when constructing an [`crate::Algorithm`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The input string is too long.
    #[error("Algorithm can't be longer than {max} characters (length: {length}).")]
    TooLong {
        /// Length of the input in characters.
        length: usize,
        /// Largest allowed length.
        max: usize,
    },
    /// The algorithm expands to too many turns.
    ///
    /// This is the turn-count counterpart of [`AlgorithmError::TooLong`]:
    /// the input is short enough but its expansion is not.
    #[error("Algorithm can't be longer than {max} turns (length: {turns}).")]
    TooManyTurns {
        /// Number of turns after expansion.
        turns: usize,
        /// Largest allowed number of turns.
        max: usize,
    },
    /// Error from the lexer.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Error from the parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Error from validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Error produced when parsing a single turn from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid turn: {0:?}")]
pub struct ParseTurnError(pub String);
