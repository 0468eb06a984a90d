//! Parser, simplifier, and serializer for 3x3x3 cube algorithm notation.
//!
//! Algorithms are written as sequences of turns (`R U R' U'`), conjugates
//! (`[R: U]`), commutators (`[R, U]`), and repeating groups (`(R U)3`). The
//! main entry point is [`Algorithm`], which parses a string and exposes
//! simplified, inverted, and expanded views of it.

mod algorithm;
pub mod error;
mod invert;
mod lexer;
mod node;
mod orientation;
mod parse;
pub mod passes;
pub mod traverse;
mod turn;

pub use algorithm::{Algorithm, normalize};
pub use error::*;
pub use invert::invert;
pub use lexer::{Token, TokenKind, lex};
pub use node::*;
pub use orientation::Orientation;
pub use parse::parse;
pub use turn::*;

#[cfg(test)]
mod tests;

/// Size limits applied when constructing an [`Algorithm`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Maximum length of the input string, in characters.
    pub max_length: usize,
    /// Maximum number of turns after expanding and simplifying.
    pub max_turns: usize,
    /// Maximum number of turns after expanding but before simplifying.
    ///
    /// This is computed from the tree without expanding it.
    pub max_expanded_turns: usize,
    /// Maximum repeating group multiplier.
    pub max_multiplier: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Limits {
    /// Limits suitable for user input.
    pub const DEFAULT: Self = Self {
        max_length: 64,
        max_turns: 64,
        max_expanded_turns: 4096,
        max_multiplier: 6,
    };

    /// No limits at all.
    pub const UNLIMITED: Self = Self {
        max_length: usize::MAX,
        max_turns: usize::MAX,
        max_expanded_turns: usize::MAX,
        max_multiplier: u32::MAX,
    };
}

/// Parses a string of notation into a tree without validating it.
pub fn parse_notation(s: &str) -> Result<Ast, AlgorithmError> {
    Ok(parse(&lex(&normalize(s))?)?)
}
