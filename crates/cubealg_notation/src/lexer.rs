//! Tokenizer for algorithm notation.

use logos::Logos;
use strum::Display;

use crate::LexError;

/// Kind of token.
#[derive(Logos, Display, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// Turn letter with an optional `'` or `2` suffix.
    #[regex(r"[UFRDBLufrdblMESxyz]['2]?")]
    #[strum(to_string = "turn")]
    Turn,

    /// `[`
    #[token("[")]
    #[strum(to_string = "left bracket")]
    BracketOpen,
    /// `]`
    #[token("]")]
    #[strum(to_string = "right bracket")]
    BracketClose,

    /// `:`
    #[token(":")]
    #[strum(to_string = "colon")]
    SeparatorConjugate,
    /// `,`
    #[token(",")]
    #[strum(to_string = "comma")]
    SeparatorCommutator,

    /// `(`
    #[token("(")]
    #[strum(to_string = "left paren")]
    ParenthesisOpen,
    /// `)`
    #[token(")")]
    #[strum(to_string = "right paren")]
    ParenthesisClose,

    /// Decimal repeat count.
    #[regex(r"[0-9]+")]
    #[strum(to_string = "multiplier")]
    Multiplier,
}

/// Token with its source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Kind of token.
    pub kind: TokenKind,
    /// Exact source text of the token.
    pub value: &'a str,
}

/// Splits a string into tokens, discarding whitespace.
pub fn lex(s: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = TokenKind::lexer(s);
    let mut tokens = vec![];
    while let Some(result) = lexer.next() {
        let start = lexer.span().start;
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                value: lexer.slice(),
            }),
            Err(()) => {
                return Err(LexError {
                    character: s[start..].chars().next().unwrap_or_default(),
                    position: s[..start].chars().count() + 1,
                });
            }
        }
    }
    log::trace!("lexed {} tokens from {s:?}", tokens.len());
    Ok(tokens)
}
