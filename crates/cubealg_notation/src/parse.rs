//! Backtracking parser that turns a token list into an [`Ast`].

use crate::{
    Ast, BinaryGroupKind, Node, NodeList, ParseError, ParseErrorKind, Token, TokenKind, Turn,
};

/// Parses a list of tokens into an algorithm.
///
/// When no production matches, the error reported is the one recorded
/// furthest into the input.
pub fn parse(tokens: &[Token<'_>]) -> Result<Ast, ParseError> {
    let mut p = Parser::new(tokens);
    let mut body = NodeList::new();
    while p.current().is_some() {
        body.push(p.parse_any()?);
    }
    log::trace!("parsed {} top-level nodes", body.len());
    Ok(Ast { body })
}

/// Token parser used to assemble an AST.
#[derive(Debug, Clone)]
struct Parser<'a> {
    /// Tokens to feed.
    tokens: &'a [Token<'a>],
    /// Index of the current token.
    cursor: usize,
    /// Every failure so far, with the index it happened at and a specific
    /// reason if there is one. Backtracking does not clear this.
    errors: Vec<(usize, Option<ParseErrorKind>)>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            cursor: 0,
            errors: vec![],
        }
    }

    /// Returns the kind of the token at the cursor.
    fn current(&self) -> Option<TokenKind> {
        Some(self.tokens.get(self.cursor)?.kind)
    }

    /// Moves the cursor forward and then returns the kind of the token at the
    /// cursor.
    fn next(&mut self) -> Option<TokenKind> {
        self.cursor += 1;
        self.current()
    }

    fn record(&mut self, kind: Option<ParseErrorKind>) {
        self.errors.push((self.cursor, kind));
    }

    /// Returns the first recorded error with the greatest index.
    fn deepest_error(&self) -> ParseError {
        let mut deepest: Option<&(usize, Option<ParseErrorKind>)> = None;
        for error in &self.errors {
            if deepest.is_none_or(|(index, _)| error.0 > *index) {
                deepest = Some(error);
            }
        }
        let (index, kind) = deepest.cloned().unwrap_or((self.cursor, None));
        let kind = kind.unwrap_or_else(|| match self.tokens.get(index) {
            None => ParseErrorKind::UnexpectedEndOfInput,
            Some(token) => ParseErrorKind::UnexpectedToken {
                value: token.value.to_owned(),
                position: index + 1,
            },
        });
        ParseError { index, kind }
    }

    fn parse_any(&mut self) -> Result<Node, ParseError> {
        if let Some(node) = self.parse_sequence() {
            return Ok(node);
        }
        for kind in [BinaryGroupKind::Conjugate, BinaryGroupKind::Commutator] {
            if let Some(node) = self.parse_binary_group(kind)? {
                return Ok(node);
            }
        }
        if let Some(node) = self.parse_repeating()? {
            return Ok(node);
        }
        Err(self.deepest_error())
    }

    fn parse_sequence(&mut self) -> Option<Node> {
        let mut turns = vec![];
        while let Some(token) = self.tokens.get(self.cursor)
            && token.kind == TokenKind::Turn
        {
            match token.value.parse::<Turn>() {
                Ok(turn) => turns.push(turn),
                Err(e) => {
                    log::error!("lexer produced bad turn token: {e}");
                    break;
                }
            }
            self.cursor += 1;
        }
        if turns.is_empty() {
            self.record(None);
            return None;
        }
        Some(Node::Sequence(turns))
    }

    fn parse_binary_group(&mut self, kind: BinaryGroupKind) -> Result<Option<Node>, ParseError> {
        if self.current() != Some(TokenKind::BracketOpen) {
            self.record(None);
            return Ok(None);
        }
        let checkpoint = self.cursor;

        let separator = match kind {
            BinaryGroupKind::Commutator => TokenKind::SeparatorCommutator,
            BinaryGroupKind::Conjugate => TokenKind::SeparatorConjugate,
        };

        let mut a = NodeList::new();
        let mut token = self.next();
        while token.is_some_and(|t| {
            !matches!(
                t,
                TokenKind::SeparatorConjugate
                    | TokenKind::SeparatorCommutator
                    | TokenKind::BracketClose
            )
        }) {
            a.push(self.parse_any()?);
            token = self.current();
        }
        if token != Some(separator) || a.is_empty() {
            let reason = if token == Some(TokenKind::BracketClose) {
                Some(ParseErrorKind::MissingSeparator)
            } else if a.is_empty() {
                Some(ParseErrorKind::EmptyLeftSide(kind))
            } else {
                None
            };
            self.record(reason);
            self.cursor = checkpoint;
            return Ok(None);
        }

        let mut b = NodeList::new();
        token = self.next();
        while token.is_some_and(|t| t != TokenKind::BracketClose) {
            b.push(self.parse_any()?);
            token = self.current();
        }
        if token.is_none() || b.is_empty() {
            let reason = b.is_empty().then_some(ParseErrorKind::EmptyRightSide(kind));
            self.record(reason);
            self.cursor = checkpoint;
            return Ok(None);
        }
        self.next(); // Consume `]`

        Ok(Some(Node::BinaryGroup {
            kind,
            contents: [a, b],
        }))
    }

    fn parse_repeating(&mut self) -> Result<Option<Node>, ParseError> {
        if self.current() != Some(TokenKind::ParenthesisOpen) {
            self.record(None);
            return Ok(None);
        }
        let checkpoint = self.cursor;

        let mut contents = NodeList::new();
        let mut token = self.next();
        while token.is_some_and(|t| t != TokenKind::ParenthesisClose) {
            contents.push(self.parse_any()?);
            token = self.current();
        }
        if token.is_none() || contents.is_empty() {
            let reason = contents
                .is_empty()
                .then_some(ParseErrorKind::EmptyRepeatingGroup);
            self.record(reason);
            self.cursor = checkpoint;
            return Ok(None);
        }

        if self.next() != Some(TokenKind::Multiplier) {
            self.record(Some(ParseErrorKind::MissingMultiplier));
            self.cursor = checkpoint;
            return Ok(None);
        }
        // Digits only, so the only failure is overflow.
        let multiplier = self.tokens[self.cursor].value.parse().unwrap_or(u32::MAX);
        self.next();

        Ok(Some(Node::Repeating {
            contents,
            multiplier,
        }))
    }
}
