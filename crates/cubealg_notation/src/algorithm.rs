//! Validated algorithm and its derived views.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{AlgorithmError, Ast, Limits, Node, Turn, lex, parse, passes};

lazy_static! {
    static ref PRIME_REGEX: Regex = Regex::new(r"’|′").expect("bad regex");
    static ref DOUBLE_PRIME_REGEX: Regex = Regex::new(r"2'|'2").expect("bad regex");
    static ref WIDE_W_REGEX: Regex = Regex::new(r"([UFRDBL])w").expect("bad regex");
    static ref PARENS_REGEX: Regex = Regex::new(r"\(([^()]*)\)").expect("bad regex");
    static ref STAR_MULTIPLIER_REGEX: Regex = Regex::new(r"\)\*(\d)").expect("bad regex");
}

/// Rewrites common notation variants into the form the lexer accepts.
///
/// - Curly and typographic primes become `'`.
/// - `2'` and `'2` become `2`.
/// - `Rw` becomes `r`.
/// - Parentheses not followed by a multiplier are removed.
/// - `(...)*n` becomes `(...)n`.
pub fn normalize(s: &str) -> String {
    let s = s.trim();
    let s = PRIME_REGEX.replace_all(s, "'");
    let s = DOUBLE_PRIME_REGEX.replace_all(&s, "2");
    let s = WIDE_W_REGEX.replace_all(&s, |caps: &Captures<'_>| caps[1].to_lowercase());
    let mut s = s.into_owned();
    loop {
        let stripped = strip_plain_parens(&s).into_owned();
        if stripped == s {
            break;
        }
        s = stripped;
    }
    STAR_MULTIPLIER_REGEX.replace_all(&s, ")$1").into_owned()
}

/// Removes innermost parentheses that are not followed by `*` and a digit, or
/// by a digit.
fn strip_plain_parens(s: &str) -> Cow<'_, str> {
    PARENS_REGEX.replace_all(s, |caps: &Captures<'_>| {
        let (whole, inner) = match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(inner)) => (whole, inner.as_str()),
            _ => return String::new(),
        };
        let rest = &s[whole.end()..];
        let rest = rest.strip_prefix('*').unwrap_or(rest);
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            whole.as_str().to_owned()
        } else {
            inner.to_owned()
        }
    })
}

/// Parsed and validated algorithm.
///
/// The string views are computed on demand from the stored tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Algorithm {
    raw: String,
    ast: Ast,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", passes::clean(&self.ast))
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Algorithm {
    /// Parses and validates an algorithm using [`Limits::DEFAULT`].
    pub fn new(s: &str) -> Result<Self, AlgorithmError> {
        Self::with_limits(s, Limits::DEFAULT)
    }

    /// Parses and validates an algorithm.
    pub fn with_limits(s: &str, limits: Limits) -> Result<Self, AlgorithmError> {
        let length = s.chars().count();
        if length > limits.max_length {
            return Err(AlgorithmError::TooLong {
                length,
                max: limits.max_length,
            });
        }

        let normalized = normalize(s);
        log::trace!("normalized {s:?} to {normalized:?}");
        let tokens = lex(&normalized)?;
        let ast = parse(&tokens)?;
        passes::validate(&ast, limits.max_multiplier)?;

        let expanded = ast.expanded_turn_count();
        if expanded > limits.max_expanded_turns {
            return Err(AlgorithmError::TooManyTurns {
                turns: expanded,
                max: limits.max_expanded_turns,
            });
        }

        let ret = Self {
            raw: s.to_owned(),
            ast,
        };
        let turns = ret.turns().len();
        if turns > limits.max_turns {
            return Err(AlgorithmError::TooManyTurns {
                turns,
                max: limits.max_turns,
            });
        }

        log::debug!("parsed algorithm {s:?} ({turns} turns)");
        Ok(ret)
    }

    /// Returns the original input string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed tree, before any simplification.
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// Returns the simplified algorithm in canonical notation.
    pub fn clean(&self) -> String {
        passes::clean(&self.ast).to_string()
    }

    /// Returns the simplified inverse algorithm in canonical notation.
    pub fn inverse(&self) -> String {
        passes::clean(&self.ast.inv()).to_string()
    }

    /// Returns the algorithm expanded to plain turns and simplified.
    pub fn sequence(&self) -> String {
        passes::clean(&passes::sequence(&self.ast)).to_string()
    }

    /// Returns the algorithm expanded to outer face turns only and simplified.
    pub fn rotationless(&self) -> String {
        passes::clean(&passes::rotationless(&self.ast)).to_string()
    }

    /// Returns the simplified turns of the expanded algorithm.
    pub fn turns(&self) -> Vec<Turn> {
        passes::clean(&passes::sequence(&self.ast))
            .body
            .iter()
            .filter_map(Node::as_sequence)
            .flatten()
            .copied()
            .collect()
    }

    /// Returns the inverse algorithm.
    #[must_use]
    pub fn inv(&self) -> Self {
        Self {
            raw: self.inverse(),
            ast: self.ast.inv(),
        }
    }
}
