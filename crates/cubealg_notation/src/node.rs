//! Syntax tree for algorithms.
//!
//! The [`fmt::Display`] implementations on these types produce canonical
//! notation, which parses back to the same tree.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::Turn;

/// Whole algorithm.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ast {
    /// Top-level notation elements.
    pub body: NodeList,
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}

impl From<NodeList> for Ast {
    fn from(body: NodeList) -> Self {
        Self { body }
    }
}

impl Ast {
    /// Returns the number of turns the algorithm expands to, without
    /// expanding it.
    pub fn expanded_turn_count(&self) -> usize {
        self.body.expanded_turn_count()
    }

    /// Returns all turns in the algorithm, in order, if it consists only of
    /// sequences.
    pub fn flat_turns(&self) -> Option<Vec<Turn>> {
        let mut ret = vec![];
        for node in self.body.iter() {
            ret.extend_from_slice(node.as_sequence()?);
        }
        Some(ret)
    }
}

/// List of notation elements.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeList(pub Vec<Node>);

impl fmt::Display for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated_list(f, &self.0, " ")
    }
}

impl Deref for NodeList {
    type Target = Vec<Node>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for NodeList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Node> for NodeList {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl NodeList {
    /// Constructs a new empty node list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Constructs a node list containing a single sequence.
    pub fn from_turns(turns: Vec<Turn>) -> Self {
        Self(vec![Node::Sequence(turns)])
    }

    fn expanded_turn_count(&self) -> usize {
        self.iter()
            .map(Node::expanded_turn_count)
            .fold(0, usize::saturating_add)
    }
}

/// Notation element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Run of turns with no grouping.
    ///
    /// Example: `R U R' U'`
    Sequence(Vec<Turn>),
    /// Conjugate or commutator.
    ///
    /// Example: `[R: U]` or `[R, U]`
    BinaryGroup {
        /// Kind of binary group.
        kind: BinaryGroupKind,
        /// Left and right sides of the group.
        contents: [NodeList; 2],
    },
    /// Parenthesized group followed by a repeat count.
    ///
    /// Example: `(R U)3`
    Repeating {
        /// Repeated elements.
        contents: NodeList,
        /// Number of repetitions.
        multiplier: u32,
    },
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Sequence(turns) => write_separated_list(f, turns, " "),
            Node::BinaryGroup { kind, contents } => {
                let [a, b] = contents;
                let sep = kind.separator();
                write!(f, "[{a}{sep} {b}]")
            }
            Node::Repeating {
                contents,
                multiplier,
            } => write!(f, "({contents}){multiplier}"),
        }
    }
}

impl Node {
    /// Constructs a conjugate `[A: B]`.
    pub fn conjugate(a: NodeList, b: NodeList) -> Self {
        Node::BinaryGroup {
            kind: BinaryGroupKind::Conjugate,
            contents: [a, b],
        }
    }

    /// Constructs a commutator `[A, B]`.
    pub fn commutator(a: NodeList, b: NodeList) -> Self {
        Node::BinaryGroup {
            kind: BinaryGroupKind::Commutator,
            contents: [a, b],
        }
    }

    /// Returns the turns of a sequence, or `None` for any other node.
    pub fn as_sequence(&self) -> Option<&[Turn]> {
        match self {
            Node::Sequence(turns) => Some(turns),
            _ => None,
        }
    }

    fn expanded_turn_count(&self) -> usize {
        match self {
            Node::Sequence(turns) => turns.len(),
            Node::BinaryGroup { kind, contents } => {
                let [a, b] = contents.each_ref().map(NodeList::expanded_turn_count);
                match kind {
                    BinaryGroupKind::Commutator => a.saturating_add(b).saturating_mul(2),
                    BinaryGroupKind::Conjugate => a.saturating_mul(2).saturating_add(b),
                }
            }
            Node::Repeating {
                contents,
                multiplier,
            } => contents
                .expanded_turn_count()
                .saturating_mul(*multiplier as usize),
        }
    }
}

/// Kind of binary group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryGroupKind {
    /// Commutator `[A, B]` that expands to `A B A' B'`.
    Commutator,
    /// Conjugate `[A: B]` that expands to `A B A'`.
    Conjugate,
}

impl fmt::Display for BinaryGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryGroupKind::Commutator => write!(f, "commutator"),
            BinaryGroupKind::Conjugate => write!(f, "conjugate"),
        }
    }
}

impl BinaryGroupKind {
    /// Returns the separator symbol for the group. This is `,` for commutators
    /// and `:` for conjugates.
    pub fn separator(self) -> char {
        match self {
            BinaryGroupKind::Commutator => ',',
            BinaryGroupKind::Conjugate => ':',
        }
    }
}

/// Serializes an algorithm to canonical notation.
pub fn generate(ast: &Ast) -> String {
    ast.to_string()
}

pub(crate) fn write_separated_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    elements: &[T],
    separator: &str,
) -> fmt::Result {
    let mut is_first = true;
    for elem in elements {
        if is_first {
            is_first = false;
        } else {
            write!(f, "{separator}")?;
        }
        write!(f, "{elem}")?;
    }
    Ok(())
}
