//! Structural inversion.
//!
//! Inversion keeps the group structure instead of expanding it, so the
//! inverse of `[R, U]` is `[U, R]` rather than `U R U' R'`.

use crate::{Ast, BinaryGroupKind, Node, NodeList};

impl Ast {
    /// Returns the inverse algorithm.
    #[must_use]
    pub fn inv(&self) -> Self {
        Self {
            body: self.body.inv(),
        }
    }
}

impl NodeList {
    /// Returns a list with all nodes inverted, in reverse order.
    #[must_use]
    pub fn inv(&self) -> Self {
        self.iter().rev().map(Node::inv).collect()
    }
}

impl Node {
    /// Returns the inverse node.
    #[must_use]
    pub fn inv(&self) -> Self {
        match self {
            Node::Sequence(turns) => Node::Sequence(turns.iter().rev().map(|t| t.inv()).collect()),
            Node::BinaryGroup { kind, contents } => {
                let [a, b] = contents;
                match kind {
                    // [A: B]' = [A: B']
                    BinaryGroupKind::Conjugate => Node::conjugate(a.clone(), b.inv()),
                    // [A, B]' = [B, A]
                    BinaryGroupKind::Commutator => Node::commutator(b.clone(), a.clone()),
                }
            }
            Node::Repeating {
                contents,
                multiplier,
            } => Node::Repeating {
                contents: contents.inv(),
                multiplier: *multiplier,
            },
        }
    }
}

/// Returns the inverse of an algorithm.
pub fn invert(ast: &Ast) -> Ast {
    ast.inv()
}
