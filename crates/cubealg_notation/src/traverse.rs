//! Bottom-up tree rewriting.
//!
//! [`traverse()`] rebuilds an [`Ast`] from the leaves up. Each node's children
//! are rewritten first, then the matching [`Visitor`] method decides what
//! replaces the node in its parent's list.

use std::convert::Infallible;

use crate::{Ast, BinaryGroupKind, Node, NodeList, Turn};

/// What to put in place of a visited element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rewrite<T> {
    /// Drop the element.
    Remove,
    /// Keep a single element.
    Keep(T),
    /// Splice several elements in place of one.
    Replace(Vec<T>),
}

impl<T> From<Option<T>> for Rewrite<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Rewrite::Keep(x),
            None => Rewrite::Remove,
        }
    }
}

impl<T> Rewrite<T> {
    /// Appends the result to `out`.
    pub fn extend_into(self, out: &mut Vec<T>) {
        match self {
            Rewrite::Remove => (),
            Rewrite::Keep(x) => out.push(x),
            Rewrite::Replace(xs) => out.extend(xs),
        }
    }
}

/// Set of per-node rewrite rules.
///
/// Every method receives children that have already been rewritten. The
/// default implementations rebuild the node unchanged.
pub trait Visitor {
    /// Error that aborts the traversal.
    type Error;

    /// Rewrites a single turn inside a sequence.
    fn visit_turn(&mut self, turn: Turn) -> Result<Rewrite<Turn>, Self::Error> {
        Ok(Rewrite::Keep(turn))
    }

    /// Rewrites a sequence.
    fn visit_sequence(&mut self, turns: Vec<Turn>) -> Result<Rewrite<Node>, Self::Error> {
        Ok(Rewrite::Keep(Node::Sequence(turns)))
    }

    /// Rewrites a conjugate `[A: B]`.
    fn visit_conjugate(
        &mut self,
        a: NodeList,
        b: NodeList,
    ) -> Result<Rewrite<Node>, Self::Error> {
        Ok(Rewrite::Keep(Node::conjugate(a, b)))
    }

    /// Rewrites a commutator `[A, B]`.
    fn visit_commutator(
        &mut self,
        a: NodeList,
        b: NodeList,
    ) -> Result<Rewrite<Node>, Self::Error> {
        Ok(Rewrite::Keep(Node::commutator(a, b)))
    }

    /// Rewrites a repeating group `(A)n`.
    fn visit_repeating(
        &mut self,
        contents: NodeList,
        multiplier: u32,
    ) -> Result<Rewrite<Node>, Self::Error> {
        Ok(Rewrite::Keep(Node::Repeating {
            contents,
            multiplier,
        }))
    }

    /// Rewrites the root.
    fn visit_algorithm(&mut self, body: NodeList) -> Result<Ast, Self::Error> {
        Ok(Ast { body })
    }
}

/// Rewrites a copy of `ast` using `visitor`. The input is not modified.
pub fn traverse<V: Visitor + ?Sized>(ast: &Ast, visitor: &mut V) -> Result<Ast, V::Error> {
    let body = traverse_list(&ast.body, visitor)?;
    visitor.visit_algorithm(body)
}

/// Same as [`traverse()`], for visitors that cannot fail.
pub fn rewrite<V: Visitor<Error = Infallible> + ?Sized>(ast: &Ast, visitor: &mut V) -> Ast {
    match traverse(ast, visitor) {
        Ok(ast) => ast,
        Err(e) => match e {},
    }
}

fn traverse_list<V: Visitor + ?Sized>(
    list: &NodeList,
    visitor: &mut V,
) -> Result<NodeList, V::Error> {
    let mut ret = vec![];
    for node in list.iter() {
        traverse_node(node, visitor)?.extend_into(&mut ret);
    }
    Ok(NodeList(ret))
}

fn traverse_node<V: Visitor + ?Sized>(
    node: &Node,
    visitor: &mut V,
) -> Result<Rewrite<Node>, V::Error> {
    match node {
        Node::Sequence(turns) => {
            let mut new_turns = vec![];
            for &turn in turns {
                visitor.visit_turn(turn)?.extend_into(&mut new_turns);
            }
            visitor.visit_sequence(new_turns)
        }
        Node::BinaryGroup { kind, contents } => {
            let [a, b] = contents;
            let a = traverse_list(a, visitor)?;
            let b = traverse_list(b, visitor)?;
            match kind {
                BinaryGroupKind::Commutator => visitor.visit_commutator(a, b),
                BinaryGroupKind::Conjugate => visitor.visit_conjugate(a, b),
            }
        }
        Node::Repeating {
            contents,
            multiplier,
        } => {
            let contents = traverse_list(contents, visitor)?;
            visitor.visit_repeating(contents, *multiplier)
        }
    }
}
