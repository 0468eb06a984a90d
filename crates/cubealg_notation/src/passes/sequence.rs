use std::convert::Infallible;

use crate::traverse::{Rewrite, Visitor};
use crate::{Ast, Node, NodeList};

/// Expands every group into plain turns.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sequencer;

impl Visitor for Sequencer {
    type Error = Infallible;

    fn visit_conjugate(&mut self, a: NodeList, b: NodeList) -> Result<Rewrite<Node>, Infallible> {
        let a_inv = a.inv();
        Ok(Rewrite::Replace([a.0, b.0, a_inv.0].concat()))
    }

    fn visit_commutator(&mut self, a: NodeList, b: NodeList) -> Result<Rewrite<Node>, Infallible> {
        let a_inv = a.inv();
        let b_inv = b.inv();
        Ok(Rewrite::Replace([a.0, b.0, a_inv.0, b_inv.0].concat()))
    }

    fn visit_repeating(
        &mut self,
        contents: NodeList,
        multiplier: u32,
    ) -> Result<Rewrite<Node>, Infallible> {
        let n = contents.len().saturating_mul(multiplier as usize);
        let repeated = contents.iter().cycle().take(n).cloned().collect();
        Ok(Rewrite::Replace(repeated))
    }

    fn visit_algorithm(&mut self, body: NodeList) -> Result<Ast, Infallible> {
        let mut turns = vec![];
        for node in body.0 {
            match node {
                Node::Sequence(t) => turns.extend(t),
                // Every group has already been replaced by its children.
                other => log::error!("unexpanded group after sequencing: {other}"),
            }
        }
        Ok(Ast {
            body: NodeList::from_turns(turns),
        })
    }
}
