use std::convert::Infallible;

use itertools::Itertools;

use crate::traverse::{Rewrite, Visitor};
use crate::{Ast, BinaryGroupKind, Merge, Node, NodeList, Turn};

/// Simplifies an algorithm without changing its effect.
#[derive(Debug, Default, Copy, Clone)]
pub struct Cleaner;

impl Visitor for Cleaner {
    type Error = Infallible;

    fn visit_sequence(&mut self, turns: Vec<Turn>) -> Result<Rewrite<Node>, Infallible> {
        let turns = clean_turns(turns);
        Ok(Rewrite::from((!turns.is_empty()).then_some(Node::Sequence(turns))))
    }

    fn visit_conjugate(&mut self, a: NodeList, b: NodeList) -> Result<Rewrite<Node>, Infallible> {
        let a = fuse_sequences(a);
        let b = fuse_sequences(b);
        if b.is_empty() {
            return Ok(Rewrite::Remove);
        }
        if a.is_empty() {
            return Ok(Rewrite::Replace(b.0));
        }
        if let Some(folded) = cancel_setup_into_interchange(&a, &b) {
            log::trace!("folded conjugate setup into commutator: {folded}");
            return Ok(Rewrite::Keep(folded));
        }
        Ok(Rewrite::Keep(Node::conjugate(a, b)))
    }

    fn visit_commutator(&mut self, a: NodeList, b: NodeList) -> Result<Rewrite<Node>, Infallible> {
        let a = fuse_sequences(a);
        let b = fuse_sequences(b);
        if a.is_empty() || b.is_empty() || is_single_axis(&a, &b) {
            return Ok(Rewrite::Remove);
        }
        Ok(Rewrite::Keep(Node::commutator(a, b)))
    }

    fn visit_repeating(
        &mut self,
        contents: NodeList,
        multiplier: u32,
    ) -> Result<Rewrite<Node>, Infallible> {
        let contents = fuse_sequences(contents);
        if multiplier == 0 || contents.is_empty() {
            return Ok(Rewrite::Remove);
        }
        if multiplier == 1 {
            return Ok(Rewrite::Replace(contents.0));
        }
        if let [Node::Sequence(turns)] = contents.as_slice()
            && let [turn] = turns.as_slice()
        {
            let repeated = turn.repeat(multiplier);
            return Ok(Rewrite::from(repeated.map(|t| Node::Sequence(vec![t]))));
        }
        Ok(Rewrite::Keep(Node::Repeating {
            contents,
            multiplier,
        }))
    }

    fn visit_algorithm(&mut self, body: NodeList) -> Result<Ast, Infallible> {
        Ok(Ast {
            body: fuse_sequences(body),
        })
    }
}

/// Sorts runs of parallel turns and merges adjacent turns of the same move,
/// repeating until nothing changes.
fn clean_turns(mut turns: Vec<Turn>) -> Vec<Turn> {
    loop {
        let cleaned = merge_turns(sort_parallel_turns(turns.clone()));
        if cleaned == turns {
            return cleaned;
        }
        turns = cleaned;
    }
}

/// Stably sorts each maximal run of mutually parallel turns. Rotations are
/// left in place.
fn sort_parallel_turns(turns: Vec<Turn>) -> Vec<Turn> {
    let mut ret = Vec::with_capacity(turns.len());
    for (axis, run) in &turns.into_iter().chunk_by(|turn| turn.mv.layer_axis()) {
        let start = ret.len();
        ret.extend(run);
        if axis.is_some() {
            ret[start..].sort_by_key(|turn: &Turn| turn.mv.sort_key());
        }
    }
    ret
}

fn merge_turns(turns: Vec<Turn>) -> Vec<Turn> {
    let mut ret: Vec<Turn> = Vec::with_capacity(turns.len());
    for turn in turns {
        let Some(prev) = ret.last().copied() else {
            ret.push(turn);
            continue;
        };
        match prev.merge(turn) {
            Merge::Cancelled => {
                ret.pop();
            }
            Merge::Merged(merged) => {
                ret.pop();
                ret.push(merged);
            }
            Merge::Unmerged(_, _) => ret.push(turn),
        }
    }
    ret
}

/// Joins adjacent sequences and cleans the result, removing any that cancel
/// out entirely.
fn fuse_sequences(list: NodeList) -> NodeList {
    let mut fused: Vec<Node> = vec![];
    for node in list.0 {
        if let Node::Sequence(turns) = &node
            && let Some(Node::Sequence(prev)) = fused.last_mut()
        {
            prev.extend_from_slice(turns);
            continue;
        }
        fused.push(node);
    }
    fused
        .into_iter()
        .filter_map(|node| match node {
            Node::Sequence(turns) => {
                let turns = clean_turns(turns);
                (!turns.is_empty()).then_some(Node::Sequence(turns))
            }
            other => Some(other),
        })
        .collect()
}

/// Returns whether both sides consist only of turns along a single axis, in
/// which case the commutator is the identity.
fn is_single_axis(a: &NodeList, b: &NodeList) -> bool {
    let mut turns = a.iter().chain(b.iter()).map(Node::as_sequence);
    let mut axis = None;
    turns.all(|seq| {
        seq.is_some_and(|seq| {
            seq.iter().all(|turn| match turn.mv.layer_axis() {
                None => false,
                Some(ax) => *axis.get_or_insert(ax) == ax,
            })
        })
    })
}

/// Folds the last setup turn of `[A: [X, B]]` into the commutator when `X` is
/// a single turn of the same move. Two quarter turns only fold when they
/// point the same way.
///
/// - `[U: [U, L E L']]` becomes `[U2: [L E L', U']]`
/// - `[U': [U2, R D' R']]` becomes `[U: [R D' R', U2]]`
/// - `[R2 D2: [D, R U' R']]` becomes `[R2 D': [R U' R', D']]`
fn cancel_setup_into_interchange(a: &NodeList, b: &NodeList) -> Option<Node> {
    let Some(Node::Sequence(setup)) = a.last() else {
        return None;
    };
    let [
        Node::BinaryGroup {
            kind: BinaryGroupKind::Commutator,
            contents: [comm_a, comm_b],
        },
    ] = b.as_slice()
    else {
        return None;
    };
    let [Node::Sequence(interchange)] = comm_a.as_slice() else {
        return None;
    };
    let &[interchange] = interchange.as_slice() else {
        return None;
    };
    let (&last, setup_rest) = setup.split_last()?;
    if !last.is_same_move(interchange) {
        return None;
    }

    let (new_last, new_interchange) = match (last.is_double(), interchange.is_double()) {
        (false, false) if last.direction == interchange.direction => {
            (last.repeat(2)?, interchange.inv())
        }
        (false, false) => return None,
        (false, true) => (last.inv(), interchange),
        (true, false) => (interchange.inv(), interchange.inv()),
        (true, true) => return None,
    };

    let mut new_setup = setup_rest.to_vec();
    new_setup.push(new_last);
    let mut new_a = a.clone();
    new_a.pop();
    new_a.push(Node::Sequence(new_setup));

    let new_b = NodeList(vec![Node::commutator(
        comm_b.clone(),
        NodeList::from_turns(vec![new_interchange]),
    )]);

    Some(Node::conjugate(new_a, new_b))
}
