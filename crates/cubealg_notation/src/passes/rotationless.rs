use std::convert::Infallible;

use smallvec::smallvec;

use crate::traverse::{Rewrite, Visitor};
use crate::{Move, Node, Orientation, Turn};

/// Rewrites each sequence using only outer face turns, tracking rotations
/// instead of performing them.
#[derive(Debug, Default, Copy, Clone)]
pub struct RotationRemover;

impl Visitor for RotationRemover {
    type Error = Infallible;

    fn visit_sequence(&mut self, turns: Vec<Turn>) -> Result<Rewrite<Node>, Infallible> {
        let mut orientation = Orientation::new();
        let mut ret = vec![];
        let face_turns_and_rotations = turns
            .into_iter()
            .flat_map(|turn| turn.decompose().unwrap_or_else(|| smallvec![turn]));
        for turn in face_turns_and_rotations {
            match turn.mv {
                Move::Rotation(axis) => orientation.rotate(axis, turn.direction),
                _ => ret.push(orientation.get_turn(turn)),
            }
        }
        Ok(Rewrite::Keep(Node::Sequence(ret)))
    }
}
