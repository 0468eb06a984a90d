//! Tracking of whole-cube rotations.

use crate::{Axis, Direction, Face, Move, Slice, Turn};

/// Mapping from each logical face to the physical face that currently sits in
/// its place.
///
/// After `x`, the logical `U` face is what was physically `F`, so a `U` turn
/// actually moves the physical `F` layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    /// Physical face for each logical face, indexed by [`Face`] as `usize`.
    map: [Face; 6],
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new()
    }
}

impl Orientation {
    const IDENTITY: [Face; 6] = [Face::U, Face::F, Face::R, Face::D, Face::B, Face::L];

    /// Constructs the identity orientation.
    pub fn new() -> Self {
        Self {
            map: Self::IDENTITY,
        }
    }

    /// Returns whether this is the identity orientation.
    pub fn is_identity(&self) -> bool {
        self.map == Self::IDENTITY
    }

    /// Resets to the identity orientation.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Applies a whole-cube rotation.
    pub fn rotate(&mut self, axis: Axis, direction: Direction) {
        let cycle = match axis {
            Axis::X => [Face::U, Face::F, Face::D, Face::B],
            Axis::Y => [Face::F, Face::R, Face::B, Face::L],
            Axis::Z => [Face::U, Face::L, Face::D, Face::R],
        };
        let old = self.map;
        let shift = direction.quarter_turns() as usize;
        for (i, face) in cycle.into_iter().enumerate() {
            self.map[face as usize] = old[cycle[(i + shift) % 4] as usize];
        }
    }

    /// Returns the physical face that sits where `face` is.
    pub fn get_face(&self, face: Face) -> Face {
        self.map[face as usize]
    }

    /// Translates a turn in the current orientation to the equivalent turn in
    /// the identity orientation.
    ///
    /// Rotations are returned unchanged.
    pub fn get_turn(&self, turn: Turn) -> Turn {
        let mv = match turn.mv {
            Move::Face(face) => Move::Face(self.get_face(face)),
            Move::Wide(face) => Move::Wide(self.get_face(face)),
            Move::Slice(slice) => {
                let physical = self.get_face(slice.home_face());
                return match Slice::from_home_face(physical) {
                    Some(s) => Turn::new(Move::Slice(s), turn.direction),
                    None => {
                        // The slice now turns like the opposite face, which
                        // is always a home face.
                        let opposite = physical.opposite();
                        match Slice::from_home_face(opposite) {
                            Some(s) => Turn::new(Move::Slice(s), turn.direction.inv()),
                            None => turn,
                        }
                    }
                };
            }
            Move::Rotation(_) => turn.mv,
        };
        Turn::new(mv, turn.direction)
    }
}
