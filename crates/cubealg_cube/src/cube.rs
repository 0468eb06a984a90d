use std::borrow::Cow;

use cubealg_notation::{Algorithm, AlgorithmError, Direction, Face, Move, Orientation, Turn};

use crate::{Corner, CornerPiece, Edge, EdgePiece};

/// Anything that can be turned into an [`Algorithm`].
pub trait ToAlgorithm {
    /// Returns the algorithm, parsing it if necessary.
    fn to_algorithm(&self) -> Result<Cow<'_, Algorithm>, AlgorithmError>;
}

impl ToAlgorithm for Algorithm {
    fn to_algorithm(&self) -> Result<Cow<'_, Algorithm>, AlgorithmError> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToAlgorithm for str {
    fn to_algorithm(&self) -> Result<Cow<'_, Algorithm>, AlgorithmError> {
        Algorithm::new(self).map(Cow::Owned)
    }
}

impl ToAlgorithm for String {
    fn to_algorithm(&self) -> Result<Cow<'_, Algorithm>, AlgorithmError> {
        self.as_str().to_algorithm()
    }
}

impl<T: ToAlgorithm + ?Sized> ToAlgorithm for &T {
    fn to_algorithm(&self) -> Result<Cow<'_, Algorithm>, AlgorithmError> {
        (**self).to_algorithm()
    }
}

/// Slots moved by a turn of each face, as `(corners, edges)`. Each list is in
/// clockwise order around the face.
const fn piece_locations(face: Face) -> ([usize; 4], [usize; 4]) {
    match face {
        Face::U => ([0, 1, 2, 3], [0, 1, 2, 3]),
        Face::F => ([3, 2, 5, 4], [2, 5, 8, 4]),
        Face::R => ([2, 1, 6, 5], [1, 6, 9, 5]),
        Face::D => ([4, 5, 6, 7], [8, 9, 10, 11]),
        Face::B => ([1, 0, 7, 6], [0, 7, 10, 6]),
        Face::L => ([0, 3, 4, 7], [3, 4, 11, 7]),
    }
}

#[rustfmt::skip]
const SOLVED_CORNERS: [Corner; 8] = [
    Corner::UBL, Corner::UBR, Corner::UFR, Corner::UFL,
    Corner::DFL, Corner::DFR, Corner::DBR, Corner::DBL,
];

#[rustfmt::skip]
const SOLVED_EDGES: [Edge; 12] = [
    Edge::UB, Edge::UR, Edge::UF, Edge::UL,
    Edge::FL, Edge::FR, Edge::BR, Edge::BL,
    Edge::DF, Edge::DR, Edge::DB, Edge::DL,
];

/// 3x3x3 cube state.
///
/// Turns are applied relative to the current [`Orientation`], so `x U`
/// moves the physical `F` layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    corners: [CornerPiece; 8],
    edges: [EdgePiece; 12],
    orientation: Orientation,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Constructs a solved cube in the identity orientation.
    pub fn new() -> Self {
        Self {
            corners: SOLVED_CORNERS.map(CornerPiece::new),
            edges: SOLVED_EDGES.map(EdgePiece::new),
            orientation: Orientation::new(),
        }
    }

    /// Constructs a cube and applies a scramble to it.
    pub fn from_scramble(scramble: impl ToAlgorithm) -> Result<Self, AlgorithmError> {
        let mut ret = Self::new();
        ret.scramble(scramble)?;
        Ok(ret)
    }

    /// Returns the corner in each slot.
    pub fn corners(&self) -> &[CornerPiece; 8] {
        &self.corners
    }

    /// Returns the edge in each slot.
    pub fn edges(&self) -> &[EdgePiece; 12] {
        &self.edges
    }

    /// Returns the current orientation.
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Returns whether every piece is in its home slot with no twist or flip.
    ///
    /// Orientation is ignored.
    pub fn is_solved(&self) -> bool {
        let corners_solved = (self.corners.iter().zip(SOLVED_CORNERS))
            .all(|(piece, home)| piece.name == home && piece.orientation == 0);
        let edges_solved = (self.edges.iter().zip(SOLVED_EDGES))
            .all(|(piece, home)| piece.name == home && piece.orientation == 0);
        corners_solved && edges_solved
    }

    /// Returns whether the orientation is the identity.
    pub fn is_oriented(&self) -> bool {
        self.orientation.is_identity()
    }

    /// Resets the orientation without moving any pieces.
    pub fn orient(&mut self) -> &mut Self {
        self.orientation.reset();
        self
    }

    /// Applies an algorithm.
    pub fn apply(&mut self, alg: impl ToAlgorithm) -> Result<&mut Self, AlgorithmError> {
        let alg = alg.to_algorithm()?;
        let turns = alg.turns();
        log::debug!("applying {:?} ({} turns)", alg.raw(), turns.len());
        Ok(self.apply_turns(turns))
    }

    /// Applies a scramble. This is the same as [`Self::apply()`].
    pub fn scramble(&mut self, alg: impl ToAlgorithm) -> Result<&mut Self, AlgorithmError> {
        self.apply(alg)
    }

    /// Applies a solution. This is the same as [`Self::apply()`].
    pub fn solve(&mut self, alg: impl ToAlgorithm) -> Result<&mut Self, AlgorithmError> {
        self.apply(alg)
    }

    /// Applies a list of turns.
    pub fn apply_turns(&mut self, turns: impl IntoIterator<Item = Turn>) -> &mut Self {
        for turn in turns {
            self.apply_turn(turn);
        }
        self
    }

    /// Applies a single turn.
    pub fn apply_turn(&mut self, turn: Turn) {
        match turn.mv {
            Move::Face(face) => {
                let layer = self.orientation.get_face(face);
                log::trace!("turning physical {layer} layer for {turn}");
                self.turn_layer(layer, turn.direction);
            }
            Move::Wide(_) | Move::Slice(_) => {
                for t in turn.decompose().into_iter().flatten() {
                    self.apply_turn(t);
                }
            }
            Move::Rotation(axis) => self.orientation.rotate(axis, turn.direction),
        }
    }

    /// Turns a physical outer layer.
    fn turn_layer(&mut self, layer: Face, direction: Direction) {
        let (corner_slots, edge_slots) = piece_locations(layer);
        let mut corners = corner_slots.map(|i| self.corners[i]);
        let mut edges = edge_slots.map(|i| self.edges[i]);

        // Quarter turns of side layers change piece orientation.
        if direction != Direction::Double {
            if matches!(layer, Face::F | Face::B | Face::L | Face::R) {
                for (i, corner) in corners.iter_mut().enumerate() {
                    corner.twist(i as u8 % 2 + 1);
                }
            }
            if matches!(layer, Face::F | Face::B) {
                for edge in &mut edges {
                    edge.flip();
                }
            }
        }

        let shift = direction.quarter_turns() as usize;
        corners.rotate_right(shift);
        edges.rotate_right(shift);

        for (slot, piece) in corner_slots.into_iter().zip(corners) {
            self.corners[slot] = piece;
        }
        for (slot, piece) in edge_slots.into_iter().zip(edges) {
            self.edges[slot] = piece;
        }
    }
}
