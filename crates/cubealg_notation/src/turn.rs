//! Single turns and the algebra over them.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;
use strum::EnumIter;

use crate::ParseTurnError;

/// Outer face of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// Up
    U,
    /// Front
    F,
    /// Right
    R,
    /// Down
    D,
    /// Back
    B,
    /// Left
    L,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Face {
    /// Returns the uppercase letter for the face.
    pub fn to_char(self) -> char {
        match self {
            Face::U => 'U',
            Face::F => 'F',
            Face::R => 'R',
            Face::D => 'D',
            Face::B => 'B',
            Face::L => 'L',
        }
    }

    /// Returns the face with the given uppercase letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Face::U),
            'F' => Some(Face::F),
            'R' => Some(Face::R),
            'D' => Some(Face::D),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            _ => None,
        }
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::U => Face::D,
            Face::F => Face::B,
            Face::R => Face::L,
            Face::D => Face::U,
            Face::B => Face::F,
            Face::L => Face::R,
        }
    }
}

/// Middle layer of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slice {
    /// Middle layer between `R` and `L`, turning like `L`.
    M,
    /// Equator layer between `U` and `D`, turning like `D`.
    E,
    /// Standing layer between `F` and `B`, turning like `F`.
    S,
}

impl Slice {
    /// Returns the face whose direction the slice follows.
    pub fn home_face(self) -> Face {
        match self {
            Slice::M => Face::L,
            Slice::E => Face::D,
            Slice::S => Face::F,
        }
    }

    /// Returns the slice whose home face is `face`, if there is one.
    pub fn from_home_face(face: Face) -> Option<Self> {
        match face {
            Face::L => Some(Slice::M),
            Face::D => Some(Slice::E),
            Face::F => Some(Slice::S),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Slice::M => 'M',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }
}

/// Axis of a whole-cube rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Rotation like `R`.
    X,
    /// Rotation like `U`.
    Y,
    /// Rotation like `F`.
    Z,
}

impl Axis {
    fn to_char(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// Letter of a turn, without its direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Outer face turn, written in uppercase.
    ///
    /// Example: `R`
    Face(Face),
    /// Wide turn of an outer face and the adjacent middle layer, written in
    /// lowercase.
    ///
    /// Example: `r`
    Wide(Face),
    /// Middle layer turn.
    ///
    /// Example: `M`
    Slice(Slice),
    /// Whole-cube rotation.
    ///
    /// Example: `x`
    Rotation(Axis),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Move {
    /// Returns the move for a single letter of notation.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(Move::Slice(Slice::M)),
            'E' => Some(Move::Slice(Slice::E)),
            'S' => Some(Move::Slice(Slice::S)),
            'x' => Some(Move::Rotation(Axis::X)),
            'y' => Some(Move::Rotation(Axis::Y)),
            'z' => Some(Move::Rotation(Axis::Z)),
            c if c.is_ascii_uppercase() => Face::from_char(c).map(Move::Face),
            c => Face::from_char(c.to_ascii_uppercase()).map(Move::Wide),
        }
    }

    /// Returns the letter for the move.
    pub fn to_char(self) -> char {
        match self {
            Move::Face(face) => face.to_char(),
            Move::Wide(face) => face.to_char().to_ascii_lowercase(),
            Move::Slice(slice) => slice.to_char(),
            Move::Rotation(axis) => axis.to_char(),
        }
    }

    /// Returns the axis along which the move turns layers, or `None` for
    /// rotations.
    ///
    /// Two moves with the same layer axis commute.
    pub fn layer_axis(self) -> Option<Axis> {
        match self {
            Move::Face(face) | Move::Wide(face) => Some(match face {
                Face::U | Face::D => Axis::Y,
                Face::F | Face::B => Axis::Z,
                Face::R | Face::L => Axis::X,
            }),
            Move::Slice(Slice::M) => Some(Axis::X),
            Move::Slice(Slice::E) => Some(Axis::Y),
            Move::Slice(Slice::S) => Some(Axis::Z),
            Move::Rotation(_) => None,
        }
    }

    /// Returns the key used to order a run of parallel moves.
    ///
    /// Face turns come first (`U F R D B L`), then wide turns (`u f r b d l`),
    /// then slices (`M E S`).
    pub(crate) fn sort_key(self) -> (u8, u8) {
        match self {
            Move::Face(face) => (0, face as u8),
            Move::Wide(face) => (
                1,
                match face {
                    Face::U => 0,
                    Face::F => 1,
                    Face::R => 2,
                    Face::B => 3,
                    Face::D => 4,
                    Face::L => 5,
                },
            ),
            Move::Slice(slice) => (2, slice as u8),
            Move::Rotation(axis) => (3, axis as u8),
        }
    }
}

/// Direction of a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// Quarter turn clockwise, written with no suffix.
    Cw = 1,
    /// Half turn, written `2`.
    Double = 2,
    /// Quarter turn counterclockwise, written `'`.
    Ccw = 3,
}

impl Direction {
    /// Returns the direction equivalent to `n` clockwise quarter turns, or
    /// `None` if that is the identity.
    pub fn from_quarter_turns(n: u32) -> Option<Self> {
        match n % 4 {
            1 => Some(Direction::Cw),
            2 => Some(Direction::Double),
            3 => Some(Direction::Ccw),
            _ => None,
        }
    }

    /// Returns the number of clockwise quarter turns, from 1 to 3.
    pub fn quarter_turns(self) -> u32 {
        self as u32
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn inv(self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Double => Direction::Double,
            Direction::Ccw => Direction::Cw,
        }
    }

    /// Returns the notation suffix for the direction.
    pub fn suffix(self) -> &'static str {
        match self {
            Direction::Cw => "",
            Direction::Double => "2",
            Direction::Ccw => "'",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "" => Some(Direction::Cw),
            "2" => Some(Direction::Double),
            "'" => Some(Direction::Ccw),
            _ => None,
        }
    }
}

/// Result of merging two adjacent turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Merge {
    /// The turns cancel out completely.
    Cancelled,
    /// The turns combine into a single turn.
    Merged(Turn),
    /// The turns are of different moves and cannot be combined.
    Unmerged(Turn, Turn),
}

/// Single turn, such as `R`, `u2`, `M'`, or `x`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// Letter of the turn.
    pub mv: Move,
    /// Direction of the turn.
    pub direction: Direction,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mv, self.direction.suffix())
    }
}

impl FromStr for Turn {
    type Err = ParseTurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let mv = chars.next().and_then(Move::from_char);
        let direction = Direction::from_suffix(chars.as_str());
        match mv.zip(direction) {
            Some((mv, direction)) => Ok(Turn { mv, direction }),
            None => Err(ParseTurnError(s.to_owned())),
        }
    }
}

impl Turn {
    /// Constructs a turn.
    pub const fn new(mv: Move, direction: Direction) -> Self {
        Self { mv, direction }
    }

    /// Returns whether both turns have the same letter.
    pub fn is_same_move(self, other: Turn) -> bool {
        self.mv == other.mv
    }

    /// Returns whether the turns move layers along the same axis. Rotations are
    /// never parallel to anything.
    pub fn is_parallel(self, other: Turn) -> bool {
        self.mv.layer_axis().is_some() && self.mv.layer_axis() == other.mv.layer_axis()
    }

    /// Returns whether the turn is a half turn.
    pub fn is_double(self) -> bool {
        self.direction == Direction::Double
    }

    /// Returns whether the turn is a quarter turn.
    pub fn is_single(self) -> bool {
        !self.is_double()
    }

    /// Returns whether the turn is a whole-cube rotation.
    pub fn is_rotation(self) -> bool {
        matches!(self.mv, Move::Rotation(_))
    }

    /// Returns the inverse turn.
    #[must_use]
    pub fn inv(self) -> Self {
        Self::new(self.mv, self.direction.inv())
    }

    /// Returns the turn repeated `n` times, or `None` if that is the identity.
    pub fn repeat(self, n: u32) -> Option<Self> {
        let quarter_turns = self.direction.quarter_turns() * (n % 4);
        Direction::from_quarter_turns(quarter_turns).map(|direction| Self::new(self.mv, direction))
    }

    /// Merges two adjacent turns.
    pub fn merge(self, other: Turn) -> Merge {
        if !self.is_same_move(other) {
            return Merge::Unmerged(self, other);
        }
        let quarter_turns = self.direction.quarter_turns() + other.direction.quarter_turns();
        match Direction::from_quarter_turns(quarter_turns) {
            Some(direction) => Merge::Merged(Self::new(self.mv, direction)),
            None => Merge::Cancelled,
        }
    }

    /// Returns the equivalent outer face turns and rotation for a wide turn or
    /// slice turn, or `None` for any other turn.
    pub fn decompose(self) -> Option<SmallVec<[Turn; 3]>> {
        let (_, by_direction) = table::WIDE_AND_SLICE_MAP
            .iter()
            .find(|(mv, _)| *mv == self.mv)?;
        let turns = by_direction[self.direction as usize - 1];
        Some(turns.iter().copied().collect())
    }
}

mod table {
    use super::Direction::{Ccw, Cw, Double};
    use super::{Axis, Direction, Face, Move, Slice, Turn};

    const U: Move = Move::Face(Face::U);
    const F: Move = Move::Face(Face::F);
    const R: Move = Move::Face(Face::R);
    const D: Move = Move::Face(Face::D);
    const B: Move = Move::Face(Face::B);
    const L: Move = Move::Face(Face::L);
    const X: Move = Move::Rotation(Axis::X);
    const Y: Move = Move::Rotation(Axis::Y);
    const Z: Move = Move::Rotation(Axis::Z);

    const fn t(mv: Move, direction: Direction) -> Turn {
        Turn::new(mv, direction)
    }

    /// Decomposition of each wide and slice move, indexed by direction.
    pub(super) static WIDE_AND_SLICE_MAP: [(Move, [&[Turn]; 3]); 9] = [
        (
            Move::Wide(Face::U),
            [
                &[t(D, Cw), t(Y, Cw)],
                &[t(D, Double), t(Y, Double)],
                &[t(D, Ccw), t(Y, Ccw)],
            ],
        ),
        (
            Move::Wide(Face::F),
            [
                &[t(B, Cw), t(Z, Cw)],
                &[t(B, Double), t(Z, Double)],
                &[t(B, Ccw), t(Z, Ccw)],
            ],
        ),
        (
            Move::Wide(Face::R),
            [
                &[t(L, Cw), t(X, Cw)],
                &[t(L, Double), t(X, Double)],
                &[t(L, Ccw), t(X, Ccw)],
            ],
        ),
        (
            Move::Wide(Face::D),
            [
                &[t(U, Cw), t(Y, Ccw)],
                &[t(U, Double), t(Y, Double)],
                &[t(U, Ccw), t(Y, Cw)],
            ],
        ),
        (
            Move::Wide(Face::B),
            [
                &[t(F, Cw), t(Z, Ccw)],
                &[t(F, Double), t(Z, Double)],
                &[t(F, Ccw), t(Z, Cw)],
            ],
        ),
        (
            Move::Wide(Face::L),
            [
                &[t(R, Cw), t(X, Ccw)],
                &[t(R, Double), t(X, Double)],
                &[t(R, Ccw), t(X, Cw)],
            ],
        ),
        (
            Move::Slice(Slice::M),
            [
                &[t(R, Cw), t(L, Ccw), t(X, Ccw)],
                &[t(R, Double), t(L, Double), t(X, Double)],
                &[t(R, Ccw), t(L, Cw), t(X, Cw)],
            ],
        ),
        (
            Move::Slice(Slice::E),
            [
                &[t(U, Cw), t(D, Ccw), t(Y, Ccw)],
                &[t(U, Double), t(D, Double), t(Y, Double)],
                &[t(U, Ccw), t(D, Cw), t(Y, Cw)],
            ],
        ),
        (
            Move::Slice(Slice::S),
            [
                &[t(F, Ccw), t(B, Cw), t(Z, Cw)],
                &[t(F, Double), t(B, Double), t(Z, Double)],
                &[t(F, Cw), t(B, Ccw), t(Z, Ccw)],
            ],
        ),
    ];
}
