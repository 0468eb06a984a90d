use strum::{Display, EnumIter};

/// Name of a corner piece, given by its home position.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    /// Up-back-left
    UBL,
    /// Up-back-right
    UBR,
    /// Up-front-right
    UFR,
    /// Up-front-left
    UFL,
    /// Down-front-left
    DFL,
    /// Down-front-right
    DFR,
    /// Down-back-right
    DBR,
    /// Down-back-left
    DBL,
}

/// Name of an edge piece, given by its home position.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    /// Up-back
    UB,
    /// Up-right
    UR,
    /// Up-front
    UF,
    /// Up-left
    UL,
    /// Front-left
    FL,
    /// Front-right
    FR,
    /// Back-right
    BR,
    /// Back-left
    BL,
    /// Down-front
    DF,
    /// Down-right
    DR,
    /// Down-back
    DB,
    /// Down-left
    DL,
}

/// Corner piece with its twist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CornerPiece {
    /// Which corner this is.
    pub name: Corner,
    /// Twist relative to its home orientation, from 0 to 2.
    pub orientation: u8,
}

impl CornerPiece {
    /// Constructs an untwisted corner.
    pub fn new(name: Corner) -> Self {
        Self {
            name,
            orientation: 0,
        }
    }

    /// Twists the corner by `offset` steps.
    pub fn twist(&mut self, offset: u8) {
        self.orientation = (self.orientation + offset % 3) % 3;
    }
}

/// Edge piece with its flip.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgePiece {
    /// Which edge this is.
    pub name: Edge,
    /// Flip relative to its home orientation, either 0 or 1.
    pub orientation: u8,
}

impl EdgePiece {
    /// Constructs an unflipped edge.
    pub fn new(name: Edge) -> Self {
        Self {
            name,
            orientation: 0,
        }
    }

    /// Flips the edge.
    pub fn flip(&mut self) {
        self.orientation ^= 1;
    }
}
