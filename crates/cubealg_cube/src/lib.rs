//! 3x3x3 cube simulator driven by algorithm notation.
//!
//! A [`Cube`] tracks the position and orientation of every corner and edge
//! piece. Algorithms are parsed with [`cubealg_notation`].

mod cube;
mod piece;

pub use cube::{Cube, ToAlgorithm};
pub use cubealg_notation as notation;
pub use cubealg_notation::{Algorithm, AlgorithmError, Orientation};
pub use piece::{Corner, CornerPiece, Edge, EdgePiece};
