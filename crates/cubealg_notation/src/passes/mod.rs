//! Whole-tree transformations built on [`crate::traverse`].

mod clean;
mod rotationless;
mod sequence;
mod validate;

pub use clean::Cleaner;
pub use rotationless::RotationRemover;
pub use sequence::Sequencer;
pub use validate::Validator;

use crate::traverse::{rewrite, traverse};
use crate::{Ast, ValidationError};

/// Checks that every repeating group multiplier is at most `max_multiplier`.
pub fn validate(ast: &Ast, max_multiplier: u32) -> Result<(), ValidationError> {
    traverse(ast, &mut Validator { max_multiplier }).map(|_| ())
}

/// Simplifies an algorithm without changing its effect.
///
/// This sorts and merges parallel turns, collapses trivial repeating groups,
/// removes groups that cancel out, and folds conjugate setups into commutator
/// interchanges where possible.
pub fn clean(ast: &Ast) -> Ast {
    rewrite(ast, &mut Cleaner)
}

/// Expands every group, producing a single sequence.
pub fn sequence(ast: &Ast) -> Ast {
    rewrite(ast, &mut Sequencer)
}

/// Expands every group and replaces wide turns, slice turns, and rotations
/// with outer face turns.
pub fn rotationless(ast: &Ast) -> Ast {
    rewrite(&sequence(ast), &mut RotationRemover)
}
