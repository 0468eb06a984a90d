use crate::traverse::{Rewrite, Visitor};
use crate::{Node, NodeList, ValidationError};

/// Rejects algorithms that break a semantic rule the grammar cannot express.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Validator {
    /// Largest allowed repeating group multiplier.
    pub max_multiplier: u32,
}

impl Visitor for Validator {
    type Error = ValidationError;

    fn visit_repeating(
        &mut self,
        contents: NodeList,
        multiplier: u32,
    ) -> Result<Rewrite<Node>, ValidationError> {
        if multiplier > self.max_multiplier {
            return Err(ValidationError::MultiplierTooLarge {
                multiplier,
                max: self.max_multiplier,
            });
        }
        Ok(Rewrite::Keep(Node::Repeating {
            contents,
            multiplier,
        }))
    }
}
