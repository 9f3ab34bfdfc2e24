//! # Layer Mutations
//!
//! Semantic operations on the multi-layer transition value.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation represents one panel gesture
//! 2. **Validated**: mutations check bounds before touching the value
//! 3. **Invertible**: every mutation can produce its inverse against
//!    the pre-apply state, which is what the undo stack records

use motif_css::TransitionLayer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations over the layer list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Replace `count` layers at `index` with one or more new layers
    ReplaceLayers {
        index: usize,
        count: usize,
        layers: Vec<TransitionLayer>,
    },

    /// Insert a new layer at `index`
    InsertLayer {
        index: usize,
        layer: TransitionLayer,
    },

    /// Remove the layer at `index`
    DeleteLayer { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Layer not found at index {0}")]
    LayerNotFound(usize),

    #[error("Range {index}..{} is out of bounds for {len} layer(s)", .index + .count)]
    RangeOutOfBounds {
        index: usize,
        count: usize,
        len: usize,
    },

    #[error("Insert index {index} is out of bounds for {len} layer(s)")]
    InsertOutOfBounds { index: usize, len: usize },

    #[error("Replacement must contain at least one layer")]
    EmptyReplacement,
}

impl Mutation {
    /// Validate without applying
    pub fn validate(&self, layers: &[TransitionLayer]) -> Result<(), MutationError> {
        match self {
            Mutation::ReplaceLayers {
                index,
                count,
                layers: replacement,
            } => {
                if replacement.is_empty() {
                    return Err(MutationError::EmptyReplacement);
                }
                if *count == 0 || index + count > layers.len() {
                    return Err(MutationError::RangeOutOfBounds {
                        index: *index,
                        count: *count,
                        len: layers.len(),
                    });
                }
                Ok(())
            }

            Mutation::InsertLayer { index, .. } => {
                if *index > layers.len() {
                    return Err(MutationError::InsertOutOfBounds {
                        index: *index,
                        len: layers.len(),
                    });
                }
                Ok(())
            }

            Mutation::DeleteLayer { index } => {
                if *index >= layers.len() {
                    return Err(MutationError::LayerNotFound(*index));
                }
                Ok(())
            }
        }
    }

    /// Apply to the layer list with validation
    pub fn apply(&self, layers: &mut Vec<TransitionLayer>) -> Result<(), MutationError> {
        self.validate(layers)?;

        match self {
            Mutation::ReplaceLayers {
                index,
                count,
                layers: replacement,
            } => {
                layers.splice(*index..index + count, replacement.iter().cloned());
            }

            Mutation::InsertLayer { index, layer } => {
                layers.insert(*index, layer.clone());
            }

            Mutation::DeleteLayer { index } => {
                layers.remove(*index);
            }
        }

        Ok(())
    }

    /// Build the inverse mutation against the current (pre-apply) state
    pub fn to_inverse(&self, layers: &[TransitionLayer]) -> Result<Mutation, MutationError> {
        self.validate(layers)?;

        Ok(match self {
            Mutation::ReplaceLayers {
                index,
                count,
                layers: replacement,
            } => Mutation::ReplaceLayers {
                index: *index,
                count: replacement.len(),
                layers: layers[*index..index + count].to_vec(),
            },

            Mutation::InsertLayer { index, .. } => Mutation::DeleteLayer { index: *index },

            Mutation::DeleteLayer { index } => Mutation::InsertLayer {
                index: *index,
                layer: layers[*index].clone(),
            },
        })
    }
}
