//! # Undo/Redo Stack
//!
//! Tracks published mutation batches and enables undo/redo.
//!
//! ## Design
//!
//! - A batch records its inverses (captured pre-apply) alongside the
//!   mutations themselves
//! - Batches apply all-or-nothing against a working copy
//! - Undo applies the inverses and moves the batch to the redo stack
//! - Redo reapplies the original mutations
//! - New batches clear the redo stack
//! - Only final commits are recorded; ephemeral previews never enter

use crate::mutations::{Mutation, MutationError};
use motif_css::TransitionLayer;

/// A group of mutations undone/redone together (one published batch)
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// The inverse mutations (in reverse order for undo)
    pub inverses: Vec<Mutation>,

    /// Optional description of this batch
    pub description: Option<String>,
}

/// Undo/redo stack for the transition value
#[derive(Debug)]
pub struct UndoStack {
    /// Applied batches (most recent last)
    undo_stack: Vec<MutationBatch>,

    /// Undone batches (most recent last)
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Apply a batch all-or-nothing and record it for undo.
    ///
    /// Mutations run against a working copy first; `layers` is left
    /// untouched and nothing is recorded unless every mutation applies.
    pub fn apply_batch(
        &mut self,
        mutations: Vec<Mutation>,
        layers: &mut Vec<TransitionLayer>,
        description: Option<String>,
    ) -> Result<(), MutationError> {
        if mutations.is_empty() {
            return Ok(());
        }

        let mut working = layers.clone();
        let mut inverses = Vec::with_capacity(mutations.len());

        for mutation in &mutations {
            // Inverses go in reverse order
            inverses.insert(0, mutation.to_inverse(&working)?);
            mutation.apply(&mut working)?;
        }

        *layers = working;
        self.push_batch(MutationBatch {
            mutations,
            inverses,
            description,
        });

        Ok(())
    }

    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // Clear redo stack (new action invalidates future)
        self.redo_stack.clear();
    }

    /// Undo the most recent batch
    pub fn undo(&mut self, layers: &mut Vec<TransitionLayer>) -> Result<bool, MutationError> {
        if let Some(batch) = self.undo_stack.pop() {
            for inverse in &batch.inverses {
                inverse.apply(layers)?;
            }
            self.redo_stack.push(batch);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Redo the most recently undone batch
    pub fn redo(&mut self, layers: &mut Vec<TransitionLayer>) -> Result<bool, MutationError> {
        if let Some(batch) = self.redo_stack.pop() {
            for mutation in &batch.mutations {
                mutation.apply(layers)?;
            }
            self.undo_stack.push(batch);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    /// Description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif_css::parse;

    fn layers(source: &str) -> Vec<TransitionLayer> {
        parse(source).unwrap()
    }

    #[test]
    fn test_undo_stack_creation() {
        let stack = UndoStack::new();
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 0);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_apply_undo_redo() {
        let mut value = layers("opacity 1s");
        let mut stack = UndoStack::new();

        stack
            .apply_batch(
                vec![Mutation::ReplaceLayers {
                    index: 0,
                    count: 1,
                    layers: layers("opacity 2s"),
                }],
                &mut value,
                Some("Edit transition layer".to_string()),
            )
            .unwrap();

        assert_eq!(value, layers("opacity 2s"));
        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.undo_description(), Some("Edit transition layer"));

        let undone = stack.undo(&mut value).unwrap();
        assert!(undone);
        assert_eq!(value, layers("opacity 1s"));
        assert!(stack.can_redo());

        let redone = stack.redo(&mut value).unwrap();
        assert!(redone);
        assert_eq!(value, layers("opacity 2s"));
    }

    #[test]
    fn test_failed_batch_leaves_state_untouched() {
        let mut value = layers("opacity 1s");
        let mut stack = UndoStack::new();

        let result = stack.apply_batch(
            vec![
                Mutation::DeleteLayer { index: 0 },
                // Out of bounds once the first delete has run
                Mutation::DeleteLayer { index: 0 },
            ],
            &mut value,
            None,
        );

        assert!(result.is_err());
        assert_eq!(value, layers("opacity 1s"));
        assert!(!stack.can_undo());
    }

    #[test]
    fn test_new_batch_clears_redo() {
        let mut value = layers("opacity 1s");
        let mut stack = UndoStack::new();

        stack
            .apply_batch(
                vec![Mutation::DeleteLayer { index: 0 }],
                &mut value,
                None,
            )
            .unwrap();
        stack.undo(&mut value).unwrap();
        assert_eq!(stack.redo_levels(), 1);

        stack
            .apply_batch(
                vec![Mutation::InsertLayer {
                    index: 1,
                    layer: layers("width 2s").remove(0),
                }],
                &mut value,
                None,
            )
            .unwrap();

        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut value = layers("opacity 1s");
        let mut stack = UndoStack::with_max_levels(2);

        for i in 1..=3 {
            stack
                .apply_batch(
                    vec![Mutation::ReplaceLayers {
                        index: 0,
                        count: 1,
                        layers: layers(&format!("opacity {}s", i)),
                    }],
                    &mut value,
                    None,
                )
                .unwrap();
        }

        assert_eq!(stack.undo_levels(), 2);
    }

    #[test]
    fn test_multi_mutation_batch_undone_together() {
        let mut value = layers("opacity 1s, width 2s");
        let mut stack = UndoStack::new();

        stack
            .apply_batch(
                vec![
                    Mutation::DeleteLayer { index: 1 },
                    Mutation::ReplaceLayers {
                        index: 0,
                        count: 1,
                        layers: layers("opacity 3s"),
                    },
                ],
                &mut value,
                Some("Rework transition".to_string()),
            )
            .unwrap();

        assert_eq!(value, layers("opacity 3s"));

        stack.undo(&mut value).unwrap();
        assert_eq!(value, layers("opacity 1s, width 2s"));
    }
}
