//! The seam between a layer editor and the owning store

use crate::errors::EditorError;
use motif_css::TransitionLayer;
use serde::{Deserialize, Serialize};

/// Whether a commit is a live preview or a final, undo-worthy edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitOptions {
    pub is_ephemeral: bool,
}

impl CommitOptions {
    /// A live-preview commit (e.g. on blur); must not become a
    /// permanent undo entry upstream
    pub fn ephemeral() -> Self {
        Self { is_ephemeral: true }
    }

    /// A final commit (e.g. on the confirm key)
    pub fn committed() -> Self {
        Self {
            is_ephemeral: false,
        }
    }
}

/// Upstream commit sink for layer edits.
///
/// A layer editor never mutates the multi-layer value directly; it
/// hands parsed layers (or a deletion) to the sink, which merges them
/// back into the owning value.
pub trait CommitSink {
    /// Merge `layers` into the owning value in place of the layer at
    /// `index`. One edited row may legitimately produce several layers
    /// when the user types a comma-separated value.
    fn edit_layer(
        &mut self,
        index: usize,
        layers: Vec<TransitionLayer>,
        options: CommitOptions,
    ) -> Result<(), EditorError>;

    /// Remove the layer at `index` from the owning value
    fn delete_layer(&mut self, index: usize) -> Result<(), EditorError>;
}
