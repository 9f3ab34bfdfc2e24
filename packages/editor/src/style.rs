//! # Transition Style
//!
//! The externally-owned multi-layer `transition` value a panel edits.
//!
//! Committed layers are the durable state. An ephemeral preview overlay
//! may shadow them between live edits; the preview is a discardable
//! projection and clearing it always falls back to committed state.

use crate::errors::EditorError;
use motif_css::{parse, serialize_layers, TransitionLayer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionStyle {
    committed: Vec<TransitionLayer>,
    preview: Option<Vec<TransitionLayer>>,

    /// Increments on each change to committed state (undo/redo included)
    version: u64,
}

impl TransitionStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an existing `transition` declaration value
    pub fn from_css(source: &str) -> Result<Self, EditorError> {
        Ok(Self {
            committed: parse(source)?,
            preview: None,
            version: 0,
        })
    }

    /// Layers currently visible: the preview when one is active
    pub fn layers(&self) -> &[TransitionLayer] {
        self.preview.as_deref().unwrap_or(&self.committed)
    }

    pub fn committed_layers(&self) -> &[TransitionLayer] {
        &self.committed
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.layers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers().is_empty()
    }

    /// Serialize the visible value back to CSS text
    pub fn to_css(&self) -> String {
        serialize_layers(self.layers())
    }

    pub(crate) fn set_preview(&mut self, layers: Vec<TransitionLayer>) {
        self.preview = Some(layers);
    }

    pub(crate) fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Replace committed state after a successful final publish
    pub(crate) fn commit(&mut self, layers: Vec<TransitionLayer>) {
        self.committed = layers;
        self.preview = None;
        self.version += 1;
    }
}
