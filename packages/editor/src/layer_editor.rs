//! # Layer Editor
//!
//! State machine for one row of the transition panel, reconciling three
//! representations of the same layer:
//!
//! - the structured layer owned by the store (read-only here)
//! - the text buffer the row displays, which may be transiently invalid
//! - the committed value pushed upstream through the commit sink
//!
//! Edits arrive either from structured sub-editors (`on_field_edit`) or
//! from the raw text control (`on_text_edit` + `on_commit_request`).
//! Each path re-derives the other representation and attempts to
//! commit; text that fails to parse flips the buffer to its error state
//! and never reaches the sink.

use crate::buffer::EditBuffer;
use crate::commit::{CommitOptions, CommitSink};
use crate::errors::EditorError;
use motif_css::{
    extract_transition_properties, parse, serialize_layer, TransitionDefaults, TransitionLayer,
    TransitionProperties,
};
use tracing::{debug, warn};

/// Editing state for the layer at one index of the multi-layer value
pub struct LayerEditor {
    index: usize,
    buffer: EditBuffer,
    defaults: TransitionDefaults,

    /// Last extraction, keyed by the layer it was computed from
    extracted: Option<(TransitionLayer, TransitionProperties)>,
}

impl LayerEditor {
    /// Create an editor for the layer at `index`, seeding the buffer
    /// from the layer's current text
    pub fn new(index: usize, initial_text: impl Into<String>) -> Self {
        Self {
            index,
            buffer: EditBuffer::Intermediate {
                value: initial_text.into(),
            },
            defaults: TransitionDefaults::default(),
            extracted: None,
        }
    }

    pub fn for_layer(index: usize, layer: &TransitionLayer) -> Self {
        Self::new(index, serialize_layer(layer))
    }

    pub fn with_defaults(mut self, defaults: TransitionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Text the row displays
    pub fn value(&self) -> &str {
        self.buffer.text()
    }

    /// Semantic fields of `layer`, memoized on structural identity so
    /// repeated renders of an unchanged layer skip the recomputation
    pub fn properties(&mut self, layer: &TransitionLayer) -> TransitionProperties {
        if let Some((key, properties)) = &self.extracted {
            if key == layer {
                return properties.clone();
            }
        }

        let properties = extract_transition_properties(layer);
        self.extracted = Some((layer.clone(), properties.clone()));
        properties
    }

    /// A structured sub-editor changed one or more fields.
    ///
    /// The patch is overlaid on the current extraction of `layer`,
    /// resolved against the configured defaults, serialized, and
    /// re-parsed. Only a successful parse reaches the sink; a failed
    /// speculative edit stays local as an `Invalid` buffer.
    pub fn on_field_edit(
        &mut self,
        layer: &TransitionLayer,
        patch: &TransitionProperties,
        options: CommitOptions,
        sink: &mut dyn CommitSink,
    ) -> Result<(), EditorError> {
        let current = self.properties(layer);
        let resolved = current.overlaid(patch).resolve(&self.defaults);
        let text = serialize_layer(&resolved);

        match parse(&text) {
            Ok(layers) => {
                self.buffer = EditBuffer::Intermediate {
                    value: text.clone(),
                };
                debug!(
                    "[LayerEditor] field edit at {} -> {:?} (ephemeral: {})",
                    self.index, text, options.is_ephemeral
                );
                sink.edit_layer(self.index, layers, options)
            }
            Err(error) => {
                warn!(
                    "[LayerEditor] field edit at {} produced unparsable text {:?}: {}",
                    self.index, text, error
                );
                self.buffer = EditBuffer::Invalid { value: text };
                Ok(())
            }
        }
    }

    /// Live text input; deliberately not validated per keystroke
    pub fn on_text_edit(&mut self, text: impl Into<String>) {
        self.buffer = EditBuffer::Intermediate { value: text.into() };
    }

    /// Blur or confirm: parse the buffer and push it upstream.
    ///
    /// A no-op when the buffer is unset. Committing keeps the visible
    /// text as-is; it does not reset the buffer.
    pub fn on_commit_request(
        &mut self,
        options: CommitOptions,
        sink: &mut dyn CommitSink,
    ) -> Result<(), EditorError> {
        if !self.buffer.is_set() {
            return Ok(());
        }

        let text = self.buffer.text().to_string();
        match parse(&text) {
            Ok(layers) => {
                debug!(
                    "[LayerEditor] commit at {}: {} layer(s) (ephemeral: {})",
                    self.index,
                    layers.len(),
                    options.is_ephemeral
                );
                self.buffer = EditBuffer::Intermediate { value: text };
                sink.edit_layer(self.index, layers, options)
            }
            Err(error) => {
                warn!(
                    "[LayerEditor] commit at {} rejected: {}",
                    self.index, error
                );
                self.buffer = EditBuffer::Invalid { value: text };
                Ok(())
            }
        }
    }

    /// Delete this layer from the owning value and clear the buffer.
    ///
    /// A no-op when the buffer is already cleared, so a repeated abort
    /// never issues a second deletion.
    pub fn on_cancel(&mut self, sink: &mut dyn CommitSink) -> Result<(), EditorError> {
        if !self.buffer.is_set() {
            return Ok(());
        }

        debug!("[LayerEditor] cancel at {}", self.index);
        sink.delete_layer(self.index)?;
        self.buffer = EditBuffer::Unset;
        Ok(())
    }
}
