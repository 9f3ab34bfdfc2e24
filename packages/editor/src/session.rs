//! # Edit Session
//!
//! One client's editing state for a transition property: the owned
//! multi-layer value, its undo history, and the configured defaults.
//!
//! The session is the commit sink for layer editors. Commits arrive as
//! batched updates: an ephemeral publish only moves the preview overlay
//! (validated, but discardable and invisible to undo), while a final
//! publish goes through the undo stack and bumps the version.

use crate::commit::{CommitOptions, CommitSink};
use crate::errors::EditorError;
use crate::layer_editor::LayerEditor;
use crate::mutations::Mutation;
use crate::style::TransitionStyle;
use crate::undo_stack::UndoStack;
use motif_css::{serialize_layer, TransitionDefaults, TransitionLayer};
use tracing::debug;

/// A collected set of mutations published as one transaction
#[derive(Debug, Default)]
pub struct BatchUpdate {
    mutations: Vec<Mutation>,
    description: Option<String>,
}

impl BatchUpdate {
    pub fn replace_layers(
        &mut self,
        index: usize,
        count: usize,
        layers: Vec<TransitionLayer>,
    ) -> &mut Self {
        self.mutations.push(Mutation::ReplaceLayers {
            index,
            count,
            layers,
        });
        self
    }

    pub fn insert_layer(&mut self, index: usize, layer: TransitionLayer) -> &mut Self {
        self.mutations.push(Mutation::InsertLayer { index, layer });
        self
    }

    pub fn delete_layer(&mut self, index: usize) -> &mut Self {
        self.mutations.push(Mutation::DeleteLayer { index });
        self
    }

    /// Label the undo entry this batch will create
    pub fn describe(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }
}

/// Editing session over one transition property
pub struct EditSession {
    style: TransitionStyle,
    history: UndoStack,
    defaults: TransitionDefaults,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            style: TransitionStyle::new(),
            history: UndoStack::new(),
            defaults: TransitionDefaults::default(),
        }
    }

    /// Start from an existing `transition` declaration value
    pub fn from_css(source: &str) -> Result<Self, EditorError> {
        Ok(Self {
            style: TransitionStyle::from_css(source)?,
            history: UndoStack::new(),
            defaults: TransitionDefaults::default(),
        })
    }

    pub fn with_defaults(mut self, defaults: TransitionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn style(&self) -> &TransitionStyle {
        &self.style
    }

    pub fn defaults(&self) -> &TransitionDefaults {
        &self.defaults
    }

    /// Start a transaction against this session
    pub fn create_batch_update(&self) -> BatchUpdate {
        BatchUpdate::default()
    }

    /// Publish a batch.
    ///
    /// Ephemeral publishes validate against committed state and replace
    /// the preview overlay; final publishes clear the preview, apply
    /// through the undo stack, and bump the version.
    pub fn publish(&mut self, batch: BatchUpdate, options: CommitOptions) -> Result<(), EditorError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut working = self.style.committed_layers().to_vec();

        if options.is_ephemeral {
            for mutation in &batch.mutations {
                mutation.apply(&mut working)?;
            }
            debug!(
                "[EditSession] preview update ({} mutation(s))",
                batch.mutations.len()
            );
            self.style.set_preview(working);
        } else {
            self.history
                .apply_batch(batch.mutations, &mut working, batch.description)?;
            self.style.commit(working);
            debug!(
                "[EditSession] committed version {} ({:?})",
                self.style.version(),
                self.history.undo_description()
            );
        }

        Ok(())
    }

    /// Drop any preview overlay without touching committed state
    pub fn discard_preview(&mut self) {
        self.style.clear_preview();
    }

    /// Append a new layer resolved entirely from the configured defaults
    pub fn add_layer(&mut self) -> Result<(), EditorError> {
        let layer = self.defaults.to_layer();
        let index = self.style.committed_layers().len();

        let mut batch = self.create_batch_update();
        batch.insert_layer(index, layer).describe("Add transition layer");
        self.publish(batch, CommitOptions::committed())
    }

    pub fn undo(&mut self) -> Result<bool, EditorError> {
        let mut working = self.style.committed_layers().to_vec();
        let undone = self.history.undo(&mut working)?;
        if undone {
            self.style.commit(working);
        }
        Ok(undone)
    }

    pub fn redo(&mut self) -> Result<bool, EditorError> {
        let mut working = self.style.committed_layers().to_vec();
        let redone = self.history.redo(&mut working)?;
        if redone {
            self.style.commit(working);
        }
        Ok(redone)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Canonical text of the visible layer at `index`
    pub fn layer_text(&self, index: usize) -> Option<String> {
        self.style.layers().get(index).map(serialize_layer)
    }

    /// Build a row editor for the layer at `index`, its buffer seeded
    /// from the layer's current text
    pub fn editor_for(&self, index: usize) -> Option<LayerEditor> {
        self.style.layers().get(index).map(|layer| {
            LayerEditor::for_layer(index, layer).with_defaults(self.defaults.clone())
        })
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitSink for EditSession {
    fn edit_layer(
        &mut self,
        index: usize,
        layers: Vec<TransitionLayer>,
        options: CommitOptions,
    ) -> Result<(), EditorError> {
        let mut batch = self.create_batch_update();
        batch
            .replace_layers(index, 1, layers)
            .describe("Edit transition layer");
        self.publish(batch, options)
    }

    fn delete_layer(&mut self, index: usize) -> Result<(), EditorError> {
        // Deletes are never previews; they always publish final.
        let mut batch = self.create_batch_update();
        batch.delete_layer(index).describe("Delete transition layer");
        self.publish(batch, CommitOptions::committed())
    }
}
