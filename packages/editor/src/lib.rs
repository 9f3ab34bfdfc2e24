//! # Motif Editor
//!
//! Editing core for the transition panel.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ motif-css: text ⇄ transition layers         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: per-layer reconciliation            │
//! │  - Edit buffer state machine (one per row)  │
//! │  - Structured field edits + free-text edits │
//! │  - Ephemeral previews vs final commits      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: committed layers + preview + undo    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The store is source of truth**: a row's buffer is a local,
//!    possibly-invalid view; layers change only through the commit sink
//! 2. **Invalid text never propagates**: a failed parse flips the
//!    buffer to its error state and stops there
//! 3. **Ephemeral means discardable**: previews shadow committed state
//!    and never enter the undo stack
//!
//! ## Usage
//!
//! ```rust,ignore
//! use motif_editor::{CommitOptions, EditSession, LayerEditor};
//!
//! let mut session = EditSession::from_css("opacity 200ms ease")?;
//!
//! // Free-text editing of row 0
//! let mut editor = session.editor_for(0).unwrap();
//! editor.on_text_edit("opacity 300ms ease-out");
//! editor.on_commit_request(CommitOptions::committed(), &mut session)?;
//!
//! assert_eq!(session.style().to_css(), "opacity 300ms ease-out");
//! session.undo()?;
//! ```

mod buffer;
mod commit;
mod errors;
mod layer_editor;
mod mutations;
mod session;
mod style;
mod undo_stack;

pub use buffer::EditBuffer;
pub use commit::{CommitOptions, CommitSink};
pub use errors::EditorError;
pub use layer_editor::LayerEditor;
pub use mutations::{Mutation, MutationError};
pub use session::{BatchUpdate, EditSession};
pub use style::TransitionStyle;
pub use undo_stack::{MutationBatch, UndoStack};

// Re-export common types for convenience
pub use motif_css::{TransitionDefaults, TransitionLayer, TransitionProperties};
