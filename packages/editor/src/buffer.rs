//! Component-local text state for one transition layer row

use serde::{Deserialize, Serialize};

/// The text a layer row currently shows.
///
/// Exactly one variant holds at any time. `Intermediate` is text that
/// may not have been committed yet, `Invalid` is text that failed a
/// parse (kept verbatim so the user can correct it), and `Unset` is the
/// cleared state after a cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EditBuffer {
    Intermediate { value: String },
    Invalid { value: String },
    Unset,
}

impl EditBuffer {
    /// Text to display: the buffer's content, or empty when unset
    pub fn text(&self) -> &str {
        match self {
            EditBuffer::Intermediate { value } | EditBuffer::Invalid { value } => value,
            EditBuffer::Unset => "",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, EditBuffer::Unset)
    }

    /// Whether the row should render in its error style
    pub fn is_invalid(&self) -> bool {
        matches!(self, EditBuffer::Invalid { .. })
    }
}
