//! Host editor interface for linenav
//!
//! The search core never owns or mutates buffer content. It reads line
//! snapshots from the host editor and issues selection commands back to it
//! through the `EditorHost` trait defined here. Panel rendering, key
//! bindings, and focus management all live on the host side of this seam.

use crate::error::Result;

// ─────────────────────────────────────────────────────────────────────────────
// Buffer Snapshot Types
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the host buffer, addressed by a zero-based index.
///
/// Lines are immutable snapshots taken at search time; a buffer change on
/// the host side produces a fresh snapshot, never an edit of an old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Zero-based row index in the buffer
    pub index: usize,
    /// Text content of the row (without the trailing newline)
    pub text: String,
}

impl Line {
    /// Create a line snapshot.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// A buffer region expressed in (row, character column) coordinates.
///
/// `start_col` is inclusive, `end_col` exclusive. Columns count characters,
/// not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// Zero-based row index
    pub line: usize,
    /// Inclusive start column
    pub start_col: usize,
    /// Exclusive end column
    pub end_col: usize,
}

impl LineRange {
    /// Create a range covering an entire line of `len` characters.
    pub fn whole_line(line: usize, len: usize) -> Self {
        Self {
            line,
            start_col: 0,
            end_col: len,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Host Editor Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The collaborator contract a host editor implements to embed the search
/// core.
///
/// Buffer reads and selection commands are expected to be fast,
/// non-suspending calls; the core imposes no backpressure beyond processing
/// one event at a time.
pub trait EditorHost {
    /// Opaque handle identifying one host editor/buffer.
    type EditorId: Clone + PartialEq;

    /// The editor the user is currently working in, if any.
    fn active_editor(&self) -> Option<Self::EditorId>;

    /// Snapshot of the editor's buffer as indexed lines.
    ///
    /// # Errors
    ///
    /// Returns an error when the handle no longer refers to a readable
    /// buffer; the core treats this as "no active target" and hides.
    fn lines(&self, editor: &Self::EditorId) -> Result<Vec<Line>>;

    /// Replace the editor's selection with the given ranges.
    ///
    /// The core issues exactly one call per selection change; select-all
    /// arrives as a single call carrying every range.
    fn set_selection(&mut self, editor: &Self::EditorId, ranges: &[LineRange]) -> Result<()>;

    /// Move UI focus to the search input.
    fn focus_search_input(&mut self);

    /// Move UI focus back to the editor.
    fn focus_editor(&mut self, editor: &Self::EditorId);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
