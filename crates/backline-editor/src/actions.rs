//! Editor actions: semantic operations on the document.
//!
//! Actions are decoupled from how they were triggered (keyboard, toolbar
//! button, programmatic input); `crate::execute` applies them.

use backline_markup::{Color, Size};

/// A range in the document, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize so start <= end.
    pub fn normalize(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(r: Range) -> Self {
        r.start..r.end
    }
}

/// All editor operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    // === Text editing ===
    /// Insert text at the range, replacing any selected content.
    Insert { text: String, range: Range },

    /// Insert a line break.
    InsertLineBreak { range: Range },

    /// Delete backward (Backspace).
    DeleteBackward { range: Range },

    /// Delete forward (Delete key).
    DeleteForward { range: Range },

    // === History ===
    Undo,
    Redo,

    // === Formatting (toolbar; require a non-collapsed selection) ===
    /// Toggle bold on the selection.
    Bold,

    /// Apply a size level to the selection.
    SetSize(Size),

    /// Apply a foreground color to the selection.
    SetColor(Color),

    // === Selection ===
    SelectAll,
    MoveCursor { offset: usize },
    ExtendSelection { offset: usize },
}

impl EditorAction {
    /// Whether this is one of the selection-formatting toolbar actions.
    pub fn is_formatting(&self) -> bool {
        matches!(self, Self::Bold | Self::SetSize(_) | Self::SetColor(_))
    }
}
