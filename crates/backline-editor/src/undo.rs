//! Undo/redo over a text buffer.
//!
//! `UndoableBuffer` wraps any `TextBuffer`, records each mutation's inverse,
//! and replays them on demand. History is bounded; the oldest steps fall
//! off first.

use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

use crate::text::TextBuffer;

/// Undo/redo operations, implemented by buffers that track history.
pub trait UndoManager {
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;

    /// Perform undo. Returns true if a step was applied.
    fn undo(&mut self) -> bool;

    /// Perform redo. Returns true if a step was applied.
    fn redo(&mut self) -> bool;

    fn clear_history(&mut self);
}

/// One recorded mutation: enough to invert or replay it.
#[derive(Debug, Clone)]
struct EditStep {
    /// Character position of the edit.
    pos: usize,
    /// Text removed (empty for pure insertions).
    deleted: SmolStr,
    /// Text added (empty for pure deletions).
    inserted: SmolStr,
}

/// A `TextBuffer` wrapper that records edits for undo/redo.
///
/// All mutations must go through the wrapper; direct access via
/// `inner_mut` bypasses history tracking.
pub struct UndoableBuffer<T> {
    buffer: T,
    undo_stack: Vec<EditStep>,
    redo_stack: Vec<EditStep>,
    max_steps: usize,
}

impl<T: Clone> Clone for UndoableBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            undo_stack: self.undo_stack.clone(),
            redo_stack: self.redo_stack.clone(),
            max_steps: self.max_steps,
        }
    }
}

impl<T: TextBuffer + Default> Default for UndoableBuffer<T> {
    fn default() -> Self {
        Self::new(T::default(), 100)
    }
}

impl<T: TextBuffer> UndoableBuffer<T> {
    pub fn new(buffer: T, max_steps: usize) -> Self {
        Self {
            buffer,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_steps,
        }
    }

    pub fn inner(&self) -> &T {
        &self.buffer
    }

    /// Direct mutable access; edits made through this skip undo tracking.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.buffer
    }

    fn record(&mut self, pos: usize, deleted: &str, inserted: &str) {
        self.redo_stack.clear();
        self.undo_stack.push(EditStep {
            pos,
            deleted: deleted.to_smolstr(),
            inserted: inserted.to_smolstr(),
        });
        if self.undo_stack.len() > self.max_steps {
            let excess = self.undo_stack.len() - self.max_steps;
            self.undo_stack.drain(..excess);
        }
    }
}

impl<T: TextBuffer> TextBuffer for UndoableBuffer<T> {
    fn len_bytes(&self) -> usize {
        self.buffer.len_bytes()
    }

    fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        self.record(char_offset, "", text);
        self.buffer.insert(char_offset, text);
    }

    fn delete(&mut self, char_range: Range<usize>) {
        let deleted = self
            .buffer
            .slice(char_range.clone())
            .unwrap_or_default()
            .to_string();
        self.record(char_range.start, &deleted, "");
        self.buffer.delete(char_range);
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        self.buffer.slice(char_range)
    }

    fn char_at(&self, char_offset: usize) -> Option<char> {
        self.buffer.char_at(char_offset)
    }

    fn to_string(&self) -> String {
        self.buffer.to_string()
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.buffer.char_to_byte(char_offset)
    }

    fn byte_to_char(&self, byte_offset: usize) -> usize {
        self.buffer.byte_to_char(byte_offset)
    }
}

impl<T: TextBuffer> UndoManager for UndoableBuffer<T> {
    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn undo(&mut self) -> bool {
        let Some(step) = self.undo_stack.pop() else {
            return false;
        };

        // Invert: remove what was inserted, restore what was deleted.
        let inserted_chars = step.inserted.chars().count();
        if inserted_chars > 0 {
            self.buffer.delete(step.pos..step.pos + inserted_chars);
        }
        if !step.deleted.is_empty() {
            self.buffer.insert(step.pos, &step.deleted);
        }

        self.redo_stack.push(step);
        true
    }

    fn redo(&mut self) -> bool {
        let Some(step) = self.redo_stack.pop() else {
            return false;
        };

        let deleted_chars = step.deleted.chars().count();
        if deleted_chars > 0 {
            self.buffer.delete(step.pos..step.pos + deleted_chars);
        }
        if !step.inserted.is_empty() {
            self.buffer.insert(step.pos, &step.inserted);
        }

        self.undo_stack.push(step);
        true
    }

    fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::EditorRope;

    fn make(content: &str) -> UndoableBuffer<EditorRope> {
        UndoableBuffer::new(EditorRope::from_str(content), 100)
    }

    #[test]
    fn test_insert_undo_redo() {
        let mut buf = make("hello");
        buf.insert(5, " world");
        assert_eq!(buf.to_string(), "hello world");

        assert!(buf.undo());
        assert_eq!(buf.to_string(), "hello");
        assert!(buf.can_redo());

        assert!(buf.redo());
        assert_eq!(buf.to_string(), "hello world");
        assert!(!buf.can_redo());
    }

    #[test]
    fn test_delete_undo() {
        let mut buf = make("hello world");
        buf.delete(5..11);
        assert_eq!(buf.to_string(), "hello");
        assert!(buf.undo());
        assert_eq!(buf.to_string(), "hello world");
    }

    #[test]
    fn test_replace_is_two_steps() {
        let mut buf = make("hello world");
        buf.replace(6..11, "there");
        assert_eq!(buf.to_string(), "hello there");

        assert!(buf.undo());
        assert_eq!(buf.to_string(), "hello ");
        assert!(buf.undo());
        assert_eq!(buf.to_string(), "hello world");
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut buf = make("abc");
        buf.insert(3, "d");
        assert!(buf.undo());
        assert!(buf.can_redo());

        buf.insert(3, "e");
        assert!(!buf.can_redo());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut buf = UndoableBuffer::new(EditorRope::new(), 3);
        buf.insert(0, "a");
        buf.insert(1, "b");
        buf.insert(2, "c");
        buf.insert(3, "d");

        assert!(buf.undo());
        assert!(buf.undo());
        assert!(buf.undo());
        assert!(!buf.undo());
        assert_eq!(buf.to_string(), "a");
    }

    #[test]
    fn test_multibyte_undo() {
        let mut buf = make("héllo");
        buf.insert(5, " wörld");
        assert!(buf.undo());
        assert_eq!(buf.to_string(), "héllo");
    }
}
