//! Text buffer abstraction for the editor's markup string.
//!
//! All offsets are in Unicode scalar values (chars), not bytes, so host
//! UIs never split a multi-byte character.

use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

/// A text buffer supporting efficient editing and offset conversion.
pub trait TextBuffer {
    /// Total length in bytes (UTF-8).
    fn len_bytes(&self) -> usize;

    /// Total length in chars.
    fn len_chars(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Insert text at char offset.
    fn insert(&mut self, char_offset: usize, text: &str);

    /// Delete a char range.
    fn delete(&mut self, char_range: Range<usize>);

    /// Replace a char range with text.
    fn replace(&mut self, char_range: Range<usize>, text: &str) {
        self.delete(char_range.clone());
        self.insert(char_range.start, text);
    }

    /// Get a slice. Returns None if the range is out of bounds.
    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr>;

    /// Character at offset, if in bounds.
    fn char_at(&self, char_offset: usize) -> Option<char>;

    /// The whole buffer as a String.
    fn to_string(&self) -> String;

    /// Convert a char offset to a byte offset.
    fn char_to_byte(&self, char_offset: usize) -> usize;

    /// Convert a byte offset to a char offset.
    fn byte_to_char(&self, byte_offset: usize) -> usize;
}

/// Ropey-backed buffer: O(log n) edits and offset conversions.
#[derive(Clone, Default)]
pub struct EditorRope {
    rope: ropey::Rope,
}

impl EditorRope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            rope: ropey::Rope::from_str(s),
        }
    }

    /// Access the underlying rope for zero-copy iteration.
    pub fn rope(&self) -> &ropey::Rope {
        &self.rope
    }
}

impl TextBuffer for EditorRope {
    fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn insert(&mut self, char_offset: usize, text: &str) {
        self.rope.insert(char_offset, text);
    }

    fn delete(&mut self, char_range: Range<usize>) {
        self.rope.remove(char_range);
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        if char_range.end > self.len_chars() || char_range.start > char_range.end {
            return None;
        }
        Some(self.rope.slice(char_range).to_smolstr())
    }

    fn char_at(&self, char_offset: usize) -> Option<char> {
        if char_offset >= self.len_chars() {
            return None;
        }
        Some(self.rope.char(char_offset))
    }

    fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.rope.char_to_byte(char_offset)
    }

    fn byte_to_char(&self, byte_offset: usize) -> usize {
        self.rope.byte_to_char(byte_offset)
    }
}

impl From<&str> for EditorRope {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for EditorRope {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut rope = EditorRope::from_str("hello world");
        assert_eq!(rope.len_chars(), 11);

        rope.insert(5, ",");
        assert_eq!(rope.to_string(), "hello, world");

        rope.delete(5..6);
        assert_eq!(rope.to_string(), "hello world");

        rope.replace(6..11, "there");
        assert_eq!(rope.to_string(), "hello there");
    }

    #[test]
    fn test_char_at_and_slice() {
        let rope = EditorRope::from_str("hello");
        assert_eq!(rope.char_at(0), Some('h'));
        assert_eq!(rope.char_at(5), None);
        assert_eq!(rope.slice(1..3).as_deref(), Some("el"));
        assert_eq!(rope.slice(0..99), None);
    }

    #[test]
    fn test_offset_conversion_multibyte() {
        // 'é' is two bytes, one char.
        let rope = EditorRope::from_str("héllo");
        assert_eq!(rope.len_chars(), 5);
        assert_eq!(rope.len_bytes(), 6);
        assert_eq!(rope.char_to_byte(2), 3);
        assert_eq!(rope.byte_to_char(3), 2);
    }
}
