//! Editor documents: the trait and the concrete rich-text editor.
//!
//! `EditorDocument` abstracts storage strategy so the editing logic in
//! `crate::execute` stays generic; `RichTextEditor` is the field-based
//! implementation whose content is a markup-dialect string.

use std::ops::Range;

use smol_str::SmolStr;

use crate::text::{EditorRope, TextBuffer};
use crate::toolbar::ToolbarState;
use crate::types::{CursorState, EditNotice, Selection};
use crate::undo::{UndoManager, UndoableBuffer};

/// Called with the new document value after every mutation - the
/// `onChange` contract of the original widget.
pub type ChangeListener = Box<dyn FnMut(&str)>;

/// Core trait for editor documents.
pub trait EditorDocument {
    /// Buffer type used for storage and undo.
    type Buffer: TextBuffer + UndoManager;

    // === Required: buffer access ===

    fn buffer(&self) -> &Self::Buffer;
    fn buffer_mut(&mut self) -> &mut Self::Buffer;

    // === Required: cursor/selection state ===

    fn cursor(&self) -> CursorState;
    fn set_cursor(&mut self, cursor: CursorState);
    fn selection(&self) -> Option<Selection>;
    fn set_selection(&mut self, selection: Option<Selection>);

    // === Provided: convenience accessors ===

    fn cursor_offset(&self) -> usize {
        self.cursor().offset
    }

    fn set_cursor_offset(&mut self, offset: usize) {
        self.set_cursor(CursorState::new(offset));
    }

    fn content_string(&self) -> String {
        self.buffer().to_string()
    }

    fn len_chars(&self) -> usize {
        self.buffer().len_chars()
    }

    fn is_empty(&self) -> bool {
        self.buffer().len_chars() == 0
    }

    fn slice(&self, range: Range<usize>) -> Option<SmolStr> {
        self.buffer().slice(range)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer().char_at(offset)
    }

    fn selected_text(&self) -> Option<SmolStr> {
        self.selection()
            .and_then(|sel| self.buffer().slice(sel.to_range()))
    }

    // === Provided: text operations ===

    /// Insert text at a char offset; cursor lands after the insertion.
    fn insert(&mut self, offset: usize, text: &str) -> EditNotice {
        self.buffer_mut().insert(offset, text);
        let inserted_len = text.chars().count();
        self.set_cursor_offset(offset + inserted_len);
        EditNotice {
            char_pos: offset,
            inserted_len,
            deleted_len: 0,
        }
    }

    /// Delete a char range; cursor lands at the deletion point.
    fn delete(&mut self, range: Range<usize>) -> EditNotice {
        let deleted_len = range.end - range.start;
        self.buffer_mut().delete(range.clone());
        self.set_cursor_offset(range.start);
        EditNotice {
            char_pos: range.start,
            inserted_len: 0,
            deleted_len,
        }
    }

    /// Replace a char range; cursor lands after the new text.
    fn replace(&mut self, range: Range<usize>, text: &str) -> EditNotice {
        let deleted_len = range.end - range.start;
        self.buffer_mut().replace(range.clone(), text);
        let inserted_len = text.chars().count();
        self.set_cursor_offset(range.start + inserted_len);
        EditNotice {
            char_pos: range.start,
            inserted_len,
            deleted_len,
        }
    }

    /// Delete the current selection, if non-collapsed.
    fn delete_selection(&mut self) -> Option<EditNotice> {
        let sel = self.selection()?;
        self.set_selection(None);
        if sel.is_collapsed() {
            return None;
        }
        Some(self.delete(sel.to_range()))
    }

    // === Provided: undo/redo ===

    fn undo(&mut self) -> bool {
        self.buffer_mut().undo()
    }

    fn redo(&mut self) -> bool {
        self.buffer_mut().redo()
    }

    fn can_undo(&self) -> bool {
        self.buffer().can_undo()
    }

    fn can_redo(&self) -> bool {
        self.buffer().can_redo()
    }
}

/// The rich-text editor: markup-string content, undo, a floating toolbar,
/// and an optional change listener.
pub struct RichTextEditor {
    buffer: UndoableBuffer<EditorRope>,
    cursor: CursorState,
    selection: Option<Selection>,
    placeholder: String,
    toolbar: ToolbarState,
    listener: Option<ChangeListener>,
}

impl Default for RichTextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RichTextEditor {
    pub fn new() -> Self {
        Self::from_markup("")
    }

    /// Create an editor holding the given markup value.
    pub fn from_markup(value: &str) -> Self {
        Self {
            buffer: UndoableBuffer::new(EditorRope::from_str(value), 100),
            cursor: CursorState::default(),
            selection: None,
            placeholder: String::new(),
            toolbar: ToolbarState::hidden(),
            listener: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Register the change listener fired after every mutation.
    pub fn set_change_listener(&mut self, listener: ChangeListener) {
        self.listener = Some(listener);
    }

    /// Current markup value.
    pub fn value(&self) -> String {
        self.content_string()
    }

    /// Replace the whole value (external form update). Clears selection;
    /// history survives so the update is undoable.
    pub fn set_value(&mut self, value: &str) {
        let len = self.len_chars();
        self.replace(0..len, value);
        self.set_selection(None);
        self.notify();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Hosts render the placeholder only while the document is empty.
    pub fn placeholder_visible(&self) -> bool {
        self.is_empty() && !self.placeholder.is_empty()
    }

    pub fn toolbar(&self) -> ToolbarState {
        self.toolbar
    }

    pub fn set_toolbar(&mut self, toolbar: ToolbarState) {
        self.toolbar = toolbar;
    }

    /// Recompute the floating toolbar from the current selection.
    pub fn update_toolbar(&mut self, platform: &impl crate::platform::SelectionPlatform) {
        self.toolbar = platform.toolbar_for(self.selection());
    }

    /// Route a pointer-down: a click outside both the editor and the
    /// toolbar hides the toolbar.
    pub fn pointer_down(
        &mut self,
        point: crate::toolbar::Point,
        platform: &impl crate::platform::SelectionPlatform,
    ) {
        self.toolbar = self.toolbar.dismiss_on_click(point, platform.editor_rect());
    }

    /// Apply an action and fire the change listener if content changed.
    pub fn apply(&mut self, action: &crate::actions::EditorAction) -> bool {
        let before = self.content_string();
        let handled = crate::execute::execute_action(self, action);
        if handled && self.content_string() != before {
            self.notify();
        }
        handled
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            let value = self.buffer.to_string();
            listener(&value);
        }
    }
}

impl EditorDocument for RichTextEditor {
    type Buffer = UndoableBuffer<EditorRope>;

    fn buffer(&self) -> &Self::Buffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut Self::Buffer {
        &mut self.buffer
    }

    fn cursor(&self) -> CursorState {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: CursorState) {
        self.cursor = cursor;
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }
}
