//! backline-editor: headless rich-text editor logic.
//!
//! The WYSIWYG widget without a DOM. This crate provides:
//! - `TextBuffer` trait and `EditorRope` (ropey-backed storage)
//! - `UndoableBuffer` - undo/redo over any buffer
//! - `EditorDocument` trait and `RichTextEditor` - a document whose
//!   content *is* a markup-dialect string
//! - `EditorAction` + `execute_action` - semantic edit and formatting
//!   operations (bold / size / color applied to the selection)
//! - floating-toolbar geometry and the platform traits a host implements

pub mod actions;
pub mod document;
pub mod execute;
pub mod platform;
pub mod text;
pub mod toolbar;
pub mod types;
pub mod undo;

pub use actions::{EditorAction, Range};
pub use document::{ChangeListener, EditorDocument, RichTextEditor};
pub use execute::execute_action;
pub use platform::{LayoutObserver, SelectionPlatform, Subscription};
pub use smol_str::SmolStr;
pub use text::{EditorRope, TextBuffer};
pub use toolbar::{Point, Rect, ToolbarState};
pub use types::{CursorState, EditNotice, Selection};
pub use undo::{UndoManager, UndoableBuffer};
