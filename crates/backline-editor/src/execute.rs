//! Action execution.
//!
//! `execute_action` is the central dispatch for all editor operations,
//! generic over `EditorDocument`. Formatting works the way the widget's
//! toolbar did: wrap the selected range in dialect markers, re-derive the
//! canonical markup by round-tripping the whole document through the HTML
//! form, then re-select the original text so commands can be chained.

use std::ops::Range as StdRange;

use backline_markup::{Color, Size};

use crate::actions::{EditorAction, Range};
use crate::document::EditorDocument;
use crate::types::Selection;

/// Longest marker we ever look back for (`<color:..>` with a long literal).
const MARKER_SCAN_WINDOW: usize = 64;

/// Execute an editor action on a document.
///
/// Returns true if the action was handled and the document (or its
/// cursor/selection state) changed.
pub fn execute_action<D: EditorDocument>(doc: &mut D, action: &EditorAction) -> bool {
    match action {
        EditorAction::Insert { text, range } => execute_insert(doc, text, *range),
        EditorAction::InsertLineBreak { range } => execute_insert(doc, "\n", *range),
        EditorAction::DeleteBackward { range } => execute_delete_backward(doc, *range),
        EditorAction::DeleteForward { range } => execute_delete_forward(doc, *range),
        EditorAction::Undo => execute_undo(doc),
        EditorAction::Redo => execute_redo(doc),
        EditorAction::Bold => format_selection(doc, FormatMarkers::bold()),
        EditorAction::SetSize(size) => format_selection(doc, FormatMarkers::size(*size)),
        EditorAction::SetColor(color) => format_selection(doc, FormatMarkers::color(color)),
        EditorAction::SelectAll => execute_select_all(doc),
        EditorAction::MoveCursor { offset } => execute_move_cursor(doc, *offset),
        EditorAction::ExtendSelection { offset } => execute_extend_selection(doc, *offset),
    }
}

fn execute_insert<D: EditorDocument>(doc: &mut D, text: &str, range: Range) -> bool {
    let range = range.normalize();
    if range.is_caret() {
        doc.insert(range.start, text);
    } else {
        doc.replace(range.start..range.end, text);
    }
    doc.set_selection(None);
    true
}

fn execute_delete_backward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.normalize();

    if !range.is_caret() {
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    if range.start == 0 {
        return false;
    }

    doc.delete(range.start - 1..range.start);
    doc.set_selection(None);
    true
}

fn execute_delete_forward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.normalize();

    if !range.is_caret() {
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    if range.start >= doc.len_chars() {
        return false;
    }

    doc.delete(range.start..range.start + 1);
    doc.set_selection(None);
    true
}

fn execute_undo<D: EditorDocument>(doc: &mut D) -> bool {
    if doc.undo() {
        let max = doc.len_chars();
        if doc.cursor_offset() > max {
            doc.set_cursor_offset(max);
        }
        doc.set_selection(None);
        true
    } else {
        false
    }
}

fn execute_redo<D: EditorDocument>(doc: &mut D) -> bool {
    if doc.redo() {
        let max = doc.len_chars();
        if doc.cursor_offset() > max {
            doc.set_cursor_offset(max);
        }
        doc.set_selection(None);
        true
    } else {
        false
    }
}

fn execute_select_all<D: EditorDocument>(doc: &mut D) -> bool {
    let len = doc.len_chars();
    doc.set_selection(Some(Selection::new(0, len)));
    doc.set_cursor_offset(len);
    true
}

fn execute_move_cursor<D: EditorDocument>(doc: &mut D, offset: usize) -> bool {
    doc.set_cursor_offset(offset.min(doc.len_chars()));
    doc.set_selection(None);
    true
}

fn execute_extend_selection<D: EditorDocument>(doc: &mut D, offset: usize) -> bool {
    let offset = offset.min(doc.len_chars());
    let anchor = doc
        .selection()
        .map(|s| s.anchor)
        .unwrap_or_else(|| doc.cursor_offset());
    doc.set_selection(Some(Selection::new(anchor, offset)));
    doc.set_cursor_offset(offset);
    true
}

// === Formatting ===

/// The marker pair a formatting action wraps the selection in.
struct FormatMarkers {
    open: String,
    close: String,
    /// Re-applying the same markers removes them (bold behaves this way).
    toggles: bool,
    /// Marker family tag (`size`/`color`) whose existing wrapper gets its
    /// argument replaced instead of double-wrapping.
    replaces_tag: Option<&'static str>,
}

impl FormatMarkers {
    fn bold() -> Self {
        Self {
            open: "**".into(),
            close: "**".into(),
            toggles: true,
            replaces_tag: None,
        }
    }

    fn size(size: Size) -> Self {
        Self {
            open: format!("<size:{}>", size.keyword()),
            close: "</size>".into(),
            toggles: false,
            replaces_tag: Some("size"),
        }
    }

    fn color(color: &Color) -> Self {
        Self {
            open: format!("<color:{color}>"),
            close: "</color>".into(),
            toggles: false,
            replaces_tag: Some("color"),
        }
    }
}

/// Apply a marker pair to the current selection.
///
/// The execution environment may hand us an unusable selection (collapsed,
/// or cleared between the pointer-up and the toolbar click); that is logged
/// and ignored rather than surfaced.
fn format_selection<D: EditorDocument>(doc: &mut D, markers: FormatMarkers) -> bool {
    let Some(sel) = doc.selection().filter(|sel| !sel.is_collapsed()) else {
        tracing::warn!("formatting command ignored: no usable selection");
        return false;
    };

    let (start, end) = (sel.start(), sel.end());
    let open_len = markers.open.chars().count();
    let close_len = markers.close.chars().count();

    // Toggle off: selection already wrapped in exactly these markers.
    if markers.toggles && is_wrapped(doc, start, end, &markers.open, &markers.close) {
        doc.delete(end..end + close_len);
        doc.delete(start - open_len..start);
        finish_format(doc, Selection::new(start - open_len, end - open_len));
        return true;
    }

    // Replace: selection already wrapped in a marker of the same family.
    if let Some(tag) = markers.replaces_tag {
        if let Some(existing) = existing_open_marker(doc, start, tag) {
            let closes_after = doc
                .slice(end..end + close_len)
                .is_some_and(|after| after == markers.close.as_str());
            if closes_after {
                let old_len = existing.end - existing.start;
                doc.replace(existing, &markers.open);
                let shift = open_len as isize - old_len as isize;
                let new_sel = Selection::new(
                    (start as isize + shift) as usize,
                    (end as isize + shift) as usize,
                );
                finish_format(doc, new_sel);
                return true;
            }
        }
    }

    // Wrap. End marker first so the start offset stays valid.
    doc.insert(end, &markers.close);
    doc.insert(start, &markers.open);
    finish_format(doc, Selection::new(start + open_len, end + open_len));
    true
}

/// Whether `start..end` is directly wrapped in the exact marker pair.
fn is_wrapped<D: EditorDocument>(
    doc: &D,
    start: usize,
    end: usize,
    open: &str,
    close: &str,
) -> bool {
    let open_len = open.chars().count();
    let close_len = close.chars().count();
    if start < open_len {
        return false;
    }
    let has_open = doc
        .slice(start - open_len..start)
        .is_some_and(|s| s == open);
    let has_close = doc.slice(end..end + close_len).is_some_and(|s| s == close);
    has_open && has_close
}

/// Find an opening marker `<{tag}:..>` ending exactly at `start`.
///
/// Returns its char range in the document.
fn existing_open_marker<D: EditorDocument>(
    doc: &D,
    start: usize,
    tag: &str,
) -> Option<StdRange<usize>> {
    if start == 0 || doc.char_at(start - 1) != Some('>') {
        return None;
    }
    let scan_start = start.saturating_sub(MARKER_SCAN_WINDOW);
    let window = doc.slice(scan_start..start)?;
    let open_prefix = format!("<{tag}:");
    let at = window.rfind(&open_prefix)?;

    // Everything between the prefix and the final '>' must be a plain
    // argument: no nested angle brackets, no newline.
    let arg = &window[at + open_prefix.len()..window.len() - 1];
    if arg.contains('<') || arg.contains('>') || arg.contains('\n') {
        return None;
    }

    let marker_start = scan_start + window[..at].chars().count();
    Some(marker_start..start)
}

/// Canonicalize the document through an HTML round trip (the "re-derive
/// the markup from the resulting HTML" step), then restore the selection
/// so formatting can be chained.
fn finish_format<D: EditorDocument>(doc: &mut D, new_sel: Selection) {
    let content = doc.content_string();
    let canonical = backline_markup::html_to_markup(&backline_markup::markup_to_html(&content));
    if canonical != content {
        let len = doc.len_chars();
        doc.replace(0..len, &canonical);
    }

    let len = doc.len_chars();
    let sel = Selection::new(new_sel.anchor.min(len), new_sel.head.min(len));
    doc.set_selection(Some(sel));
    doc.set_cursor_offset(sel.end());
}
