//! Platform abstraction traits.
//!
//! The editor logic never touches a real UI. Hosts (a browser bridge, a
//! native shell, tests) implement these traits to supply geometry and
//! layout events.

use crate::toolbar::{Rect, ToolbarState};
use crate::types::Selection;

/// Supplies selection geometry for toolbar positioning.
pub trait SelectionPlatform {
    /// Bounding rect of the given selection, if it is currently laid out.
    fn selection_rect(&self, selection: Selection) -> Option<Rect>;

    /// Bounding rect of the editor surface.
    fn editor_rect(&self) -> Rect;

    /// Current viewport width (drives the mobile toolbar layout).
    fn viewport_width(&self) -> f32;

    /// Compute the toolbar state for a selection, hidden when the
    /// selection is collapsed or not laid out.
    fn toolbar_for(&self, selection: Option<Selection>) -> ToolbarState {
        let Some(sel) = selection.filter(|sel| !sel.is_collapsed()) else {
            return ToolbarState::hidden();
        };
        match self.selection_rect(sel) {
            Some(rect) => {
                ToolbarState::for_selection(rect, self.editor_rect(), self.viewport_width())
            }
            None => ToolbarState::hidden(),
        }
    }
}

/// Handle for a registered layout callback; dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to tear down.
    pub fn noop() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Viewport/layout observation, injected instead of queried ambiently.
///
/// Replaces direct header-element queries and window event registration:
/// hosts push header-height and scroll changes through callbacks, and the
/// returned `Subscription` tears the registration down on drop.
pub trait LayoutObserver {
    /// Observe the fixed header's height (content offset math).
    fn on_header_height_change(&mut self, callback: Box<dyn FnMut(f32) + Send>) -> Subscription;

    /// Observe vertical scroll position.
    fn on_scroll(&mut self, callback: Box<dyn FnMut(f32) + Send>) -> Subscription;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbar::TOOLBAR_WIDTH;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FixedPlatform;

    impl SelectionPlatform for FixedPlatform {
        fn selection_rect(&self, _selection: Selection) -> Option<Rect> {
            Some(Rect::new(300.0, 300.0, 80.0, 20.0))
        }

        fn editor_rect(&self) -> Rect {
            Rect::new(0.0, 0.0, 800.0, 600.0)
        }

        fn viewport_width(&self) -> f32 {
            1024.0
        }
    }

    #[test]
    fn test_toolbar_for_selection() {
        let platform = FixedPlatform;
        let state = platform.toolbar_for(Some(Selection::new(0, 5)));
        assert!(state.visible);
        assert_eq!(state.width, TOOLBAR_WIDTH);
    }

    #[test]
    fn test_toolbar_hidden_for_collapsed_selection() {
        let platform = FixedPlatform;
        assert!(!platform.toolbar_for(Some(Selection::collapsed(3))).visible);
        assert!(!platform.toolbar_for(None).visible);
    }

    #[test]
    fn test_subscription_cancels_on_drop() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let sub = Subscription::new(move || flag.store(true, Ordering::SeqCst));
        assert!(!cancelled.load(Ordering::SeqCst));
        drop(sub);
        assert!(cancelled.load(Ordering::SeqCst));
    }
}
