//! Floating toolbar geometry.
//!
//! The toolbar appears near a non-collapsed selection, clamped so it never
//! overflows the editor's bounding box, with a narrower layout under the
//! mobile viewport threshold. All math is pure; the host supplies rects.

/// A point in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Toolbar dimensions.
pub const TOOLBAR_WIDTH: f32 = 320.0;
pub const TOOLBAR_WIDTH_MOBILE: f32 = 240.0;
pub const TOOLBAR_HEIGHT: f32 = 40.0;

/// Gap between the selection and the toolbar.
pub const SELECTION_GAP: f32 = 8.0;

/// Viewports narrower than this get the mobile toolbar.
pub const MOBILE_VIEWPORT_THRESHOLD: f32 = 640.0;

/// Where (and whether) the floating toolbar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolbarState {
    pub visible: bool,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl ToolbarState {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Position the toolbar for a selection.
    ///
    /// Centered horizontally over the selection and placed just above it;
    /// if that would leave the editor box, it flips below the selection.
    /// Both axes clamp to the editor box.
    pub fn for_selection(selection: Rect, editor: Rect, viewport_width: f32) -> Self {
        let width = if viewport_width < MOBILE_VIEWPORT_THRESHOLD {
            TOOLBAR_WIDTH_MOBILE
        } else {
            TOOLBAR_WIDTH
        };

        let centered = selection.x + selection.width / 2.0 - width / 2.0;
        let max_x = (editor.right() - width).max(editor.x);
        let x = centered.clamp(editor.x, max_x);

        let above = selection.y - TOOLBAR_HEIGHT - SELECTION_GAP;
        let y = if above < editor.y {
            // No room above - flip below the selection.
            (selection.bottom() + SELECTION_GAP).min(editor.bottom() - TOOLBAR_HEIGHT)
        } else {
            above
        };

        Self {
            visible: true,
            x,
            y: y.max(editor.y),
            width,
        }
    }

    /// The rect the visible toolbar occupies.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, TOOLBAR_HEIGHT)
    }

    /// Apply an outside click: hide unless the click landed on the editor
    /// or on the toolbar itself.
    pub fn dismiss_on_click(self, point: Point, editor: Rect) -> Self {
        if !self.visible {
            return self;
        }
        if editor.contains(point) || self.rect().contains(point) {
            self
        } else {
            Self::hidden()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> Rect {
        Rect::new(100.0, 100.0, 600.0, 400.0)
    }

    #[test]
    fn test_toolbar_above_selection() {
        let selection = Rect::new(300.0, 300.0, 80.0, 20.0);
        let state = ToolbarState::for_selection(selection, editor(), 1024.0);
        assert!(state.visible);
        assert_eq!(state.width, TOOLBAR_WIDTH);
        assert_eq!(state.y, 300.0 - TOOLBAR_HEIGHT - SELECTION_GAP);
        // Centered over the selection.
        assert_eq!(state.x, 300.0 + 40.0 - TOOLBAR_WIDTH / 2.0);
    }

    #[test]
    fn test_toolbar_flips_below_when_no_room() {
        let selection = Rect::new(300.0, 110.0, 80.0, 20.0);
        let state = ToolbarState::for_selection(selection, editor(), 1024.0);
        assert_eq!(state.y, selection.bottom() + SELECTION_GAP);
    }

    #[test]
    fn test_toolbar_clamps_to_editor_left_edge() {
        let selection = Rect::new(110.0, 300.0, 20.0, 20.0);
        let state = ToolbarState::for_selection(selection, editor(), 1024.0);
        assert_eq!(state.x, 100.0);
    }

    #[test]
    fn test_toolbar_clamps_to_editor_right_edge() {
        let selection = Rect::new(670.0, 300.0, 20.0, 20.0);
        let state = ToolbarState::for_selection(selection, editor(), 1024.0);
        assert_eq!(state.x, editor().right() - TOOLBAR_WIDTH);
    }

    #[test]
    fn test_mobile_width() {
        let selection = Rect::new(300.0, 300.0, 80.0, 20.0);
        let state = ToolbarState::for_selection(selection, editor(), 480.0);
        assert_eq!(state.width, TOOLBAR_WIDTH_MOBILE);
    }

    #[test]
    fn test_dismiss_outside_both_rects() {
        let selection = Rect::new(300.0, 300.0, 80.0, 20.0);
        let state = ToolbarState::for_selection(selection, editor(), 1024.0);

        // Click inside the editor keeps it.
        let kept = state.dismiss_on_click(Point::new(150.0, 150.0), editor());
        assert!(kept.visible);

        // Click on the toolbar keeps it.
        let on_toolbar = Point::new(state.x + 1.0, state.y + 1.0);
        assert!(state.dismiss_on_click(on_toolbar, editor()).visible);

        // Click outside both hides it.
        let hidden = state.dismiss_on_click(Point::new(10.0, 10.0), editor());
        assert!(!hidden.visible);
    }
}
