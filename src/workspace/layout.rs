//! Resizable chrome regions and the pointer-driven drag state machines.
//!
//! The view layer forwards pointer events; everything that can be decided
//! without a UI runtime lives here so it can be unit tested.

/// Inclusive pixel bounds for a resizable region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const DEFAULT_PANEL_HEIGHT: f64 = 192.0;
pub const DEFAULT_SIDEBAR_WIDTH: f64 = 256.0;

const PANEL_MIN_HEIGHT: f64 = 96.0;
const SIDEBAR_MIN_WIDTH: f64 = 160.0;

/// Vertical room reserved for the editor above the panel.
const PANEL_RESERVED: f64 = 160.0;
/// Horizontal room reserved for the editor beside the sidebar.
const SIDEBAR_RESERVED: f64 = 320.0;

/// Below this viewport width the sidebar column collapses and the drawer
/// variant takes over.
pub const NARROW_VIEWPORT_WIDTH: f64 = 768.0;

/// Bounds for the bottom panel height at the given viewport height.
pub fn panel_bounds(viewport_height: f64) -> Bounds {
    Bounds {
        min: PANEL_MIN_HEIGHT,
        max: (viewport_height - PANEL_RESERVED).max(PANEL_MIN_HEIGHT),
    }
}

/// Bounds for the sidebar width at the given viewport width.
pub fn sidebar_bounds(viewport_width: f64) -> Bounds {
    Bounds {
        min: SIDEBAR_MIN_WIDTH,
        max: (viewport_width - SIDEBAR_RESERVED).max(SIDEBAR_MIN_WIDTH),
    }
}

pub fn is_narrow(viewport_width: f64) -> bool {
    viewport_width < NARROW_VIEWPORT_WIDTH
}

/// Which way the region grows relative to the pointer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAxis {
    /// Size grows as the pointer coordinate grows (sidebar: handle on the
    /// right edge, dragging right widens).
    Forward,
    /// Size grows as the pointer coordinate shrinks (panel: handle on the
    /// top edge, dragging up heightens).
    Reverse,
}

/// Resize drag with states {idle, dragging}.
///
/// `begin` on pointer-down over the handle, `update` on every pointer move,
/// `end` on pointer-up anywhere in the document. The caller is responsible
/// for registering the release listener globally so a drag cannot get stuck
/// when the pointer leaves the handle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ResizeDrag {
    #[default]
    Idle,
    Dragging {
        axis: ResizeAxis,
        start_pointer: f64,
        start_size: f64,
    },
}

impl ResizeDrag {
    pub fn begin(&mut self, axis: ResizeAxis, pointer: f64, size: f64) {
        *self = ResizeDrag::Dragging {
            axis,
            start_pointer: pointer,
            start_size: size,
        };
    }

    /// New clamped size for the current pointer position, or `None` when no
    /// drag is in progress (moves while idle are ignored).
    pub fn update(&self, pointer: f64, bounds: Bounds) -> Option<f64> {
        let ResizeDrag::Dragging {
            axis,
            start_pointer,
            start_size,
        } = *self
        else {
            return None;
        };
        let delta = match axis {
            ResizeAxis::Forward => pointer - start_pointer,
            ResizeAxis::Reverse => start_pointer - pointer,
        };
        Some(bounds.clamp(start_size + delta))
    }

    pub fn end(&mut self) {
        *self = ResizeDrag::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, ResizeDrag::Dragging { .. })
    }
}

/// Tab reorder drag with states {idle, dragging}.
///
/// Reordering is live: every pointer-enter over another tab yields a move
/// and the dragged tab's index follows it, rather than committing once on
/// drop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReorderDrag {
    #[default]
    Idle,
    Dragging { index: usize },
}

impl ReorderDrag {
    pub fn begin(&mut self, index: usize) {
        *self = ReorderDrag::Dragging { index };
    }

    /// Pointer entered the tab at `target`: returns the `(from, to)` move
    /// to apply, if any, and tracks the dragged tab at its new index.
    pub fn enter(&mut self, target: usize) -> Option<(usize, usize)> {
        let ReorderDrag::Dragging { index } = *self else {
            return None;
        };
        if index == target {
            return None;
        }
        *self = ReorderDrag::Dragging { index: target };
        Some((index, target))
    }

    pub fn end(&mut self) {
        *self = ReorderDrag::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, ReorderDrag::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === bounds ===

    #[test]
    fn test_panel_bounds_reserve_editor_room() {
        let bounds = panel_bounds(800.0);
        assert_eq!(bounds.min, PANEL_MIN_HEIGHT);
        assert_eq!(bounds.max, 640.0);
    }

    #[test]
    fn test_bounds_never_invert_on_tiny_viewport() {
        let bounds = panel_bounds(100.0);
        assert!(bounds.max >= bounds.min);
        let bounds = sidebar_bounds(200.0);
        assert!(bounds.max >= bounds.min);
    }

    #[test]
    fn test_clamp_beyond_max_sticks_to_max() {
        let bounds = panel_bounds(800.0);
        assert_eq!(bounds.clamp(5000.0), bounds.max);
        assert_eq!(bounds.clamp(-50.0), bounds.min);
    }

    #[test]
    fn test_narrow_threshold() {
        assert!(is_narrow(500.0));
        assert!(!is_narrow(NARROW_VIEWPORT_WIDTH));
        assert!(!is_narrow(1280.0));
    }

    // === resize drag ===

    #[test]
    fn test_resize_forward_grows_with_pointer() {
        let mut drag = ResizeDrag::default();
        drag.begin(ResizeAxis::Forward, 300.0, 256.0);
        let updated = drag.update(340.0, sidebar_bounds(1280.0));
        assert_eq!(updated, Some(296.0));
    }

    #[test]
    fn test_resize_reverse_grows_against_pointer() {
        let mut drag = ResizeDrag::default();
        drag.begin(ResizeAxis::Reverse, 600.0, 192.0);
        // Pointer moved up by 50px, panel grows by 50px.
        let updated = drag.update(550.0, panel_bounds(800.0));
        assert_eq!(updated, Some(242.0));
    }

    #[test]
    fn test_resize_clamps_into_bounds() {
        let mut drag = ResizeDrag::default();
        drag.begin(ResizeAxis::Reverse, 600.0, 192.0);
        // Dragging far past the viewport bottom clamps to the minimum...
        assert_eq!(drag.update(5000.0, panel_bounds(800.0)), Some(96.0));
        // ...and far past the top clamps to the maximum.
        assert_eq!(drag.update(-5000.0, panel_bounds(800.0)), Some(640.0));
    }

    #[test]
    fn test_resize_move_while_idle_is_ignored() {
        let drag = ResizeDrag::default();
        assert_eq!(drag.update(123.0, panel_bounds(800.0)), None);
    }

    #[test]
    fn test_resize_end_returns_to_idle() {
        let mut drag = ResizeDrag::default();
        drag.begin(ResizeAxis::Forward, 0.0, 200.0);
        assert!(drag.is_dragging());
        drag.end();
        assert!(!drag.is_dragging());
    }

    // === reorder drag ===

    #[test]
    fn test_reorder_enter_yields_move_and_follows() {
        let mut drag = ReorderDrag::default();
        drag.begin(2);
        assert_eq!(drag.enter(0), Some((2, 0)));
        // The dragged tab now lives at index 0.
        assert_eq!(drag.enter(1), Some((0, 1)));
    }

    #[test]
    fn test_reorder_enter_same_index_is_noop() {
        let mut drag = ReorderDrag::default();
        drag.begin(1);
        assert_eq!(drag.enter(1), None);
    }

    #[test]
    fn test_reorder_enter_while_idle_is_ignored() {
        let mut drag = ReorderDrag::default();
        assert_eq!(drag.enter(3), None);
    }
}
