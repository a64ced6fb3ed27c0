//! Pointer tracking.
//!
//! Converts client pixel coordinates into normalised device coordinates:
//! `[-1, 1]` on both axes with y pointing up, so the screen centre is
//! `(0, 0)` and the top-left corner is `(-1, 1)`.

/// Pointer position in pixels and normalised coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    /// Client X in pixels.
    pub x: f32,
    /// Client Y in pixels.
    pub y: f32,
    /// Normalised X, `-1` at the left edge.
    pub normalized_x: f32,
    /// Normalised Y, `1` at the top edge.
    pub normalized_y: f32,
}

impl PointerPosition {
    /// Builds a position from client pixels and the viewport size.
    ///
    /// A zero-sized viewport normalises to the centre.
    #[must_use]
    pub fn from_client(x: f32, y: f32, viewport_width: f32, viewport_height: f32) -> Self {
        let normalized_x = if viewport_width > 0.0 {
            (x / viewport_width) * 2.0 - 1.0
        } else {
            0.0
        };
        let normalized_y = if viewport_height > 0.0 {
            -(y / viewport_height) * 2.0 + 1.0
        } else {
            0.0
        };
        Self {
            x,
            y,
            normalized_x,
            normalized_y,
        }
    }

    /// Normalised coordinates as a pair.
    #[must_use]
    pub fn normalized(&self) -> (f32, f32) {
        (self.normalized_x, self.normalized_y)
    }
}

/// Latest pointer position, updated from move events.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    position: PointerPosition,
    viewport: (f32, f32),
}

impl PointerTracker {
    /// Creates a tracker for a viewport of the given size. The pointer
    /// starts at the origin with normalised `(0, 0)`.
    #[must_use]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: PointerPosition::default(),
            viewport: (viewport_width, viewport_height),
        }
    }

    /// Handles a pointer move.
    pub fn on_move(&mut self, x: f32, y: f32) {
        self.position = PointerPosition::from_client(x, y, self.viewport.0, self.viewport.1);
    }

    /// Handles a viewport resize. The stored pixel position is kept and
    /// re-normalised.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.position = PointerPosition::from_client(self.position.x, self.position.y, width, height);
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> PointerPosition {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_centre() {
        let centre = PointerPosition::from_client(500.0, 400.0, 1000.0, 800.0);
        assert_eq!(centre.normalized(), (0.0, 0.0));

        let top_left = PointerPosition::from_client(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(top_left.normalized(), (-1.0, 1.0));

        let bottom_right = PointerPosition::from_client(1000.0, 800.0, 1000.0, 800.0);
        assert_eq!(bottom_right.normalized(), (1.0, -1.0));
    }

    #[test]
    fn test_zero_viewport() {
        let p = PointerPosition::from_client(10.0, 10.0, 0.0, 0.0);
        assert_eq!(p.normalized(), (0.0, 0.0));
    }

    #[test]
    fn test_tracker_renormalises_on_resize() {
        let mut tracker = PointerTracker::new(1000.0, 800.0);
        tracker.on_move(500.0, 400.0);
        assert_eq!(tracker.position().normalized(), (0.0, 0.0));
        tracker.on_resize(500.0, 400.0);
        assert_eq!(tracker.position().normalized(), (1.0, -1.0));
    }
}
