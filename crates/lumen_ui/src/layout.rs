//! Rectangles in document coordinates.

use serde::{Deserialize, Serialize};

/// A rectangle in document coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

/// Per-side offsets. Positive values grow a rect, negative values shrink it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    /// Top offset.
    pub top: f32,
    /// Right offset.
    pub right: f32,
    /// Bottom offset.
    pub bottom: f32,
    /// Left offset.
    pub left: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the area (zero for degenerate rects).
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Returns true if the point lies inside or on the edge.
    #[must_use]
    pub fn contains_inclusive(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Returns true if two rectangles overlap with positive area.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the intersection of two rectangles, or None if they don't intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(Self::new(x, y, right - x, bottom - y))
    }

    /// Grows each side by its inset. A side pushed past its opposite
    /// collapses the rect to zero size on that axis, at the point midway
    /// between the two moved edges kept inside the original rect.
    #[must_use]
    pub fn grow(&self, insets: Insets) -> Self {
        let (x, width) = grow_axis(self.x, self.width, insets.left, insets.right);
        let (y, height) = grow_axis(self.y, self.height, insets.top, insets.bottom);
        Self::new(x, y, width, height)
    }
}

fn grow_axis(start: f32, size: f32, before: f32, after: f32) -> (f32, f32) {
    let low = start - before;
    let high = start + size + after;
    if high >= low {
        (low, high - low)
    } else {
        let end = start + size.max(0.0);
        (((low + high) * 0.5).clamp(start, end), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_area() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 75.0, 100.0, 100.0);
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, Rect::new(50.0, 75.0, 50.0, 25.0));
        assert_eq!(i.area(), 1250.0);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_grow_and_collapse() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        let grown = r.grow(Insets {
            top: 5.0,
            right: 0.0,
            bottom: 5.0,
            left: 10.0,
        });
        assert_eq!(grown, Rect::new(0.0, 5.0, 30.0, 30.0));

        let collapsed = r.grow(Insets {
            top: -15.0,
            right: 0.0,
            bottom: -15.0,
            left: 0.0,
        });
        assert_eq!(collapsed.height, 0.0);
        assert_eq!(collapsed.area(), 0.0);
        assert_eq!(collapsed.y, 20.0);
    }

    #[test]
    fn test_collapse_stays_inside_original() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let collapsed = r.grow(Insets {
            top: -500.0,
            right: 0.0,
            bottom: 0.0,
            left: -500.0,
        });
        assert_eq!((collapsed.width, collapsed.height), (0.0, 0.0));
        assert!(r.contains_inclusive(collapsed.x, collapsed.y));
        assert!(!collapsed.contains_inclusive(500.0, 500.0));
    }
}
