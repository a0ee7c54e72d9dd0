#![forbid(unsafe_code)]

//! Geometric primitives for layout and hit testing.

/// A rectangle in cell coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    ///
    /// Left/top edges are inclusive, right/bottom exclusive, so an empty
    /// rectangle contains nothing. Edges are compared in `u32`, so the last
    /// row and column are reachable even where `right`/`bottom` saturate.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        let (x, y) = (x as u32, y as u32);
        let (left, top) = (self.x as u32, self.y as u32);
        x >= left && x < left + self.width as u32 && y >= top && y < top + self.height as u32
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Size};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
        assert!(!rect.contains(1, 3));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = Rect::new(4, 4, 0, 10);
        assert!(rect.is_empty());
        assert!(!rect.contains(4, 4));
    }

    #[test]
    fn right_and_bottom_saturate() {
        let rect = Rect::new(u16::MAX - 1, u16::MAX - 1, 10, 10);
        assert_eq!(rect.right(), u16::MAX);
        assert_eq!(rect.bottom(), u16::MAX);
    }

    #[test]
    fn last_cell_is_inside_edge_rect() {
        let rect = Rect::new(u16::MAX - 1, u16::MAX - 1, 10, 10);
        assert!(rect.contains(u16::MAX, u16::MAX));
        assert!(rect.contains(u16::MAX - 1, u16::MAX));
        assert!(!rect.contains(u16::MAX - 2, u16::MAX));
    }

    #[test]
    fn size_new() {
        let size = Size::new(80, 24);
        assert_eq!((size.width, size.height), (80, 24));
    }
}
