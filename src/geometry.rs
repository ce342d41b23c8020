//! Geometry helpers shared by the chrome controller and the platform layer
//!
//! All values are integer pixels. Whether a value is logical or physical is
//! stated by the caller; `scale_by_ratio` converts logical to physical.

/// Reference DPI for a pixel ratio of 1.0
pub const BASE_DPI: u32 = 96;

/// Calculate the device pixel ratio for a DPI value
pub fn dpi_to_ratio(dpi: u32) -> f64 {
    if dpi == 0 {
        1.0
    } else {
        dpi as f64 / BASE_DPI as f64
    }
}

/// Scale a logical value by a device pixel ratio (truncating)
pub fn scale_by_ratio(value: i32, ratio: f64) -> i32 {
    (value as f64 * ratio) as i32
}

/// Convert a physical value back to logical pixels (truncating)
pub fn unscale_by_ratio(value: i32, ratio: f64) -> i32 {
    if ratio <= 0.0 {
        value
    } else {
        (value as f64 / ratio) as i32
    }
}

/// Point structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate into the coordinate space whose origin is `origin`
    pub fn relative_to(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Size structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Rectangle structure for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build from left/top/right/bottom edges, as Win32 `RECT` stores them
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.contains(p.x, p.y)
    }
}

/// Content margins around the client area (left, top, right, bottom)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub const ZERO: Margins = Margins::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same margin on every side, plus `extra_top` on the top edge
    pub const fn uniform_with_top(margin: i32, extra_top: i32) -> Self {
        Self::new(margin, margin.saturating_add(extra_top), margin, margin)
    }

    /// Top-left corner of the content area
    pub fn content_origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_scaling_truncates() {
        assert_eq!(scale_by_ratio(5, 1.0), 5);
        assert_eq!(scale_by_ratio(5, 1.5), 7);
        assert_eq!(scale_by_ratio(30, 2.0), 60);
        assert_eq!(unscale_by_ratio(45, 1.5), 30);
        assert_eq!(dpi_to_ratio(144), 1.5);
        assert_eq!(dpi_to_ratio(0), 1.0);
    }

    #[test]
    fn rect_edges_and_containment() {
        let r = Rect::from_edges(100, 50, 900, 650);
        assert_eq!(r.size(), Size::new(800, 600));
        assert!(r.contains(100, 50));
        assert!(!r.contains(900, 50));
        assert!(r.contains_point(Point::new(899, 649)));
    }

    #[test]
    fn margins_put_extra_space_on_top_only() {
        let m = Margins::uniform_with_top(1, 2);
        assert_eq!(m, Margins::new(1, 3, 1, 1));
        assert_eq!(m.content_origin(), Point::new(1, 3));
    }

    #[test]
    fn huge_margins_saturate() {
        let m = Margins::uniform_with_top(i32::MAX, 2);
        assert_eq!(m.top, i32::MAX);
    }
}
