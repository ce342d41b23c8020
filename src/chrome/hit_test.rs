//! Non-client hit-testing for frameless windows
//!
//! Classifies a cursor position (relative to the window's top-left corner, in
//! physical pixels) into a resize edge, the caption, or nothing at all.
//! "Nothing" means the platform's default handling decides.

use crate::geometry::{Point, Size};

/// Edge or corner of a window that a resize drag would move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
    Left,
    Right,
    Top,
    Bottom,
}

/// Classification reported back to the window manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTest {
    /// Resize border in the given direction
    Resize(ResizeEdge),
    /// Draggable title area; also gets double-click-to-maximize
    Caption,
}

/// Everything the classifier needs besides the cursor and window size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTestParams {
    /// Resize border thickness in physical pixels
    pub border: i32,
    pub resizable: bool,
    pub movable: bool,
    /// Caption height in physical pixels, `None` without a title bar
    pub caption_height: Option<i32>,
}

/// Which resize edge `pos` falls on, corners first.
pub fn resize_edge(pos: Point, size: Size, border: i32) -> Option<ResizeEdge> {
    let on_left = pos.x < border;
    let on_right = pos.x > size.width - border;
    let on_top = pos.y < border;
    let on_bottom = pos.y > size.height - border;

    if on_left && on_top {
        Some(ResizeEdge::TopLeft)
    } else if on_left && on_bottom {
        Some(ResizeEdge::BottomLeft)
    } else if on_right && on_top {
        Some(ResizeEdge::TopRight)
    } else if on_right && on_bottom {
        Some(ResizeEdge::BottomRight)
    } else if on_left {
        Some(ResizeEdge::Left)
    } else if on_right {
        Some(ResizeEdge::Right)
    } else if on_top {
        Some(ResizeEdge::Top)
    } else if on_bottom {
        Some(ResizeEdge::Bottom)
    } else {
        None
    }
}

/// Classify `pos` inside a window of `size`.
///
/// `is_interactive` is only consulted for points inside the caption band; it
/// receives the same window-relative point and returns true when a clickable
/// child of the title bar sits there.
pub fn classify<F>(pos: Point, size: Size, params: &HitTestParams, is_interactive: F) -> Option<HitTest>
where
    F: FnOnce(Point) -> bool,
{
    if params.resizable {
        if let Some(edge) = resize_edge(pos, size, params.border) {
            return Some(HitTest::Resize(edge));
        }
    }

    let caption_height = params.caption_height?;
    if params.movable && pos.y < caption_height && !is_interactive(pos) {
        return Some(HitTest::Caption);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size {
        width: 800,
        height: 600,
    };

    fn params() -> HitTestParams {
        HitTestParams {
            border: 5,
            resizable: true,
            movable: true,
            caption_height: Some(30),
        }
    }

    #[test]
    fn corners_win_over_edges() {
        let p = params();
        let cases = [
            (Point::new(3, 3), ResizeEdge::TopLeft),
            (Point::new(0, 598), ResizeEdge::BottomLeft),
            (Point::new(799, 0), ResizeEdge::TopRight),
            (Point::new(797, 597), ResizeEdge::BottomRight),
        ];
        for (pos, edge) in cases {
            assert_eq!(classify(pos, WINDOW, &p, |_| false), Some(HitTest::Resize(edge)), "{:?}", pos);
        }
    }

    #[test]
    fn single_edges() {
        let p = params();
        assert_eq!(classify(Point::new(200, 3), WINDOW, &p, |_| false), Some(HitTest::Resize(ResizeEdge::Top)));
        assert_eq!(classify(Point::new(2, 300), WINDOW, &p, |_| false), Some(HitTest::Resize(ResizeEdge::Left)));
        assert_eq!(classify(Point::new(796, 300), WINDOW, &p, |_| false), Some(HitTest::Resize(ResizeEdge::Right)));
        assert_eq!(classify(Point::new(400, 599), WINDOW, &p, |_| false), Some(HitTest::Resize(ResizeEdge::Bottom)));
    }

    #[test]
    fn border_boundaries_are_strict() {
        // x == border is already inside; x == width - border is still inside.
        assert_eq!(resize_edge(Point::new(5, 300), WINDOW, 5), None);
        assert_eq!(resize_edge(Point::new(795, 300), WINDOW, 5), None);
        assert_eq!(resize_edge(Point::new(796, 300), WINDOW, 5), Some(ResizeEdge::Right));
    }

    #[test]
    fn caption_band_unless_interactive() {
        let p = params();
        assert_eq!(classify(Point::new(200, 20), WINDOW, &p, |_| false), Some(HitTest::Caption));
        assert_eq!(classify(Point::new(200, 20), WINDOW, &p, |_| true), None);
        assert_eq!(classify(Point::new(200, 30), WINDOW, &p, |_| false), None);
    }

    #[test]
    fn not_resizable_never_reports_an_edge() {
        let p = HitTestParams {
            resizable: false,
            ..params()
        };
        for y in [0, 2, 4, 20, 300, 596, 599] {
            for x in [0, 3, 200, 797, 799] {
                let hit = classify(Point::new(x, y), WINDOW, &p, |_| false);
                assert!(!matches!(hit, Some(HitTest::Resize(_))), "({}, {}) -> {:?}", x, y, hit);
            }
        }
        // The top border becomes part of the caption.
        assert_eq!(classify(Point::new(3, 3), WINDOW, &p, |_| false), Some(HitTest::Caption));
    }

    #[test]
    fn no_title_bar_no_caption() {
        let p = HitTestParams {
            caption_height: None,
            ..params()
        };
        assert_eq!(classify(Point::new(200, 20), WINDOW, &p, |_| false), None);
    }

    #[test]
    fn not_movable_no_caption() {
        let p = HitTestParams {
            movable: false,
            ..params()
        };
        assert_eq!(classify(Point::new(200, 20), WINDOW, &p, |_| false), None);
        assert_eq!(classify(Point::new(3, 3), WINDOW, &p, |_| false), Some(HitTest::Resize(ResizeEdge::TopLeft)));
    }

    #[test]
    fn interactive_query_only_runs_in_caption_band() {
        let p = params();
        let mut asked = false;
        let _ = classify(Point::new(200, 300), WINDOW, &p, |_| {
            asked = true;
            true
        });
        assert!(!asked);
    }
}
