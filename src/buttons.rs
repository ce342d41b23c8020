//! Caption buttons of the demo title bar

use frameless::geometry::Rect;
use frameless::WindowStates;

/// Logical width of one caption button
pub const BUTTON_WIDTH: i32 = 46;

/// The three window-control buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionButton {
    Minimize,
    Maximize,
    Close,
}

impl CaptionButton {
    pub const ALL: [CaptionButton; 3] = [Self::Minimize, Self::Maximize, Self::Close];

    /// Glyph for the button given the window state
    pub fn glyph(&self, state: WindowStates) -> Glyph {
        match self {
            Self::Minimize => Glyph::Dash,
            Self::Maximize if state.contains(WindowStates::MAXIMIZED) => Glyph::Restore,
            Self::Maximize => Glyph::Square,
            Self::Close => Glyph::Cross,
        }
    }
}

/// What gets drawn inside a caption button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Dash,
    Square,
    Restore,
    Cross,
}

/// Right-aligned button rectangles in title-bar coordinates, in `ALL` order
pub fn layout(surface_width: i32, height: i32) -> Vec<Rect> {
    let count = CaptionButton::ALL.len() as i32;
    let start = (surface_width - BUTTON_WIDTH * count).max(0);
    (0..count)
        .map(|i| Rect::new(start + i * BUTTON_WIDTH, 0, BUTTON_WIDTH, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_hug_the_right_edge() {
        let rects = layout(800, 30);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], Rect::new(662, 0, 46, 30));
        assert_eq!(rects[2].right(), 800);
    }

    #[test]
    fn narrow_surface_clamps_to_zero() {
        let rects = layout(100, 30);
        assert_eq!(rects[0].x, 0);
    }

    #[test]
    fn maximize_glyph_follows_state() {
        assert_eq!(CaptionButton::Maximize.glyph(WindowStates::NORMAL), Glyph::Square);
        assert_eq!(CaptionButton::Maximize.glyph(WindowStates::MAXIMIZED), Glyph::Restore);
        assert_eq!(CaptionButton::Close.glyph(WindowStates::MAXIMIZED), Glyph::Cross);
    }
}
