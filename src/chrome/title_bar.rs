//! Title-bar surface supplied by the application
//!
//! The controller never draws the title bar. It only asks the surface for its
//! height and whether a point lands on something clickable.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::geometry::{Point, Rect};

/// A widget the application uses as its title bar.
///
/// Coordinates are logical pixels relative to the surface's top-left corner,
/// which sits at the window's content origin.
pub trait TitleBarSurface {
    /// Height in logical pixels
    fn height(&self) -> i32;

    /// Whether a clickable child (button, menu, field) is under `pos`
    fn is_interactive_at(&self, pos: Point) -> bool;
}

/// Returned when a title bar is attached to a slot that already holds one
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("title bar already attached")]
pub struct AlreadySet;

/// Write-once holder for the title bar
#[derive(Default)]
pub enum TitleBarSlot {
    #[default]
    Unset,
    Set(Arc<dyn TitleBarSurface>),
}

impl TitleBarSlot {
    /// Move from `Unset` to `Set`; a second call is rejected
    pub fn set(&mut self, surface: Arc<dyn TitleBarSurface>) -> Result<(), AlreadySet> {
        match self {
            TitleBarSlot::Unset => {
                *self = TitleBarSlot::Set(surface);
                Ok(())
            }
            TitleBarSlot::Set(_) => Err(AlreadySet),
        }
    }

    pub fn get(&self) -> Option<&Arc<dyn TitleBarSurface>> {
        match self {
            TitleBarSlot::Unset => None,
            TitleBarSlot::Set(surface) => Some(surface),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, TitleBarSlot::Set(_))
    }
}

impl fmt::Debug for TitleBarSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleBarSlot::Unset => write!(f, "Unset"),
            TitleBarSlot::Set(surface) => write!(f, "Set(height={})", surface.height()),
        }
    }
}

/// Title bar described by a fixed height and a list of clickable rectangles.
///
/// The rectangles can be replaced at any time (e.g. when the window is resized
/// and right-aligned buttons move), so the surface can be shared behind an `Arc`.
#[derive(Debug)]
pub struct StaticTitleBar {
    height: i32,
    interactive: RwLock<Vec<Rect>>,
}

impl StaticTitleBar {
    pub fn new(height: i32) -> Self {
        Self {
            height,
            interactive: RwLock::new(Vec::new()),
        }
    }

    pub fn with_interactive_regions(height: i32, regions: Vec<Rect>) -> Self {
        Self {
            height,
            interactive: RwLock::new(regions),
        }
    }

    /// Replace every clickable region
    pub fn set_interactive_regions(&self, regions: Vec<Rect>) {
        *self.interactive.write() = regions;
    }

    pub fn interactive_regions(&self) -> Vec<Rect> {
        self.interactive.read().clone()
    }

    /// Index of the region under `pos`, if any
    pub fn region_at(&self, pos: Point) -> Option<usize> {
        self.interactive
            .read()
            .iter()
            .position(|r| r.contains_point(pos))
    }
}

impl TitleBarSurface for StaticTitleBar {
    fn height(&self) -> i32 {
        self.height
    }

    fn is_interactive_at(&self, pos: Point) -> bool {
        self.region_at(pos).is_some()
    }
}
