//! Demo window state
//!
//! The window procedure is a free function, so the controller lives in
//! thread-local storage like the rest of the per-window UI state.

use std::cell::RefCell;
use std::sync::Arc;

use frameless::geometry::{unscale_by_ratio, Point};
use frameless::platform::win32::Win32Host;
use frameless::{FramelessWindow, StaticTitleBar, TitleBarSurface, WindowHost};

use crate::buttons::{self, CaptionButton};

use super::painter::PaintSnapshot;

/// Window state reachable from the window procedure
pub struct DemoState {
    pub chrome: FramelessWindow<Win32Host>,
    pub title_bar: Arc<StaticTitleBar>,
    pub title: String,
    pub hovered: Option<CaptionButton>,
}

impl DemoState {
    /// Re-place the caption buttons for a client width in physical pixels
    pub fn relayout(&mut self, client_width: i32) {
        let ratio = self.chrome.host().device_pixel_ratio();
        let margins = self.chrome.content_margins();
        let surface_width = unscale_by_ratio(client_width, ratio) - margins.left - margins.right;
        let height = self.title_bar.height();
        self.title_bar
            .set_interactive_regions(buttons::layout(surface_width, height));
    }

    /// Caption button under a client-area point (physical pixels)
    pub fn button_at(&self, x: i32, y: i32) -> Option<CaptionButton> {
        if !self.chrome.is_frameless() {
            return None;
        }
        let ratio = self.chrome.host().device_pixel_ratio();
        let logical = Point::new(unscale_by_ratio(x, ratio), unscale_by_ratio(y, ratio));
        let local = logical.relative_to(self.chrome.content_margins().content_origin());
        self.title_bar
            .region_at(local)
            .and_then(|i| CaptionButton::ALL.get(i).copied())
    }

    pub fn paint_snapshot(&self) -> PaintSnapshot {
        PaintSnapshot {
            title: self.title.clone(),
            ratio: self.chrome.host().device_pixel_ratio(),
            margins: self.chrome.content_margins(),
            title_bar_height: self.title_bar.height(),
            buttons: self.title_bar.interactive_regions(),
            hovered: self.hovered,
            state: self.chrome.window_state(),
            frameless: self.chrome.is_frameless(),
        }
    }
}

thread_local! {
    static DEMO_STATE: RefCell<Option<DemoState>> = const { RefCell::new(None) };
}

/// Install the state for the window on this thread
pub fn set_demo_state(state: DemoState) {
    DEMO_STATE.with(|s| {
        *s.borrow_mut() = Some(state);
    });
}

/// Remove the state (on WM_DESTROY)
pub fn take_demo_state() -> Option<DemoState> {
    DEMO_STATE.with(|s| s.borrow_mut().take())
}

/// Access the state; `None` before creation finished or while it is already borrowed
pub fn with_demo_state<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut DemoState) -> R,
{
    DEMO_STATE.with(|s| match s.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => None,
    })
}
