//! Platform boundary for native window messages
//!
//! A `ChromeStrategy` turns the host platform's raw messages into the few
//! `NativeMessage`s the controller understands, and turns hit-test results
//! back into the codes the platform message loop reads.

use crate::error::FramelessResult;
use crate::geometry::{Point, Rect};

use super::decorations::{NativeStyle, Platform};
use super::hit_test::HitTest;

/// A platform window message as delivered to the window procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMessage {
    /// Native window handle
    pub hwnd: isize,
    pub message: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl RawMessage {
    pub fn new(hwnd: isize, message: u32, wparam: usize, lparam: isize) -> Self {
        Self {
            hwnd,
            message,
            wparam,
            lparam,
        }
    }
}

/// Power-management notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerEvent {
    /// The system is about to suspend
    Suspend,
    /// The system resumed, with or without user input
    ResumeAutomatic,
    Other(usize),
}

/// The messages a frameless window reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeMessage {
    /// Size calculation of the non-client area
    NcCalcSize,
    /// Hit-test of a screen point against the window (both in screen pixels)
    NcHitTest { cursor: Point, window: Rect },
    PowerBroadcast(PowerEvent),
}

/// What the window procedure should do with a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeEventResult {
    /// Return this value from the window procedure
    Handled(isize),
    /// Run the default window procedure and return its result
    PassThrough,
}

/// Native message handling for one platform
pub trait ChromeStrategy {
    fn name(&self) -> &'static str;

    fn platform(&self) -> Platform;

    /// Recognize `raw`; `None` for anything the chrome does not handle
    fn decode(&self, raw: &RawMessage) -> Option<NativeMessage>;

    /// Platform code for a hit-test result
    fn hit_code(&self, hit: HitTest) -> isize;

    /// Re-assert `style` on the native window behind `handle`
    fn apply_native_style(&self, handle: Option<isize>, style: NativeStyle) -> FramelessResult<()>;
}

/// Strategy for platforms without native chrome hooks: nothing is intercepted
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStrategy;

impl ChromeStrategy for NullStrategy {
    fn name(&self) -> &'static str {
        "null"
    }

    fn platform(&self) -> Platform {
        Platform::Other
    }

    fn decode(&self, _raw: &RawMessage) -> Option<NativeMessage> {
        None
    }

    fn hit_code(&self, _hit: HitTest) -> isize {
        0
    }

    fn apply_native_style(&self, _handle: Option<isize>, _style: NativeStyle) -> FramelessResult<()> {
        Ok(())
    }
}
