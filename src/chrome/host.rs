//! The generic top-level window the chrome is layered on

use crate::geometry::Margins;

use super::state::WindowFlags;

/// Operations the controller needs from the window it decorates.
///
/// On Windows this is a thin wrapper around an `HWND`; tests use a recording
/// fake. None of these calls may re-enter the controller synchronously.
pub trait WindowHost {
    /// Native handle, if the host has one
    fn native_handle(&self) -> Option<isize>;

    /// Physical pixels per logical pixel
    fn device_pixel_ratio(&self) -> f64;

    fn window_flags(&self) -> WindowFlags;

    fn set_window_flags(&mut self, flags: WindowFlags);

    /// Margins (logical pixels) between the window edge and its content
    fn set_contents_margins(&mut self, margins: Margins);

    /// Invalidate the whole window, including what the old frame covered
    fn force_redraw(&mut self);

    fn show_minimized(&mut self);

    fn show_normal(&mut self);
}
