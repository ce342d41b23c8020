//! `WindowHost` over a plain Win32 top-level window

use log::debug;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    InvalidateRect, RedrawWindow, RDW_ALLCHILDREN, RDW_ERASE, RDW_FRAME, RDW_INVALIDATE,
};
use windows::Win32::UI::HiDpi::GetDpiForWindow;
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowLongPtrW, SetWindowLongPtrW, ShowWindowAsync, GWL_STYLE, SW_MINIMIZE, SW_RESTORE,
    WS_CAPTION, WS_CLIPCHILDREN, WS_CLIPSIBLINGS, WS_MAXIMIZE, WS_MAXIMIZEBOX, WS_MINIMIZE,
    WS_MINIMIZEBOX, WS_OVERLAPPED, WS_POPUP, WS_SYSMENU, WS_THICKFRAME, WS_VISIBLE,
};

use crate::chrome::host::WindowHost;
use crate::chrome::state::WindowFlags;
use crate::geometry::{dpi_to_ratio, Margins};

use super::handle_to_isize;

/// Style bits that describe state rather than decorations
const STATE_BITS: u32 = WS_VISIBLE.0 | WS_MINIMIZE.0 | WS_MAXIMIZE.0 | WS_CLIPCHILDREN.0 | WS_CLIPSIBLINGS.0;

/// Read generic decoration flags off a GWL_STYLE value
pub fn flags_from_style(style: u32) -> WindowFlags {
    let mut flags = WindowFlags::EMPTY;
    let mut add = |bit: u32, flag: WindowFlags| {
        if style & bit == bit {
            flags = flags | flag;
        }
    };
    add(WS_CAPTION.0, WindowFlags::TITLE);
    add(WS_THICKFRAME.0, WindowFlags::BORDER);
    add(WS_SYSMENU.0, WindowFlags::SYSTEM_MENU | WindowFlags::CLOSE_BUTTON);
    add(WS_MINIMIZEBOX.0, WindowFlags::MINIMIZE_BUTTON);
    add(WS_MAXIMIZEBOX.0, WindowFlags::MAXIMIZE_BUTTON);
    if style & WS_POPUP.0 != 0 && style & WS_CAPTION.0 == 0 {
        flags = flags | WindowFlags::FRAMELESS_HINT;
    }
    flags
}

/// GWL_STYLE value for `flags`, keeping the state bits of `current`
pub fn style_for_flags(flags: WindowFlags, current: u32) -> u32 {
    let mut style = current & STATE_BITS;

    if flags.contains(WindowFlags::FRAMELESS_HINT) {
        // Popup with no frame; the taskbar still gets its system menu and
        // minimize behaviour.
        style |= WS_POPUP.0;
        if flags.contains(WindowFlags::SYSTEM_MENU) {
            style |= WS_SYSMENU.0;
        }
        if flags.contains(WindowFlags::MINIMIZE_BUTTON) {
            style |= WS_MINIMIZEBOX.0;
        }
        return style;
    }

    style |= WS_OVERLAPPED.0;
    if flags.contains(WindowFlags::TITLE) {
        style |= WS_CAPTION.0;
    }
    if flags.contains(WindowFlags::BORDER) {
        style |= WS_THICKFRAME.0;
    }
    if flags.contains(WindowFlags::SYSTEM_MENU) || flags.contains(WindowFlags::CLOSE_BUTTON) {
        style |= WS_SYSMENU.0;
    }
    if flags.contains(WindowFlags::MINIMIZE_BUTTON) {
        style |= WS_MINIMIZEBOX.0;
    }
    if flags.contains(WindowFlags::MAXIMIZE_BUTTON) {
        style |= WS_MAXIMIZEBOX.0;
    }
    style
}

/// A top-level Win32 window seen through `WindowHost`.
///
/// Every call here either only invalidates or posts (`ShowWindowAsync`), so
/// the window procedure is never re-entered while the controller is borrowed.
#[derive(Debug)]
pub struct Win32Host {
    hwnd: HWND,
    flags: WindowFlags,
    margins: Margins,
}

impl Win32Host {
    pub fn new(hwnd: HWND) -> Self {
        // SAFETY: reading the style of a window we were handed is always valid.
        let style = unsafe { GetWindowLongPtrW(hwnd, GWL_STYLE) } as u32;
        Self {
            hwnd,
            flags: flags_from_style(style),
            margins: Margins::ZERO,
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Margins last set by the controller
    pub fn contents_margins(&self) -> Margins {
        self.margins
    }

    /// Current DPI of the window's monitor
    pub fn dpi(&self) -> u32 {
        // SAFETY: hwnd is owned by this host.
        unsafe { GetDpiForWindow(self.hwnd) }
    }
}

impl WindowHost for Win32Host {
    fn native_handle(&self) -> Option<isize> {
        Some(handle_to_isize(self.hwnd))
    }

    fn device_pixel_ratio(&self) -> f64 {
        dpi_to_ratio(self.dpi())
    }

    fn window_flags(&self) -> WindowFlags {
        self.flags
    }

    fn set_window_flags(&mut self, flags: WindowFlags) {
        unsafe {
            let current = GetWindowLongPtrW(self.hwnd, GWL_STYLE) as u32;
            let style = style_for_flags(flags, current);
            SetWindowLongPtrW(self.hwnd, GWL_STYLE, style as isize);
            debug!("Window style 0x{:08X} -> 0x{:08X}", current, style);
        }
        self.flags = flags;
    }

    fn set_contents_margins(&mut self, margins: Margins) {
        self.margins = margins;
        unsafe {
            let _ = InvalidateRect(self.hwnd, None, true);
        }
    }

    fn force_redraw(&mut self) {
        unsafe {
            let _ = RedrawWindow(
                self.hwnd,
                None,
                None,
                RDW_INVALIDATE | RDW_ERASE | RDW_FRAME | RDW_ALLCHILDREN,
            );
        }
    }

    fn show_minimized(&mut self) {
        unsafe {
            let _ = ShowWindowAsync(self.hwnd, SW_MINIMIZE);
        }
    }

    fn show_normal(&mut self) {
        unsafe {
            let _ = ShowWindowAsync(self.hwnd, SW_RESTORE);
        }
    }
}
