//! Window procedure for the demo window
//!
//! Every message goes through the chrome controller first; whatever it does
//! not handle falls through to the demo's own handling and `DefWindowProcW`.

use log::{debug, info};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{BeginPaint, EndPaint, InvalidateRect, PAINTSTRUCT};
use windows::Win32::UI::Input::KeyboardAndMouse::{TrackMouseEvent, TME_LEAVE, TRACKMOUSEEVENT};
use windows::Win32::UI::WindowsAndMessaging::*;

use frameless::chrome::strategy::{NativeEventResult, RawMessage};
use frameless::geometry::Rect;
use frameless::platform::win32::handle_to_isize;
use frameless::platform::win32::strategy::{x_from_lparam, y_from_lparam};
use frameless::WindowStates;

use crate::buttons::CaptionButton;

use super::painter;
use super::state::{take_demo_state, with_demo_state};

/// WM_MOUSELEAVE message constant
const WM_MOUSELEAVE: u32 = 0x02A3;

/// Window state implied by a WM_SIZE request type.
///
/// Minimizing keeps the maximized bit of `previous`, so a window that will
/// restore to maximized reports `MINIMIZED | MAXIMIZED`.
pub fn states_from_size(kind: u32, previous: WindowStates) -> WindowStates {
    match kind {
        SIZE_MINIMIZED => {
            let mut states = WindowStates::MINIMIZED;
            if previous.contains(WindowStates::MAXIMIZED) {
                states.insert(WindowStates::MAXIMIZED);
            }
            states
        }
        SIZE_MAXIMIZED => WindowStates::MAXIMIZED,
        _ => WindowStates::NORMAL,
    }
}

fn client_rect(hwnd: HWND) -> Rect {
    let mut rc = RECT::default();
    unsafe {
        let _ = GetClientRect(hwnd, &mut rc);
    }
    Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom)
}

/// Run a caption button's action. Must not be called while the state is borrowed.
fn press(hwnd: HWND, button: CaptionButton) {
    info!("Caption button pressed: {:?}", button);
    unsafe {
        match button {
            CaptionButton::Minimize => {
                let _ = ShowWindow(hwnd, SW_MINIMIZE);
            }
            CaptionButton::Maximize => {
                let cmd = if IsZoomed(hwnd).as_bool() { SW_RESTORE } else { SW_MAXIMIZE };
                let _ = ShowWindow(hwnd, cmd);
            }
            CaptionButton::Close => {
                let _ = DestroyWindow(hwnd);
            }
        }
    }
}

/// Window procedure for the demo window
pub unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let raw = RawMessage::new(handle_to_isize(hwnd), msg, wparam.0, lparam.0);
    if let Some(NativeEventResult::Handled(code)) = with_demo_state(|s| s.chrome.native_event(&raw)) {
        return LRESULT(code);
    }

    match msg {
        WM_SIZE => {
            let width = (lparam.0 & 0xFFFF) as i32;
            with_demo_state(|s| {
                let states = states_from_size(wparam.0 as u32, s.chrome.window_state());
                s.chrome.window_state_changed(states);
                s.relayout(width);
            });
            let _ = InvalidateRect(hwnd, None, false);
            LRESULT(0)
        }

        WM_PAINT => {
            let mut ps = PAINTSTRUCT::default();
            let hdc = BeginPaint(hwnd, &mut ps);
            if let Some(snapshot) = with_demo_state(|s| s.paint_snapshot()) {
                painter::paint(hdc, &client_rect(hwnd), &snapshot);
            }
            let _ = EndPaint(hwnd, &ps);
            LRESULT(0)
        }

        WM_ERASEBKGND => LRESULT(1),

        WM_MOUSEMOVE => {
            let (x, y) = (x_from_lparam(lparam.0), y_from_lparam(lparam.0));
            let changed = with_demo_state(|s| {
                let hovered = s.button_at(x, y);
                let changed = hovered != s.hovered;
                s.hovered = hovered;
                changed
            });
            if changed == Some(true) {
                let mut tme = TRACKMOUSEEVENT {
                    cbSize: std::mem::size_of::<TRACKMOUSEEVENT>() as u32,
                    dwFlags: TME_LEAVE,
                    hwndTrack: hwnd,
                    dwHoverTime: 0,
                };
                let _ = TrackMouseEvent(&mut tme);
                let _ = InvalidateRect(hwnd, None, false);
            }
            LRESULT(0)
        }

        WM_MOUSELEAVE => {
            with_demo_state(|s| s.hovered = None);
            let _ = InvalidateRect(hwnd, None, false);
            LRESULT(0)
        }

        WM_LBUTTONUP => {
            let (x, y) = (x_from_lparam(lparam.0), y_from_lparam(lparam.0));
            if let Some(Some(button)) = with_demo_state(|s| s.button_at(x, y)) {
                press(hwnd, button);
            }
            LRESULT(0)
        }

        WM_DPICHANGED => {
            // lparam points at the rectangle Windows suggests for the new DPI.
            let suggested = &*(lparam.0 as *const RECT);
            debug!("DPI changed to {}", wparam.0 & 0xFFFF);
            let _ = SetWindowPos(
                hwnd,
                None,
                suggested.left,
                suggested.top,
                suggested.right - suggested.left,
                suggested.bottom - suggested.top,
                SWP_NOZORDER | SWP_NOACTIVATE,
            );
            LRESULT(0)
        }

        WM_CLOSE => {
            DestroyWindow(hwnd).ok();
            LRESULT(0)
        }

        WM_DESTROY => {
            info!("Window destroyed, quitting application");
            drop(take_demo_state());
            PostQuitMessage(0);
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_kinds_map_to_states() {
        let normal = WindowStates::NORMAL;
        assert_eq!(states_from_size(SIZE_RESTORED, normal), WindowStates::NORMAL);
        assert_eq!(states_from_size(SIZE_MINIMIZED, normal), WindowStates::MINIMIZED);
        assert_eq!(states_from_size(SIZE_MAXIMIZED, normal), WindowStates::MAXIMIZED);
        assert_eq!(states_from_size(SIZE_MAXSHOW, normal), WindowStates::NORMAL);
    }

    #[test]
    fn minimizing_a_maximized_window_keeps_maximized() {
        let both = WindowStates::MINIMIZED | WindowStates::MAXIMIZED;
        assert_eq!(states_from_size(SIZE_MINIMIZED, WindowStates::MAXIMIZED), both);
        // Repeated minimize notifications do not lose the bit.
        assert_eq!(states_from_size(SIZE_MINIMIZED, both), both);
        assert_eq!(states_from_size(SIZE_RESTORED, both), WindowStates::NORMAL);
    }
}
