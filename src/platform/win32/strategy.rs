//! Win32 message decoding and native style bits
//!
//! Recognizes WM_NCCALCSIZE, WM_NCHITTEST and WM_POWERBROADCAST, and maps
//! hit-test results onto the HT* codes DefWindowProc's callers expect.

use log::{debug, warn};
use windows::Win32::Foundation::{SetLastError, RECT, WIN32_ERROR};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowLongPtrW, GetWindowRect, SetWindowLongPtrW, SetWindowPos, GWL_STYLE, HTBOTTOM,
    HTBOTTOMLEFT, HTBOTTOMRIGHT, HTCAPTION, HTLEFT, HTRIGHT, HTTOP, HTTOPLEFT, HTTOPRIGHT,
    PBT_APMRESUMEAUTOMATIC, PBT_APMSUSPEND, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE,
    SWP_NOSIZE, SWP_NOZORDER, WM_NCCALCSIZE, WM_NCHITTEST, WM_POWERBROADCAST, WS_CAPTION,
    WS_MAXIMIZEBOX, WS_THICKFRAME,
};

use crate::chrome::decorations::{NativeStyle, Platform};
use crate::chrome::hit_test::{HitTest, ResizeEdge};
use crate::chrome::strategy::{ChromeStrategy, NativeMessage, PowerEvent, RawMessage};
use crate::error::{FramelessError, FramelessResult};
use crate::geometry::{Point, Rect};

use super::isize_to_handle;

/// Native chrome strategy for Windows
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Strategy;

/// Signed x coordinate packed in an LPARAM (GET_X_LPARAM)
pub fn x_from_lparam(lparam: isize) -> i32 {
    (lparam & 0xFFFF) as u16 as i16 as i32
}

/// Signed y coordinate packed in an LPARAM (GET_Y_LPARAM)
pub fn y_from_lparam(lparam: isize) -> i32 {
    ((lparam >> 16) & 0xFFFF) as u16 as i16 as i32
}

/// Style bits to OR into GWL_STYLE
pub fn style_bits(style: NativeStyle) -> u32 {
    let mut bits = 0;
    if style.maximize_box {
        bits |= WS_MAXIMIZEBOX.0;
    }
    if style.thick_frame {
        bits |= WS_THICKFRAME.0;
    }
    if style.caption {
        bits |= WS_CAPTION.0;
    }
    bits
}

impl Win32Strategy {
    fn decode_power(wparam: usize) -> PowerEvent {
        match wparam as u32 {
            PBT_APMSUSPEND => PowerEvent::Suspend,
            PBT_APMRESUMEAUTOMATIC => PowerEvent::ResumeAutomatic,
            _ => PowerEvent::Other(wparam),
        }
    }

    fn window_rect(handle: isize) -> Option<Rect> {
        let mut rect = RECT::default();
        // SAFETY: GetWindowRect only writes into `rect`; an invalid handle makes it fail.
        match unsafe { GetWindowRect(isize_to_handle(handle), &mut rect) } {
            Ok(()) => Some(Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom)),
            Err(e) => {
                debug!("GetWindowRect failed during hit-test: {}", e);
                None
            }
        }
    }
}

impl ChromeStrategy for Win32Strategy {
    fn name(&self) -> &'static str {
        "win32"
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn decode(&self, raw: &RawMessage) -> Option<NativeMessage> {
        match raw.message {
            WM_NCCALCSIZE => Some(NativeMessage::NcCalcSize),
            WM_NCHITTEST => {
                let window = Self::window_rect(raw.hwnd)?;
                let cursor = Point::new(x_from_lparam(raw.lparam), y_from_lparam(raw.lparam));
                Some(NativeMessage::NcHitTest { cursor, window })
            }
            WM_POWERBROADCAST => Some(NativeMessage::PowerBroadcast(Self::decode_power(raw.wparam))),
            _ => None,
        }
    }

    fn hit_code(&self, hit: HitTest) -> isize {
        let code = match hit {
            HitTest::Caption => HTCAPTION,
            HitTest::Resize(edge) => match edge {
                ResizeEdge::TopLeft => HTTOPLEFT,
                ResizeEdge::BottomLeft => HTBOTTOMLEFT,
                ResizeEdge::TopRight => HTTOPRIGHT,
                ResizeEdge::BottomRight => HTBOTTOMRIGHT,
                ResizeEdge::Left => HTLEFT,
                ResizeEdge::Right => HTRIGHT,
                ResizeEdge::Top => HTTOP,
                ResizeEdge::Bottom => HTBOTTOM,
            },
        };
        code as isize
    }

    fn apply_native_style(&self, handle: Option<isize>, style: NativeStyle) -> FramelessResult<()> {
        let Some(handle) = handle else {
            warn!("No native window handle, skipping style bits {:?}", style);
            return Ok(());
        };
        let hwnd = isize_to_handle(handle);
        let bits = style_bits(style);

        // SAFETY: `hwnd` is the host's live top-level window on this thread.
        unsafe {
            let current = GetWindowLongPtrW(hwnd, GWL_STYLE);
            // SetWindowLongPtrW returns the previous value, which can legitimately be 0.
            SetLastError(WIN32_ERROR(0));
            let previous = SetWindowLongPtrW(hwnd, GWL_STYLE, current | bits as isize);
            if previous == 0 {
                let err = windows::core::Error::from_win32();
                if err.code().is_err() {
                    return Err(FramelessError::NativeStyle(format!(
                        "SetWindowLongPtrW(GWL_STYLE) failed: {}",
                        err
                    )));
                }
            }

            // Style changes only take effect on the frame after SWP_FRAMECHANGED.
            SetWindowPos(
                hwnd,
                None,
                0,
                0,
                0,
                0,
                SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
            )?;
        }

        debug!("Native style bits 0x{:08X} applied", bits);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::WM_MOUSEMOVE;

    #[test]
    fn lparam_coordinates_are_signed() {
        let lparam = ((20u32 << 16) | 300) as isize;
        assert_eq!((x_from_lparam(lparam), y_from_lparam(lparam)), (300, 20));

        // (-8, -8): a maximized window's cursor on a secondary monitor to the left.
        let packed = (((-8i16 as u16 as u32) << 16) | (-8i16 as u16 as u32)) as isize;
        assert_eq!((x_from_lparam(packed), y_from_lparam(packed)), (-8, -8));
    }

    #[test]
    fn decodes_calc_size_and_power() {
        let s = Win32Strategy;
        assert_eq!(s.decode(&RawMessage::new(0, WM_NCCALCSIZE, 1, 0)), Some(NativeMessage::NcCalcSize));
        assert_eq!(
            s.decode(&RawMessage::new(0, WM_POWERBROADCAST, PBT_APMSUSPEND as usize, 0)),
            Some(NativeMessage::PowerBroadcast(PowerEvent::Suspend))
        );
        assert_eq!(
            s.decode(&RawMessage::new(0, WM_POWERBROADCAST, PBT_APMRESUMEAUTOMATIC as usize, 0)),
            Some(NativeMessage::PowerBroadcast(PowerEvent::ResumeAutomatic))
        );
        assert_eq!(
            s.decode(&RawMessage::new(0, WM_POWERBROADCAST, 0x000A, 0)),
            Some(NativeMessage::PowerBroadcast(PowerEvent::Other(0x000A)))
        );
    }

    #[test]
    fn resume_code_outside_power_broadcast_is_ignored() {
        let s = Win32Strategy;
        let raw = RawMessage::new(0, WM_MOUSEMOVE, PBT_APMRESUMEAUTOMATIC as usize, 0);
        assert_eq!(s.decode(&raw), None);
    }

    #[test]
    fn hit_test_without_window_passes_through() {
        let s = Win32Strategy;
        assert_eq!(s.decode(&RawMessage::new(0, WM_NCHITTEST, 0, 0)), None);
    }

    #[test]
    fn hit_codes_match_win32() {
        let s = Win32Strategy;
        assert_eq!(s.hit_code(HitTest::Caption), 2);
        assert_eq!(s.hit_code(HitTest::Resize(ResizeEdge::Left)), 10);
        assert_eq!(s.hit_code(HitTest::Resize(ResizeEdge::TopLeft)), 13);
        assert_eq!(s.hit_code(HitTest::Resize(ResizeEdge::BottomRight)), 17);
    }

    #[test]
    fn snap_bits() {
        assert_eq!(style_bits(NativeStyle::NONE), 0);
        assert_eq!(
            style_bits(NativeStyle::SNAP_AND_RESIZE),
            WS_MAXIMIZEBOX.0 | WS_THICKFRAME.0 | WS_CAPTION.0
        );
    }
}
