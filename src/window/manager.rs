//! Window manager for creating and running the demo window
//!
//! Handles window creation, wiring the chrome controller in, and the
//! message loop.

use anyhow::Result;
use log::info;
use std::sync::Arc;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{InvalidateRect, UpdateWindow};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    GetDpiForSystem, SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::*;

use frameless::geometry::{dpi_to_ratio, scale_by_ratio};
use frameless::platform::win32::Win32Host;
use frameless::{ChromeConfig, FramelessError, FramelessWindow, StaticTitleBar};

use super::state::{set_demo_state, with_demo_state, DemoState};

/// Window class name
const WINDOW_CLASS: &str = "FramelessDemoWindowClass";

/// Convert a Rust string to a wide string for Windows API
fn to_wide_string(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// The demo's top-level window
pub struct WindowManager {
    hwnd: HWND,
}

impl WindowManager {
    /// Create the window and attach the frameless chrome to it
    pub fn new(config: &ChromeConfig) -> Result<Self> {
        // Set DPI awareness
        unsafe {
            let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
        }

        let class_name = to_wide_string(WINDOW_CLASS);
        Self::register_window_class(&class_name)?;
        let hwnd = Self::create_window(&class_name, config)?;

        let mut chrome = FramelessWindow::from_config(Win32Host::new(hwnd), config)?;
        let title_bar = Arc::new(StaticTitleBar::new(config.demo.title_bar_height));
        if chrome.is_frameless() {
            chrome.set_title_bar(title_bar.clone());
        }

        chrome.on_window_state_changed(move |state| {
            info!("Window state changed: {:?}", state);
            // Maximize/restore glyph follows the state.
            unsafe {
                let _ = InvalidateRect(hwnd, None, false);
            }
        });

        set_demo_state(DemoState {
            chrome,
            title_bar,
            title: config.demo.title.clone(),
            hovered: None,
        });

        // WM_NCCALCSIZE sent during creation never reached the controller;
        // ask for the frame again now that it is installed.
        unsafe {
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

        info!("Window created ({}x{})", config.demo.width, config.demo.height);
        Ok(Self { hwnd })
    }

    /// Register the window class
    fn register_window_class(class_name: &[u16]) -> Result<()> {
        unsafe {
            let hinstance = GetModuleHandleW(None)?;

            let wc = WNDCLASSEXW {
                cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
                style: CS_HREDRAW | CS_VREDRAW | CS_DBLCLKS,
                lpfnWndProc: Some(super::proc::window_proc),
                hInstance: hinstance.into(),
                hCursor: LoadCursorW(None, IDC_ARROW)?,
                lpszClassName: windows::core::PCWSTR::from_raw(class_name.as_ptr()),
                hbrBackground: windows::Win32::Graphics::Gdi::HBRUSH::default(),
                ..Default::default()
            };

            let atom = RegisterClassExW(&wc);
            if atom == 0 {
                return Err(FramelessError::WindowCreation("failed to register window class".to_string()).into());
            }
        }
        Ok(())
    }

    /// Create the top-level window with a normal overlapped frame
    fn create_window(class_name: &[u16], config: &ChromeConfig) -> Result<HWND> {
        let title = to_wide_string(&config.demo.title);
        let ratio = dpi_to_ratio(unsafe { GetDpiForSystem() });

        unsafe {
            let hinstance = GetModuleHandleW(None)?;

            let hwnd = CreateWindowExW(
                WINDOW_EX_STYLE(0),
                windows::core::PCWSTR::from_raw(class_name.as_ptr()),
                windows::core::PCWSTR::from_raw(title.as_ptr()),
                WS_OVERLAPPEDWINDOW | WS_CLIPCHILDREN,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                scale_by_ratio(config.demo.width, ratio),
                scale_by_ratio(config.demo.height, ratio),
                None,
                None,
                hinstance,
                None,
            )?;

            if hwnd.0.is_null() {
                return Err(FramelessError::WindowCreation("CreateWindowExW returned a null handle".to_string()).into());
            }

            Ok(hwnd)
        }
    }

    /// Show the window
    pub fn show(&self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOW);
            let _ = UpdateWindow(self.hwnd);
        }
        with_demo_state(|s| s.chrome.shown());
    }

    /// Run the message loop
    pub fn run_message_loop(&self) -> Result<()> {
        unsafe {
            let mut msg = MSG::default();
            while GetMessageW(&mut msg, None, 0, 0).into() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
        Ok(())
    }
}
