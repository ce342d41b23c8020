//! Win32 implementation of the chrome boundary
//!
//! All Win32 FFI of the library lives here.

pub mod host;
pub mod strategy;

pub use host::Win32Host;
pub use strategy::Win32Strategy;

use windows::Win32::Foundation::HWND;

/// Native handle as stored in `RawMessage` and returned by `WindowHost`
pub fn handle_to_isize(hwnd: HWND) -> isize {
    hwnd.0 as isize
}

/// Inverse of `handle_to_isize`
pub fn isize_to_handle(handle: isize) -> HWND {
    HWND(handle as *mut std::ffi::c_void)
}
