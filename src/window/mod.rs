//! Demo window for the frameless chrome
//!
//! A Win32 window whose title bar is painted by the application. This module
//! contains all window-related functionality, split into logical submodules.

pub mod manager;
pub mod painter;
pub mod proc;
pub mod state;

// Re-export main types for convenience
pub use manager::WindowManager;
