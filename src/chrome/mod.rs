//! Custom window chrome
//!
//! This module contains the frameless window controller and the pieces it is
//! built from, split into logical submodules.

pub mod controller;
pub mod decorations;
pub mod hit_test;
pub mod host;
pub mod state;
pub mod strategy;
pub mod title_bar;

// Re-export main types for convenience
pub use controller::{Disposition, FramelessWindow, StateObserver};
pub use decorations::{apply_chrome_mode, ChromeMode, NativeStyle, Platform};
pub use hit_test::{HitTest, ResizeEdge};
pub use host::WindowHost;
pub use state::{WindowFlags, WindowStates};
pub use strategy::{ChromeStrategy, NativeEventResult, NativeMessage, NullStrategy, PowerEvent, RawMessage};
pub use title_bar::{StaticTitleBar, TitleBarSlot, TitleBarSurface};
