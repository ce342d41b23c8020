//! Frameless - custom window chrome for Windows desktop applications
//!
//! Removes the native title bar and border while keeping what the window
//! manager gives a decorated window for free: drag-to-move, edge and corner
//! resizing, snap, maximize/restore. The application supplies its own title
//! bar and reacts to window-state notifications.
//!
//! Native message handling exists for Windows only; other platforms get a
//! null strategy and plain borderless windows.

pub mod chrome;
pub mod config;
pub mod error;
pub mod geometry;
pub mod platform;

pub use chrome::{FramelessWindow, StaticTitleBar, TitleBarSurface, WindowHost, WindowStates};
pub use config::ChromeConfig;
pub use error::{FramelessError, FramelessResult};
