//! Platform layer
//!
//! Picks the native message strategy for the build target. Only Windows has
//! one; everything else gets `NullStrategy` and default window behaviour.

#[cfg(windows)]
pub mod win32;

use log::debug;

use crate::chrome::strategy::ChromeStrategy;
#[cfg(not(windows))]
use crate::chrome::strategy::NullStrategy;

/// Strategy for the current build target
pub fn default_strategy() -> Box<dyn ChromeStrategy> {
    #[cfg(windows)]
    let strategy: Box<dyn ChromeStrategy> = Box::new(win32::Win32Strategy);
    #[cfg(not(windows))]
    let strategy: Box<dyn ChromeStrategy> = Box::new(NullStrategy);

    debug!("Using {} chrome strategy", strategy.name());
    strategy
}
