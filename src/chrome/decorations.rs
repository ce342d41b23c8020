//! Chrome mode: which decorations a window keeps once it goes frameless
//!
//! Two layers have to agree. The generic flags tell the host to drop its
//! native frame; the native style bits give back what the OS needs for snap,
//! maximize and thick-frame resizing. The non-client area those bits bring
//! back is removed again when the size calculation message is answered.

use super::state::WindowFlags;

/// Platform the chrome runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Other,
}

impl Platform {
    /// Platform of the current build target
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    pub fn has_native_chrome(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

/// Native window-style capabilities re-asserted underneath the generic flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeStyle {
    pub maximize_box: bool,
    pub thick_frame: bool,
    pub caption: bool,
}

impl NativeStyle {
    pub const NONE: NativeStyle = NativeStyle {
        maximize_box: false,
        thick_frame: false,
        caption: false,
    };

    /// Maximize box, thick frame and caption
    pub const SNAP_AND_RESIZE: NativeStyle = NativeStyle {
        maximize_box: true,
        thick_frame: true,
        caption: true,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// The decoration set a window ends up with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChromeMode {
    pub flags: WindowFlags,
    pub native: NativeStyle,
}

/// Compute the decorations for `frameless` on `platform`, starting from the
/// window's `defaults`. Applying the result's flags as new defaults yields the
/// same mode again.
pub fn apply_chrome_mode(frameless: bool, platform: Platform, defaults: WindowFlags) -> ChromeMode {
    if !frameless {
        return ChromeMode {
            flags: defaults,
            native: NativeStyle::NONE,
        };
    }

    let native = if platform.has_native_chrome() {
        NativeStyle::SNAP_AND_RESIZE
    } else {
        NativeStyle::NONE
    };

    ChromeMode {
        flags: defaults | WindowFlags::FRAMELESS_HINT,
        native,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_frameless_keeps_defaults() {
        for platform in [Platform::Windows, Platform::Other] {
            let mode = apply_chrome_mode(false, platform, WindowFlags::DEFAULT_TOP_LEVEL);
            assert_eq!(mode.flags, WindowFlags::DEFAULT_TOP_LEVEL);
            assert!(mode.native.is_empty());
        }
    }

    #[test]
    fn frameless_on_windows_restores_snap_bits() {
        let mode = apply_chrome_mode(true, Platform::Windows, WindowFlags::DEFAULT_TOP_LEVEL);
        assert!(mode.flags.contains(WindowFlags::FRAMELESS_HINT));
        assert!(mode.flags.contains(WindowFlags::DEFAULT_TOP_LEVEL));
        assert_eq!(mode.native, NativeStyle::SNAP_AND_RESIZE);
    }

    #[test]
    fn frameless_elsewhere_only_sets_the_hint() {
        let mode = apply_chrome_mode(true, Platform::Other, WindowFlags::DEFAULT_TOP_LEVEL);
        assert!(mode.flags.contains(WindowFlags::FRAMELESS_HINT));
        assert!(mode.native.is_empty());
    }

    #[test]
    fn applying_twice_is_stable() {
        let once = apply_chrome_mode(true, Platform::Windows, WindowFlags::DEFAULT_TOP_LEVEL);
        let twice = apply_chrome_mode(true, Platform::Windows, once.flags);
        assert_eq!(once, twice);
    }
}
