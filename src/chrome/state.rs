//! Window state and decoration flag sets
//!
//! Both are small bit sets. `WindowStates` is what observers receive on every
//! transition; `WindowFlags` is the host's generic decoration description.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Minimized / maximized / full-screen bits. The empty set is "normal".
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowStates(u8);

impl WindowStates {
    pub const NORMAL: WindowStates = WindowStates(0);
    pub const MINIMIZED: WindowStates = WindowStates(1 << 0);
    pub const MAXIMIZED: WindowStates = WindowStates(1 << 1);
    pub const FULL_SCREEN: WindowStates = WindowStates(1 << 2);

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn contains(&self, other: WindowStates) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub fn is_normal(&self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: WindowStates) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: WindowStates) {
        self.0 &= !other.0;
    }

    /// Maximized but not covering the whole screen
    pub fn is_maximized_windowed(&self) -> bool {
        self.contains(Self::MAXIMIZED) && !self.contains(Self::FULL_SCREEN)
    }
}

impl BitOr for WindowStates {
    type Output = WindowStates;

    fn bitor(self, rhs: Self) -> Self::Output {
        WindowStates(self.0 | rhs.0)
    }
}

impl BitOrAssign for WindowStates {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for WindowStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_normal() {
            return write!(f, "WindowStates(NORMAL)");
        }
        let names: Vec<&str> = [
            (Self::MINIMIZED, "MINIMIZED"),
            (Self::MAXIMIZED, "MAXIMIZED"),
            (Self::FULL_SCREEN, "FULL_SCREEN"),
        ]
        .iter()
        .filter(|(bit, _)| self.contains(*bit))
        .map(|(_, name)| *name)
        .collect();
        write!(f, "WindowStates({})", names.join(" | "))
    }
}

/// Generic (toolkit-level) decoration flags of a top-level window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowFlags(u32);

impl WindowFlags {
    pub const EMPTY: WindowFlags = WindowFlags(0);
    pub const TITLE: WindowFlags = WindowFlags(1 << 0);
    pub const BORDER: WindowFlags = WindowFlags(1 << 1);
    pub const SYSTEM_MENU: WindowFlags = WindowFlags(1 << 2);
    pub const MINIMIZE_BUTTON: WindowFlags = WindowFlags(1 << 3);
    pub const MAXIMIZE_BUTTON: WindowFlags = WindowFlags(1 << 4);
    pub const CLOSE_BUTTON: WindowFlags = WindowFlags(1 << 5);
    /// Ask the host to drop every native decoration
    pub const FRAMELESS_HINT: WindowFlags = WindowFlags(1 << 6);

    /// What a freshly created, decorated top-level window carries
    pub const DEFAULT_TOP_LEVEL: WindowFlags = WindowFlags(
        Self::TITLE.0
            | Self::BORDER.0
            | Self::SYSTEM_MENU.0
            | Self::MINIMIZE_BUTTON.0
            | Self::MAXIMIZE_BUTTON.0
            | Self::CLOSE_BUTTON.0,
    );

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: WindowFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: WindowFlags) -> WindowFlags {
        WindowFlags(self.0 | other.0)
    }
}

impl BitOr for WindowFlags {
    type Output = WindowFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}
