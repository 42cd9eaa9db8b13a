use std::fmt;

use crate::Rect;

/// How a window is shown, as reported by the window system.
///
/// The named variants are the values that restoration treats specially
/// or produces itself. Anything else is carried through untouched as
/// [`ShowState::Other`] with its raw platform value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowState {
    /// Shown normally (`SW_SHOWNORMAL`).
    Normal,
    /// Minimized and activated (`SW_SHOWMINIMIZED`).
    ShowMinimized,
    /// Maximized (`SW_MAXIMIZE` / `SW_SHOWMAXIMIZED`).
    Maximized,
    /// Shown at its normal position without activation (`SW_SHOWNOACTIVATE`).
    ShowNoActivate,
    /// Minimized, next top-level window activated (`SW_MINIMIZE`).
    Minimize,
    /// Minimized without activation (`SW_SHOWMINNOACTIVE`).
    ShowMinNoActive,
    /// Any other raw show command.
    Other(u32),
}

impl ShowState {
    /// Converts a raw Win32 `SW_*` value.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Normal,
            2 => Self::ShowMinimized,
            3 => Self::Maximized,
            4 => Self::ShowNoActivate,
            6 => Self::Minimize,
            7 => Self::ShowMinNoActive,
            other => Self::Other(other),
        }
    }

    /// Returns the raw Win32 `SW_*` value.
    pub fn as_raw(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::ShowMinimized => 2,
            Self::Maximized => 3,
            Self::ShowNoActivate => 4,
            Self::Minimize => 6,
            Self::ShowMinNoActive => 7,
            Self::Other(raw) => raw,
        }
    }

    /// Returns whether this is either of the minimized states.
    pub fn is_minimized(self) -> bool {
        matches!(self, Self::Minimize | Self::ShowMinimized)
    }
}

impl fmt::Display for ShowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal | Self::Other(9) => "SW_SHOWNORMAL",
            Self::Maximized => "SW_MAXIMIZE",
            Self::Minimize | Self::ShowMinimized => "SW_MINIMIZE",
            Self::ShowNoActivate => "SW_SHOWNOACTIVATE",
            Self::ShowMinNoActive => "SW_SHOWMINNOACTIVE",
            Self::Other(_) => "Unknown",
        };
        f.write_str(name)
    }
}

/// A saved window placement: the normal (restored) rectangle plus the
/// show state.
///
/// The rectangle is the window's *normal* position, which the window
/// system keeps even while the window is minimized or maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rect: Rect,
    pub show: ShowState,
}

impl Placement {
    pub fn new(rect: Rect, show: ShowState) -> Self {
        Self { rect, show }
    }

    /// Returns a copy with a different show state.
    pub fn with_show(self, show: ShowState) -> Self {
        Self { show, ..self }
    }
}
