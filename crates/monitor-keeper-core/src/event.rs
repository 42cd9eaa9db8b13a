use std::fmt;

/// A platform-agnostic window-system notification.
///
/// Platform crates translate raw OS events into these variants.
/// Only the notifications that drive capture and restoration are
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// A window finished an interactive move or resize.
    Moved { hwnd: usize },

    /// A window's position, size or z-order changed for any reason,
    /// including the OS rearranging windows after a monitor change.
    LocationChanged { hwnd: usize },

    /// The display configuration changed (monitor added, removed,
    /// or resolution changed).
    DisplayChanged,
}

impl WindowEvent {
    /// Returns the window handle associated with this event, if any.
    pub fn hwnd(&self) -> Option<usize> {
        match self {
            Self::Moved { hwnd } | Self::LocationChanged { hwnd } => Some(*hwnd),
            Self::DisplayChanged => None,
        }
    }

    /// Returns whether this event should schedule a capture pass.
    pub fn triggers_capture(&self) -> bool {
        matches!(self, Self::Moved { .. } | Self::LocationChanged { .. })
    }
}

impl fmt::Display for WindowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { hwnd } => write!(f, "Moved           0x{hwnd:X}"),
            Self::LocationChanged { hwnd } => write!(f, "LocationChanged 0x{hwnd:X}"),
            Self::DisplayChanged => f.write_str("DisplayChanged"),
        }
    }
}
