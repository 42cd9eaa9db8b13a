use crate::Placement;

/// A boxed error type for window-system operations.
///
/// Any error type that implements the `Error` trait can be boxed into this.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Any of the bits that make up `WS_OVERLAPPEDWINDOW`
/// (caption, system menu, thick frame, minimize and maximize boxes).
pub const WS_OVERLAPPEDWINDOW: u32 = 0x00CF_0000;

/// `WS_EX_APPWINDOW`: forces a top-level window onto the taskbar.
pub const WS_EX_APPWINDOW: u32 = 0x0004_0000;

/// `WS_EX_NOACTIVATE`: the window never becomes the foreground window.
pub const WS_EX_NOACTIVATE: u32 = 0x0800_0000;

/// A snapshot of a top-level window as seen during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowInfo {
    /// Raw window handle.
    pub hwnd: usize,
    /// Whether the window is currently visible.
    pub visible: bool,
    /// Whether the window has a parent (owned popups and children do).
    pub has_parent: bool,
    /// `GWL_STYLE` bits.
    pub style: u32,
    /// `GWL_EXSTYLE` bits.
    pub ex_style: u32,
}

impl WindowInfo {
    /// Returns whether this window should be tracked.
    ///
    /// Tracked windows are visible, parentless, carry at least one
    /// overlapped-window style bit or the app-window extended style,
    /// and are not no-activate surfaces. Tool windows are allowed
    /// through: they get rearranged by the OS too.
    pub fn is_trackable(&self) -> bool {
        if !self.visible || self.has_parent {
            return false;
        }
        let overlapped = self.style & WS_OVERLAPPEDWINDOW != 0;
        let app_window = self.ex_style & WS_EX_APPWINDOW != 0;
        let no_activate = self.ex_style & WS_EX_NOACTIVATE != 0;

        (overlapped || app_window) && !no_activate
    }
}

/// Platform-agnostic access to the window system.
///
/// Each platform crate (e.g. `monitor-keeper-windows`) provides its own
/// implementation. All calls are synchronous and are made from the
/// single thread that owns the [`Keeper`](crate::Keeper).
pub trait WindowSystem {
    /// Returns the number of active display monitors.
    fn monitor_count(&self) -> usize;

    /// Returns every top-level window, eligible or not.
    fn top_level_windows(&self) -> Vec<WindowInfo>;

    /// Returns whether the handle still refers to an existing window.
    fn is_window(&self, hwnd: usize) -> bool;

    /// Returns the window class name.
    fn class_name(&self, hwnd: usize) -> WindowResult<String>;

    /// Returns the window's current placement.
    fn placement(&self, hwnd: usize) -> WindowResult<Placement>;

    /// Applies a placement.
    ///
    /// Implementations must apply it asynchronously (so a hung
    /// application cannot block the caller) and must not activate
    /// the window.
    fn set_placement(&self, hwnd: usize, placement: &Placement) -> WindowResult<()>;
}
