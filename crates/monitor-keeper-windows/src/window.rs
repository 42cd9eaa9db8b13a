use std::mem;

use monitor_keeper_core::{Placement, Rect, ShowState, WindowInfo, WindowResult};

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GWL_STYLE, GetParent, GetWindowLongPtrW, GetWindowPlacement, IsWindow,
    IsWindowVisible, RealGetWindowClassW, SetWindowPlacement, WINDOWPLACEMENT,
    WPF_ASYNCWINDOWPLACEMENT,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle: a number that identifies a window to the
/// OS. This struct holds that handle and queries the OS lazily.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a `Window` from a raw handle value, so callers need not
    /// depend on the `windows` crate.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    pub fn handle(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// Returns whether the handle still identifies an existing window.
    pub fn exists(&self) -> bool {
        // SAFETY: IsWindow accepts any handle value.
        unsafe { IsWindow(Some(self.hwnd)).as_bool() }
    }

    /// Reads the attributes the tracker filters on.
    pub fn info(&self) -> WindowInfo {
        // SAFETY: these are read-only queries; an invalid handle yields
        // zero / false rather than undefined behaviour.
        unsafe {
            let style = GetWindowLongPtrW(self.hwnd, GWL_STYLE) as u32;
            let ex_style = GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) as u32;
            let has_parent = GetParent(self.hwnd).is_ok_and(|p| !p.is_invalid());

            WindowInfo {
                hwnd: self.handle(),
                visible: IsWindowVisible(self.hwnd).as_bool(),
                has_parent,
                style,
                ex_style,
            }
        }
    }

    /// Returns the real window class name (not the superclass).
    pub fn class(&self) -> WindowResult<String> {
        // SAFETY: RealGetWindowClassW writes at most buffer.len() code
        // units. 256 is the maximum class name length in Win32.
        let mut buffer = [0u16; 256];
        let length = unsafe { RealGetWindowClassW(self.hwnd, &mut buffer) };
        if length == 0 {
            return Err(format!("RealGetWindowClassW failed for {:#x}", self.handle()).into());
        }
        Ok(String::from_utf16_lossy(&buffer[..length as usize]))
    }

    /// Reads the window's restored rectangle and show state.
    pub fn placement(&self) -> WindowResult<Placement> {
        let mut wp = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };

        // SAFETY: GetWindowPlacement fills `wp`; length is set as the
        // API requires.
        unsafe { GetWindowPlacement(self.hwnd, &mut wp)? };

        let rc = wp.rcNormalPosition;
        Ok(Placement::new(
            Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom),
            ShowState::from_raw(wp.showCmd),
        ))
    }

    /// Applies a placement without waiting for the owning thread and
    /// without activating the window.
    ///
    /// `WPF_ASYNCWINDOWPLACEMENT` posts the request to the window's
    /// thread, so a hung application cannot stall the daemon.
    pub fn set_placement(&self, placement: &Placement) -> WindowResult<()> {
        let rect = placement.rect;
        let wp = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            flags: WPF_ASYNCWINDOWPLACEMENT,
            showCmd: placement.show.as_raw(),
            rcNormalPosition: RECT {
                left: rect.x,
                top: rect.y,
                right: rect.right(),
                bottom: rect.bottom(),
            },
            ..Default::default()
        };

        // SAFETY: SetWindowPlacement reads `wp`, which is fully
        // initialised above.
        unsafe { SetWindowPlacement(self.hwnd, &wp)? };
        Ok(())
    }
}
