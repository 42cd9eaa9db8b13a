use monitor_keeper_core::{Placement, WindowInfo, WindowResult, WindowSystem};

use crate::enumerate::enumerate_windows;
use crate::monitor;
use crate::window::Window;

/// The live Win32 window system.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32WindowSystem;

impl WindowSystem for Win32WindowSystem {
    fn monitor_count(&self) -> usize {
        monitor::monitor_count()
    }

    fn top_level_windows(&self) -> Vec<WindowInfo> {
        match enumerate_windows() {
            Ok(windows) => windows.iter().map(Window::info).collect(),
            Err(e) => {
                monitor_keeper_core::log_warn!("EnumWindows failed: {e}");
                Vec::new()
            }
        }
    }

    fn is_window(&self, hwnd: usize) -> bool {
        Window::from_raw(hwnd).exists()
    }

    fn class_name(&self, hwnd: usize) -> WindowResult<String> {
        Window::from_raw(hwnd).class()
    }

    fn placement(&self, hwnd: usize) -> WindowResult<Placement> {
        Window::from_raw(hwnd).placement()
    }

    fn set_placement(&self, hwnd: usize, placement: &Placement) -> WindowResult<()> {
        Window::from_raw(hwnd).set_placement(placement)
    }
}
