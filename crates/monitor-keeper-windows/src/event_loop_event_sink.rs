use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, RegisterClassW, WM_DISPLAYCHANGE, WNDCLASSW,
    WS_EX_TOOLWINDOW,
};
use windows::core::w;

use monitor_keeper_core::WindowEvent;

use super::EVENT_SENDER;

/// Creates a hidden window that receives `WM_DISPLAYCHANGE`.
///
/// Must NOT be a message-only window (`HWND_MESSAGE` parent) because those
/// do not receive broadcast messages. Instead we create a regular hidden
/// window with `WS_EX_TOOLWINDOW` to keep it out of the taskbar.
pub(super) fn create_event_sink() -> Option<HWND> {
    unsafe {
        let class_name = w!("MonitorKeeperEventSink");
        let wc = WNDCLASSW {
            lpfnWndProc: Some(event_sink_proc),
            lpszClassName: class_name,
            ..Default::default()
        };

        if RegisterClassW(&wc) == 0 {
            monitor_keeper_core::log_error!("Failed to register MonitorKeeperEventSink class");
            return None;
        }

        // No WS_VISIBLE and no HWND_MESSAGE parent.
        let hwnd = CreateWindowExW(
            WS_EX_TOOLWINDOW,
            class_name,
            w!("MonitorKeeperEventSink"),
            Default::default(),
            0,
            0,
            0,
            0,
            None,
            None,
            None,
            None,
        );

        match hwnd {
            Ok(h) if !h.is_invalid() => Some(h),
            _ => {
                monitor_keeper_core::log_error!("Failed to create MonitorKeeperEventSink window");
                None
            }
        }
    }
}

pub(super) fn destroy_event_sink(hwnd: HWND) {
    unsafe {
        let _ = DestroyWindow(hwnd);
    }
}

/// WNDPROC for the event sink window.
///
/// Forwards `WM_DISPLAYCHANGE` as `DisplayChanged`; everything else goes
/// to `DefWindowProcW`.
unsafe extern "system" fn event_sink_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_DISPLAYCHANGE {
        EVENT_SENDER.with(|cell| {
            if let Some(sender) = cell.borrow().as_ref() {
                let _ = sender.send(WindowEvent::DisplayChanged);
            }
        });
    }
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}
