use monitor_keeper_core::WindowEvent;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_OBJECT_LOCATIONCHANGE, EVENT_SYSTEM_MOVESIZEEND,
};

/// Object ID indicating the event applies to the window itself,
/// not a child element like a caret or scrollbar.
const OBJID_WINDOW: i32 = 0;

/// Translates a raw WinEvent into a platform-agnostic `WindowEvent`.
///
/// Returns `None` for events on child objects (carets, scrollbars,
/// cursors), events without a window, and event types the keeper does
/// not track.
pub fn translate(event: u32, hwnd: HWND, id_object: i32) -> Option<WindowEvent> {
    if id_object != OBJID_WINDOW || hwnd.is_invalid() {
        return None;
    }

    let hwnd = hwnd.0 as usize;

    match event {
        e if e == EVENT_SYSTEM_MOVESIZEEND => Some(WindowEvent::Moved { hwnd }),
        e if e == EVENT_OBJECT_LOCATIONCHANGE => Some(WindowEvent::LocationChanged { hwnd }),
        _ => None,
    }
}
