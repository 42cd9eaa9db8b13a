use std::sync::mpsc::Sender;
use std::thread;

use monitor_keeper_core::{WindowEvent, WindowResult};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::Accessibility::{HWINEVENTHOOK, SetWinEventHook, UnhookWinEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_OBJECT_LOCATIONCHANGE, EVENT_SYSTEM_MOVESIZEEND, PostThreadMessageW,
    WINEVENT_OUTOFCONTEXT, WINEVENT_SKIPOWNPROCESS, WM_QUIT,
};

#[path = "event_loop_event_sink.rs"]
mod event_sink;
#[path = "event_loop_message_pump.rs"]
mod message_pump;
#[path = "event_loop_win_event.rs"]
mod win_event;

// Thread-local sender for the WinEvent callback and the event sink.
thread_local! {
    static EVENT_SENDER: std::cell::RefCell<Option<Sender<WindowEvent>>> =
        const { std::cell::RefCell::new(None) };
}

/// Starts the Win32 event loop on a new thread.
///
/// Hooks move/size-end and location-change events system-wide and
/// creates the hidden window that receives `WM_DISPLAYCHANGE`. Every
/// translated event is sent through `event_tx`.
pub fn start(event_tx: Sender<WindowEvent>) -> WindowResult<EventLoopHandle> {
    let (ready_tx, ready_rx) = std::sync::mpsc::channel::<Result<u32, String>>();

    let handle = thread::spawn(move || {
        EVENT_SENDER.with(|cell| {
            *cell.borrow_mut() = Some(event_tx);
        });

        let thread_id = unsafe { windows::Win32::System::Threading::GetCurrentThreadId() };

        let hooks = [
            hook_single(EVENT_SYSTEM_MOVESIZEEND),
            hook_single(EVENT_OBJECT_LOCATIONCHANGE),
        ];
        if hooks.iter().any(|h| h.is_invalid()) {
            unhook_all(&hooks);
            let _ = ready_tx.send(Err("Failed to set WinEvent hook".to_string()));
            return;
        }

        let sink = event_sink::create_event_sink();
        if sink.is_none() {
            monitor_keeper_core::log_warn!("No event sink window, display changes will be missed");
        }

        let _ = ready_tx.send(Ok(thread_id));

        message_pump::run_message_pump();

        if let Some(hwnd) = sink {
            event_sink::destroy_event_sink(hwnd);
        }
        unhook_all(&hooks);
    });

    let thread_id: u32 = ready_rx
        .recv()
        .map_err(|_| -> Box<dyn std::error::Error> {
            "event loop thread exited unexpectedly".into()
        })?
        .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

    Ok(EventLoopHandle { thread_id, handle })
}

/// Handle for controlling the event loop from the daemon.
pub struct EventLoopHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
}

impl EventLoopHandle {
    /// Signals the event loop to stop and waits for the thread to finish.
    pub fn stop(self) {
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// Hooks one event type for every process but our own.
fn hook_single(event: u32) -> HWINEVENTHOOK {
    // SAFETY: WINEVENT_OUTOFCONTEXT delivers the callback on this
    // thread through its message queue, which the pump services.
    unsafe {
        SetWinEventHook(
            event,
            event,
            None,
            Some(win_event::win_event_proc),
            0,
            0,
            WINEVENT_OUTOFCONTEXT | WINEVENT_SKIPOWNPROCESS,
        )
    }
}

fn unhook_all(hooks: &[HWINEVENTHOOK]) {
    for hook in hooks.iter().filter(|h| !h.is_invalid()) {
        unsafe {
            let _ = UnhookWinEvent(*hook);
        }
    }
}
