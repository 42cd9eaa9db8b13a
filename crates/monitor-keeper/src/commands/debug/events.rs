use std::sync::mpsc;

use monitor_keeper_core::WindowSystem;
use monitor_keeper_windows::{Win32WindowSystem, Window};

/// Watches window and display events in real time. Press Ctrl+C to stop.
pub fn execute() {
    println!("Watching window events (press Ctrl+C to stop)...\n");

    let (tx, rx) = mpsc::channel();
    let event_loop = match monitor_keeper_windows::event_loop::start(tx) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start event loop: {e}");
            return;
        }
    };

    let (stop_tx, stop_rx) = mpsc::channel();
    if let Err(e) = monitor_keeper_windows::ctrl_c::set_handler(stop_tx) {
        eprintln!("Failed to install Ctrl+C handler: {e}");
        event_loop.stop();
        return;
    }

    let system = Win32WindowSystem;
    loop {
        if stop_rx.try_recv().is_ok() {
            break;
        }

        match rx.recv_timeout(std::time::Duration::from_millis(100)) {
            Ok(event) => match event.hwnd() {
                Some(hwnd) => {
                    let class = Window::from_raw(hwnd).class().unwrap_or_default();
                    println!("{event} \"{class}\"");
                }
                None => println!("{event} ({} monitors)", system.monitor_count()),
            },
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    event_loop.stop();
}
