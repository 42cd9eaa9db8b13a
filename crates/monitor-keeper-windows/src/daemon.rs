use monitor_keeper_core::WindowResult;
use monitor_keeper_core::pid;

#[path = "daemon_handlers.rs"]
mod daemon_handlers;
#[path = "daemon_ipc.rs"]
mod daemon_ipc;
#[path = "daemon_loop.rs"]
mod daemon_loop;
#[path = "daemon_threads.rs"]
mod daemon_threads;
#[path = "daemon_types.rs"]
mod daemon_types;

/// Runs the monitor-keeper daemon.
///
/// Starts background threads for the Win32 event loop and the IPC
/// listener. The main thread owns the keeper and its timers.
pub fn run() -> WindowResult<()> {
    pid::write_pid_file()?;
    eprintln!("monitor-keeper daemon started.");

    let result = daemon_loop::daemon_loop();

    let _ = pid::remove_pid_file();

    result
}
