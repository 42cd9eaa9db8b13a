//! Ctrl+C signal handler using `SetConsoleCtrlHandler`.

use std::sync::mpsc::Sender;

use monitor_keeper_core::WindowResult;
use windows::Win32::System::Console::{CTRL_C_EVENT, SetConsoleCtrlHandler};

/// Global sender, written once by `set_handler` and read by the callback.
static SENDER: std::sync::OnceLock<Sender<()>> = std::sync::OnceLock::new();

/// Registers a Ctrl+C handler that sends `()` on the given channel.
///
/// Only the first registration in a process takes effect.
pub fn set_handler(tx: Sender<()>) -> WindowResult<()> {
    SENDER
        .set(tx)
        .map_err(|_| "Ctrl+C handler already registered")?;
    unsafe { SetConsoleCtrlHandler(Some(handler), true) }?;
    Ok(())
}

unsafe extern "system" fn handler(ctrl_type: u32) -> windows::core::BOOL {
    if ctrl_type == CTRL_C_EVENT
        && let Some(tx) = SENDER.get()
    {
        let _ = tx.send(());
    }
    windows::core::BOOL(1)
}
