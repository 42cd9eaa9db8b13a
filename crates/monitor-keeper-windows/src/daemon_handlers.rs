use monitor_keeper_core::Keeper;
use monitor_keeper_core::ipc::{Command, Response};

use crate::system::Win32WindowSystem;

/// Executes a CLI command against the keeper.
pub(super) fn handle_command(
    command: &Command,
    keeper: &mut Keeper<Win32WindowSystem>,
) -> Response {
    match command {
        Command::Stop => Response::ok(),
        Command::Status => Response::ok_with_message(keeper.status().to_string()),
        Command::Capture => match keeper.capture_now() {
            Some(summary) => Response::ok_with_message(format!(
                "Saved {} of {} windows",
                summary.saved, summary.windows
            )),
            None => Response::error(not_applied_reason(keeper, "capture")),
        },
        Command::Restore => match keeper.restore_now() {
            Some(summary) => Response::ok_with_message(format!(
                "Restored {} windows ({} skipped, {} failed)",
                summary.restored, summary.skipped, summary.failed
            )),
            None => Response::error(not_applied_reason(keeper, "restore")),
        },
    }
}

fn not_applied_reason(keeper: &Keeper<Win32WindowSystem>, what: &str) -> String {
    let status = keeper.status();
    if status.live_monitors != status.last_known_monitors || keeper.tracker().is_change_pending() {
        format!("Cannot {what} while the display configuration is changing")
    } else {
        format!(
            "Cannot {what} with {} monitors (layouts are kept for {}-{})",
            status.live_monitors,
            status.range.min(),
            status.range.max()
        )
    }
}
