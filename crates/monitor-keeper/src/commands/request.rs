use monitor_keeper_core::Command;
use monitor_keeper_core::ipc::ResponseStatus;

/// Sends a one-shot command to the running daemon via IPC.
pub fn execute(command: Command) {
    if !monitor_keeper_windows::ipc::is_daemon_running() {
        eprintln!("monitor-keeper is not running. Run 'monitor-keeper start' first.");
        std::process::exit(1);
    }

    match monitor_keeper_windows::ipc::send_command(&command) {
        Ok(response) => {
            if response.status == ResponseStatus::Ok {
                if let Some(msg) = response.message {
                    println!("{msg}");
                }
            } else {
                eprintln!(
                    "Error: {}",
                    response.message.unwrap_or("unknown error".into()),
                );
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to send command: {e}");
            std::process::exit(1);
        }
    }
}
