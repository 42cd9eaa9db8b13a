use monitor_keeper_core::Command;
use monitor_keeper_core::ipc::ResponseStatus;

pub fn execute() {
    if monitor_keeper_windows::ipc::is_daemon_running() {
        match monitor_keeper_windows::ipc::send_command(&Command::Status) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!("monitor-keeper is running.");
                if let Some(msg) = response.message {
                    println!("  {msg}");
                }
            }
            Ok(response) => eprintln!(
                "monitor-keeper is running but returned an error: {}",
                response.message.unwrap_or_default()
            ),
            Err(e) => eprintln!("monitor-keeper is running but did not answer: {e}"),
        }
        return;
    }

    // Pipe isn't responding: check for a PID file left behind by a
    // daemon that was killed without a clean shutdown.
    if let Ok(Some(pid)) = monitor_keeper_core::pid::read_pid_file() {
        if monitor_keeper_windows::process::is_process_alive(pid) {
            println!("monitor-keeper process exists (PID: {pid}) but is not responding.");
        } else {
            let _ = monitor_keeper_core::pid::remove_pid_file();
            println!("monitor-keeper is not running (cleaned up stale PID file).");
        }
    } else {
        println!("monitor-keeper is not running.");
    }
}
