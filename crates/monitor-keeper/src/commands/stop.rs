use monitor_keeper_core::ipc::ResponseStatus;

pub fn execute() {
    // Try graceful shutdown via IPC first.
    if monitor_keeper_windows::ipc::is_daemon_running() {
        let command = monitor_keeper_core::Command::Stop;
        match monitor_keeper_windows::ipc::send_command(&command) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!("monitor-keeper stopped.");
                let _ = monitor_keeper_core::pid::remove_pid_file();
                return;
            }
            Ok(response) => {
                eprintln!(
                    "Error: {}",
                    response.message.unwrap_or("unknown error".into())
                );
                return;
            }
            Err(e) => eprintln!("IPC failed: {e}"),
        }
    }

    // The pipe is gone but the process may still be alive (e.g. the IPC
    // thread died). Fall back to the PID file.
    match monitor_keeper_core::pid::read_pid_file() {
        Ok(Some(pid)) if monitor_keeper_windows::process::is_process_alive(pid) => {
            if monitor_keeper_windows::process::kill_process(pid) {
                let _ = monitor_keeper_core::pid::remove_pid_file();
                println!("monitor-keeper stopped (killed PID {pid}).");
            } else {
                eprintln!("Failed to kill process {pid}.");
                std::process::exit(1);
            }
        }
        _ => {
            println!("monitor-keeper is not running.");
        }
    }
}
