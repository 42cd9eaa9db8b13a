use std::os::windows::process::CommandExt;
use std::process::Command;

/// Windows process creation flags for launching a fully detached daemon.
///
/// `CREATE_NEW_PROCESS_GROUP` (0x200): the daemon gets its own process
/// group, so Ctrl+C in the CLI terminal won't kill it.
///
/// `CREATE_NO_WINDOW` (0x08000000): the daemon doesn't get a console
/// window or inherit the parent's console handles.
const DETACH_FLAGS: u32 = 0x08000000 | 0x00000200;

pub fn execute() {
    if monitor_keeper_windows::ipc::is_daemon_running() {
        println!("monitor-keeper is already running.");
        return;
    }

    // Clean up a stale PID file from a previous unclean shutdown.
    if let Ok(Some(pid)) = monitor_keeper_core::pid::read_pid_file() {
        if monitor_keeper_windows::process::is_process_alive(pid) {
            println!("monitor-keeper process exists (PID: {pid}) but is not responding.");
            return;
        }
        let _ = monitor_keeper_core::pid::remove_pid_file();
    }

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: could not locate the current executable: {e}");
            std::process::exit(1);
        }
    };

    // Re-run ourselves with the hidden `daemon` subcommand, detached so
    // the CLI can exit immediately.
    let spawned = Command::new(exe)
        .arg("daemon")
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn();

    match spawned {
        Ok(mut child) => {
            let pid = child.id();
            let _ = child.try_wait();
            println!("monitor-keeper started (PID: {pid}).");
            if let Some(path) = monitor_keeper_core::config::config_path() {
                println!("Config: {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: failed to start daemon: {e}");
            std::process::exit(1);
        }
    }
}
