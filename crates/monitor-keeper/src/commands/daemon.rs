pub fn execute() {
    if let Err(e) = monitor_keeper_windows::daemon::run() {
        eprintln!("Daemon error: {e}");
        std::process::exit(1);
    }
}
