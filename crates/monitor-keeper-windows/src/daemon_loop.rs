use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Instant;

use monitor_keeper_core::ipc::Command;
use monitor_keeper_core::{Keeper, WindowResult, config};

use crate::event_loop;
use crate::system::Win32WindowSystem;

use super::daemon_handlers;
use super::daemon_threads;
use super::daemon_types::DaemonMsg;

/// The inner daemon loop, separated so cleanup always runs in `run()`.
pub(super) fn daemon_loop() -> WindowResult<()> {
    let config = config::load();
    monitor_keeper_core::log::init(&config.logging);

    monitor_keeper_core::log_info!("Daemon started (PID: {})", std::process::id());
    monitor_keeper_core::log_info!(
        "Config: max_monitors={}, capture_delay={}ms, transition_delay={}ms, log_level={}",
        config.monitors.max_monitors,
        config.timing.capture_delay_ms,
        config.timing.transition_delay_ms,
        config.logging.level
    );

    let mut keeper = Keeper::new(Win32WindowSystem, &config);
    if let Some(summary) = keeper.start() {
        monitor_keeper_core::log_info!("Tracking {} windows", summary.saved);
    }

    let (tx, rx) = mpsc::channel::<DaemonMsg>();

    // Start the Win32 event loop on its own thread.
    let (event_channel_tx, event_channel_rx) = mpsc::channel();
    let event_loop = event_loop::start(event_channel_tx)?;
    let event_bridge = daemon_threads::spawn_event_bridge(event_channel_rx, tx.clone());

    let ipc_thread = daemon_threads::spawn_ipc_listener(tx.clone());

    // Main processing loop: sleep until a message arrives or the next
    // timer is due, whichever comes first.
    loop {
        let msg = match keeper.next_deadline() {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(wait) {
                    Ok(msg) => Some(msg),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(msg) => Some(msg),
                Err(_) => break,
            },
        };

        match msg {
            Some(DaemonMsg::Event(event)) => keeper.handle_event(&event, Instant::now()),
            Some(DaemonMsg::Command(command, reply_tx)) => {
                let response = daemon_handlers::handle_command(&command, &mut keeper);
                let _ = reply_tx.send(response);
                if command == Command::Stop {
                    break;
                }
            }
            None => {}
        }

        keeper.fire_due(Instant::now());
    }

    monitor_keeper_core::log_info!("Daemon stopping");
    event_loop.stop();
    drop(tx);
    let _ = event_bridge.join();
    let _ = ipc_thread.join();

    Ok(())
}
