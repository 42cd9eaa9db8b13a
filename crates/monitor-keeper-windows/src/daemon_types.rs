use std::sync::mpsc;

use monitor_keeper_core::WindowEvent;
use monitor_keeper_core::ipc::{Command, Response};

/// Internal message type for the main daemon thread.
pub(super) enum DaemonMsg {
    /// A window or display event from the event loop.
    Event(WindowEvent),
    /// A CLI command with a callback to send the response.
    Command(Command, ResponseSender),
}

/// Sends a response back to the IPC thread for the connected client.
pub(super) type ResponseSender = mpsc::Sender<Response>;
