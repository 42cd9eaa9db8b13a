use serde::{Deserialize, Serialize};

/// The named pipe path used for IPC between CLI and daemon.
pub const PIPE_NAME: &str = r"\\.\pipe\monitor-keeper";

/// A command sent from the CLI to the daemon.
///
/// These are serialized as JSON and sent over the named pipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Request the daemon to stop.
    Stop,
    /// Request the daemon's tracking status.
    Status,
    /// Run a capture pass now, bypassing the debounce timer.
    Capture,
    /// Restore windows for the current monitor count now.
    Restore,
}

/// A response sent from the daemon back to the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    /// Whether the command succeeded.
    pub status: ResponseStatus,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Status of a daemon response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

impl Response {
    /// Creates a successful response with no message.
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: None,
        }
    }

    /// Creates a successful response with a message.
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: Some(message.into()),
        }
    }

    /// Creates an error response with a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_tagged_by_name() {
        let json = serde_json::to_string(&Command::Restore).unwrap();

        assert_eq!(json, r#"{"command":"Restore"}"#);
        assert_eq!(
            serde_json::from_str::<Command>(r#"{"command":"Capture"}"#).unwrap(),
            Command::Capture
        );
    }

    #[test]
    fn ok_response_omits_missing_message() {
        let json = serde_json::to_string(&Response::ok()).unwrap();

        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn error_response_round_trips() {
        let json = serde_json::to_string(&Response::error("no monitors")).unwrap();
        let response: Response = serde_json::from_str(&json).unwrap();

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.message.as_deref(), Some("no monitors"));
    }
}
