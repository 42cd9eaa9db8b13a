use std::io::{BufRead, BufReader, Write};
use std::os::windows::io::FromRawHandle;

use monitor_keeper_core::WindowResult;
use monitor_keeper_core::ipc::{Command, PIPE_NAME, Response};
use serde_json::Value;
use windows::Win32::Foundation::{
    CloseHandle, DUPLICATE_SAME_ACCESS, DuplicateHandle, HANDLE, INVALID_HANDLE_VALUE,
};
use windows::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_NONE, FlushFileBuffers, OPEN_EXISTING, PIPE_ACCESS_DUPLEX,
};
use windows::Win32::System::Pipes::{
    ConnectNamedPipe, CreateNamedPipeW, DisconnectNamedPipe, PIPE_READMODE_BYTE, PIPE_TYPE_BYTE,
    PIPE_UNLIMITED_INSTANCES, PIPE_WAIT, WaitNamedPipeW,
};
use windows::Win32::System::Threading::GetCurrentProcess;
use windows::core::HSTRING;

const GENERIC_READ_WRITE: u32 = 0x80000000 | 0x40000000;

/// Pipe buffer size in bytes. Commands and responses are one short
/// JSON line each.
const PIPE_BUFFER_SIZE: u32 = 512;

/// A Named Pipe server that the daemon uses to accept CLI connections.
///
/// Each connection carries exactly one command line and one response
/// line.
pub struct PipeServer {
    handle: HANDLE,
}

impl PipeServer {
    /// Creates a new pipe instance without waiting for a client.
    pub fn create() -> WindowResult<Self> {
        let pipe_name = HSTRING::from(PIPE_NAME);

        // SAFETY: CreateNamedPipeW creates a new named pipe instance.
        // We pass valid parameters and check for INVALID_HANDLE_VALUE.
        let handle = unsafe {
            CreateNamedPipeW(
                &pipe_name,
                PIPE_ACCESS_DUPLEX,
                PIPE_TYPE_BYTE | PIPE_READMODE_BYTE | PIPE_WAIT,
                PIPE_UNLIMITED_INSTANCES,
                PIPE_BUFFER_SIZE,
                PIPE_BUFFER_SIZE,
                0,
                None,
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            return Err("Failed to create named pipe".into());
        }

        Ok(Self { handle })
    }

    /// Blocks until a client connects, reads a command, and returns it.
    pub fn accept_command(&self) -> WindowResult<Command> {
        // SAFETY: ConnectNamedPipe blocks until a client connects.
        unsafe {
            ConnectNamedPipe(self.handle, None)?;
        }

        let line = read_line(self.handle)?;
        match serde_json::from_str(&line) {
            Ok(command) => Ok(command),
            Err(e) => {
                // Answer the client before dropping it so it does not
                // hang on an unknown command.
                let _ = self.send_response(&Response::error(format!(
                    "unrecognised command {}",
                    describe(&line)
                )));
                Err(e.into())
            }
        }
    }

    /// Sends a response back to the connected client and disconnects.
    pub fn send_response(&self, response: &Response) -> WindowResult<()> {
        write_line(self.handle, &serde_json::to_string(response)?)?;

        // SAFETY: FlushFileBuffers blocks until the client has read all
        // data from the pipe. Without this, DisconnectNamedPipe would
        // discard unread data and the client would get error 233.
        unsafe {
            let _ = FlushFileBuffers(self.handle);
        }

        // SAFETY: DisconnectNamedPipe frees the instance for the next
        // client.
        unsafe {
            DisconnectNamedPipe(self.handle)?;
        }

        Ok(())
    }
}

impl Drop for PipeServer {
    fn drop(&mut self) {
        // SAFETY: the server owns its pipe handle exclusively.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// RAII guard that closes a HANDLE on drop.
struct HandleGuard(HANDLE);

impl Drop for HandleGuard {
    fn drop(&mut self) {
        // SAFETY: the guard owns this handle exclusively.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Sends a command to the daemon and waits for its response.
///
/// Used by the CLI. The client handle is closed when the guard goes out
/// of scope, on error paths too.
pub fn send_command(command: &Command) -> WindowResult<Response> {
    let pipe_name = HSTRING::from(PIPE_NAME);

    // SAFETY: CreateFileW opens an existing named pipe as a client.
    let handle = unsafe {
        CreateFileW(
            &pipe_name,
            GENERIC_READ_WRITE,
            FILE_SHARE_NONE,
            None,
            OPEN_EXISTING,
            Default::default(),
            None,
        )?
    };
    let _guard = HandleGuard(handle);

    write_line(handle, &serde_json::to_string(command)?)?;
    let line = read_line(handle)?;

    Ok(serde_json::from_str(&line)?)
}

/// Checks whether the daemon's named pipe exists.
///
/// `WaitNamedPipeW` with a 1 ms timeout checks for an instance without
/// consuming a connection, unlike `CreateFileW`.
pub fn is_daemon_running() -> bool {
    let pipe_name = HSTRING::from(PIPE_NAME);

    // SAFETY: WaitNamedPipeW only queries pipe availability.
    unsafe { WaitNamedPipeW(&pipe_name, 1).as_bool() }
}

fn read_line(handle: HANDLE) -> WindowResult<String> {
    let mut reader = BufReader::new(duplicate_handle_as_file(handle)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn write_line(handle: HANDLE, json: &str) -> WindowResult<()> {
    let mut writer = duplicate_handle_as_file(handle)?;
    writeln!(writer, "{json}")?;
    writer.flush()?;
    Ok(())
}

/// Names the command a client sent, for the error reply.
fn describe(line: &str) -> String {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|v| v.get("command").and_then(Value::as_str).map(str::to_string))
        .map_or_else(|| "(malformed)".to_string(), |name| format!("'{name}'"))
}

/// Duplicates a HANDLE and wraps it as a `std::fs::File`.
///
/// The original handle and the File close independently, so there is no
/// double close.
fn duplicate_handle_as_file(handle: HANDLE) -> WindowResult<std::fs::File> {
    let mut dup = HANDLE::default();

    // SAFETY: DuplicateHandle creates a copy of the handle. The duplicate
    // is owned by the returned File and closed when it's dropped.
    unsafe {
        DuplicateHandle(
            GetCurrentProcess(),
            handle,
            GetCurrentProcess(),
            &mut dup,
            0,
            false,
            DUPLICATE_SAME_ACCESS,
        )?;

        Ok(std::fs::File::from_raw_handle(dup.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_unknown_command() {
        assert_eq!(describe(r#"{"command":"Focus"}"#), "'Focus'");
    }

    #[test]
    fn describe_handles_garbage() {
        assert_eq!(describe("not json"), "(malformed)");
        assert_eq!(describe(r#"{"verb":"Stop"}"#), "(malformed)");
    }
}
