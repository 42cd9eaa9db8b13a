//! Win32 implementation of the monitor-keeper window system, plus the
//! daemon that drives the engine from Win32 events.

#![cfg(windows)]

/// Ctrl+C handling for the foreground daemon.
pub mod ctrl_c;

/// Daemon main loop.
pub mod daemon;

/// Win32 top-level window enumeration.
pub mod enumerate;

/// Raw WinEvent translation.
pub mod event;

/// WinEvent hook and display-change listener thread.
pub mod event_loop;

/// IPC via Named Pipes.
pub mod ipc;

/// Monitor queries.
pub mod monitor;

/// Process utilities (alive check, kill).
pub mod process;

/// `WindowSystem` implementation backed by Win32.
pub mod system;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use enumerate::enumerate_windows;
pub use system::Win32WindowSystem;
pub use window::Window;
