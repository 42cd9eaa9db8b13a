pub mod capture;
pub mod config;
pub mod event;
pub mod ipc;
pub mod keeper;
pub mod log;
pub mod pid;
pub mod placement;
pub mod record;
pub mod rect;
pub mod restore;
pub mod store;
pub mod timer;
pub mod transition;
pub mod window;

#[cfg(test)]
mod fake;

pub use capture::CaptureSummary;
pub use config::Config;
pub use event::WindowEvent;
pub use ipc::{Command, PIPE_NAME, Response};
pub use keeper::{Keeper, KeeperStatus};
pub use placement::{Placement, ShowState};
pub use record::{MonitorRange, WindowRecord};
pub use rect::Rect;
pub use restore::RestoreSummary;
pub use store::RecordStore;
pub use transition::TransitionState;
pub use window::{WindowInfo, WindowResult, WindowSystem};
