//! Restore pass: put every live window back where it was the last time
//! this many monitors were connected.

use crate::placement::{Placement, ShowState};
use crate::store::RecordStore;
use crate::window::WindowSystem;

/// What a restore pass did, for logging and status output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Windows whose saved placement was applied.
    pub restored: usize,
    /// Windows skipped because the handle is gone or now belongs to a
    /// different window class.
    pub skipped: usize,
    /// Windows for which the window system rejected the placement.
    pub failed: usize,
}

/// Returns the placements to apply, in order, to reproduce `saved`.
///
/// Nothing is ever activated. A maximized window is first shown at its
/// saved normal rectangle, which moves it to the right monitor, and only
/// then maximized: maximizing directly would maximize it on whichever
/// monitor it currently sits on.
pub fn placement_steps(saved: &Placement) -> Vec<Placement> {
    match saved.show {
        ShowState::Maximized => vec![saved.with_show(ShowState::ShowNoActivate), *saved],
        s if s.is_minimized() => vec![saved.with_show(ShowState::ShowMinNoActive)],
        ShowState::Normal => vec![saved.with_show(ShowState::ShowNoActivate)],
        _ => vec![*saved],
    }
}

/// Runs one restore pass for `monitors` monitors.
///
/// Returns `None` without doing anything when `monitors` is outside the
/// store's range. Records without a placement saved at exactly
/// `monitors` are left alone. Before touching a window its handle is
/// checked for liveness and its class name compared with the one saved,
/// since handles are recycled by the OS and no destroy notification
/// reaches us.
pub fn restore(
    store: &RecordStore,
    system: &impl WindowSystem,
    monitors: usize,
) -> Option<RestoreSummary> {
    let range = store.range();
    if !range.contains(monitors) {
        return None;
    }

    let mut summary = RestoreSummary::default();
    for record in store.live() {
        let (Some(hwnd), Some(saved)) = (record.hwnd(), record.placement(range, monitors)) else {
            continue;
        };

        if !system.is_window(hwnd) {
            crate::log_debug!("skip 0x{hwnd:X}: window no longer exists");
            summary.skipped += 1;
            continue;
        }

        match system.class_name(hwnd) {
            Ok(class) if class == record.class_name() => {}
            Ok(class) => {
                crate::log_debug!(
                    "skip 0x{hwnd:X}: class changed from {} to {class}",
                    record.class_name()
                );
                summary.skipped += 1;
                continue;
            }
            Err(e) => {
                crate::log_debug!("skip 0x{hwnd:X}: class name failed: {e}");
                summary.skipped += 1;
                continue;
            }
        }

        let applied = placement_steps(saved)
            .iter()
            .try_for_each(|step| system.set_placement(hwnd, step));

        match applied {
            Ok(()) => {
                crate::log_debug!(
                    "Restored {} at {} monitors to {} {}",
                    record.class_name(),
                    monitors,
                    saved.rect,
                    saved.show
                );
                summary.restored += 1;
            }
            Err(e) => {
                crate::log_debug!("restore 0x{hwnd:X} ({}) failed: {e}", record.class_name());
                summary.failed += 1;
            }
        }
    }

    Some(summary)
}
