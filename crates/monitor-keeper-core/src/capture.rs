//! Capture pass: snapshot the placement of every trackable window for
//! the current monitor count.

use crate::store::RecordStore;
use crate::window::WindowSystem;

/// What a capture pass did, for logging and status output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureSummary {
    /// Trackable windows found during enumeration.
    pub windows: usize,
    /// Windows whose placement was stored.
    pub saved: usize,
}

/// Runs one capture pass at `monitors` monitors.
///
/// Returns `None` without touching the store when `monitors` is outside
/// the store's range. Otherwise every occupied slot is aged first, then
/// every trackable window is refreshed and its placement saved into the
/// slot for `monitors`. A window whose placement cannot be read is still
/// refreshed so it does not go stale.
pub fn capture(
    store: &mut RecordStore,
    system: &impl WindowSystem,
    monitors: usize,
) -> Option<CaptureSummary> {
    let range = store.range();
    if !range.contains(monitors) {
        return None;
    }

    store.tag_all_unused();

    let mut summary = CaptureSummary::default();
    for info in system.top_level_windows() {
        if !info.is_trackable() {
            continue;
        }
        summary.windows += 1;

        let record = store.find_or_allocate(info.hwnd);
        let class = match system.class_name(info.hwnd) {
            Ok(class) => class,
            Err(e) => {
                crate::log_debug!("class name for 0x{:X} failed: {e}", info.hwnd);
                record.class_name().to_owned()
            }
        };
        record.refresh(class);

        match system.placement(info.hwnd) {
            Ok(placement) => {
                crate::log_debug!(
                    "Save position for {}, monitors {monitors}, x={}, y={}, show={}",
                    record.class_name(),
                    placement.rect.x,
                    placement.rect.y,
                    placement.show
                );
                record.set_placement(range, monitors, placement);
                summary.saved += 1;
            }
            Err(e) => {
                crate::log_debug!("placement for 0x{:X} failed: {e}", info.hwnd);
            }
        }
    }

    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeWindow, FakeWindowSystem};
    use crate::record::MonitorRange;
    use crate::{Placement, Rect, ShowState};

    fn placement(x: i32, show: ShowState) -> Placement {
        Placement::new(Rect::new(x, 10, 800, 600), show)
    }

    fn store() -> RecordStore {
        RecordStore::new(MonitorRange::default())
    }

    #[test]
    fn out_of_range_counts_leave_store_unchanged() {
        // Arrange
        let system = FakeWindowSystem::new(1);
        system.add(FakeWindow::app(0xA, "Notepad", placement(0, ShowState::Normal)));
        let mut store = store();
        capture(&mut store, &system, 2);
        let before: Vec<_> = store.tracked().cloned().collect();

        // Act
        let low = capture(&mut store, &system, 1);
        let high = capture(&mut store, &system, 6);
        let zero = capture(&mut store, &system, 0);

        // Assert
        assert_eq!((low, high, zero), (None, None, None));
        let after: Vec<_> = store.tracked().cloned().collect();
        assert_eq!(after, before);
    }

    #[test]
    fn saves_placement_into_slot_for_current_count() {
        // Arrange
        let system = FakeWindowSystem::new(3);
        system.add(FakeWindow::app(0xA, "Notepad", placement(1920, ShowState::Maximized)));
        let mut store = store();

        // Act
        let summary = capture(&mut store, &system, 3);

        // Assert
        assert_eq!(summary, Some(CaptureSummary { windows: 1, saved: 1 }));
        let record = store.get(0xA).expect("record");
        let range = store.range();
        assert_eq!(record.class_name(), "Notepad");
        assert_eq!(
            record.placement(range, 3),
            Some(&placement(1920, ShowState::Maximized))
        );
        assert_eq!(record.placement(range, 2), None);
    }

    #[test]
    fn ineligible_windows_never_get_a_slot() {
        // Arrange
        let system = FakeWindowSystem::new(2);
        let p = placement(0, ShowState::Normal);
        system.add(FakeWindow::app(0xA, "Hidden", p).hidden());
        system.add(FakeWindow::app(0xB, "Child", p).with_parent());
        system.add(FakeWindow::app(0xC, "Tooltip", p).no_activate());
        system.add(FakeWindow::popup(0xD, "Popup", p));
        let mut store = store();

        // Act
        let summary = capture(&mut store, &system, 2);

        // Assert
        assert_eq!(summary, Some(CaptureSummary::default()));
        assert_eq!(store.tracked().count(), 0);
    }

    #[test]
    fn capture_twice_is_idempotent() {
        // Arrange
        let system = FakeWindowSystem::new(2);
        system.add(FakeWindow::app(0xA, "Notepad", placement(50, ShowState::Normal)));
        system.add(FakeWindow::app(0xB, "Chrome", placement(2000, ShowState::Minimize)));
        let mut store = store();

        // Act
        capture(&mut store, &system, 2);
        let first: Vec<_> = store.tracked().cloned().collect();
        capture(&mut store, &system, 2);
        let second: Vec<_> = store.tracked().cloned().collect();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn failed_placement_query_still_refreshes_record() {
        // Arrange
        let system = FakeWindowSystem::new(2);
        system.add(FakeWindow::app(0xA, "Notepad", placement(0, ShowState::Normal)));
        let mut store = store();
        capture(&mut store, &system, 2);
        store.tag_all_unused();
        system.fail_placement(0xA);
        system.set_placement_of(0xA, placement(999, ShowState::Normal));

        // Act
        let summary = capture(&mut store, &system, 2);

        // Assert
        assert_eq!(summary, Some(CaptureSummary { windows: 1, saved: 0 }));
        let record = store.get(0xA).expect("record");
        assert_eq!(record.stale_count(), 0);
        assert_eq!(
            record.placement(store.range(), 2),
            Some(&placement(0, ShowState::Normal))
        );
    }

    #[test]
    fn vanished_window_goes_stale_after_three_passes() {
        // Arrange
        let system = FakeWindowSystem::new(2);
        system.add(FakeWindow::app(0xA, "Notepad", placement(0, ShowState::Normal)));
        let mut store = store();
        capture(&mut store, &system, 2);
        system.remove(0xA);

        // Act / Assert
        capture(&mut store, &system, 2);
        capture(&mut store, &system, 2);
        assert!(store.get(0xA).is_some_and(|r| r.is_live()));

        capture(&mut store, &system, 2);
        assert!(store.get(0xA).is_some_and(|r| r.is_reusable()));
    }

    #[test]
    fn placements_for_different_counts_coexist() {
        // Arrange
        let system = FakeWindowSystem::new(2);
        system.add(FakeWindow::app(0xA, "Notepad", placement(0, ShowState::Normal)));
        let mut store = store();

        // Act
        capture(&mut store, &system, 2);
        system.set_placement_of(0xA, placement(3840, ShowState::Maximized));
        capture(&mut store, &system, 3);

        // Assert
        let range = store.range();
        let record = store.get(0xA).expect("record");
        assert_eq!(record.placements(range).count(), 2);
        assert_eq!(record.placement(range, 2).map(|p| p.rect.x), Some(0));
        assert_eq!(record.placement(range, 3).map(|p| p.rect.x), Some(3840));
    }
}
