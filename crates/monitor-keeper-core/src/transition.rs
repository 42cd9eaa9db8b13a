//! Monitor-count transition tracking.
//!
//! The OS sends a burst of display-change notifications and rearranges
//! windows when a monitor disappears or comes back. The tracker records
//! that a change is in flight, then makes one decision per burst once
//! the debounce timer fires: restore, or simply adopt the new count.

use std::fmt;

/// Where the tracker is in a display-change cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// No change in flight; captures run at this monitor count.
    Stable(usize),
    /// A display change was notified and reassessment is pending.
    ChangePending,
    /// A restore pass is being applied for the new count.
    Restoring,
}

impl fmt::Display for TransitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable(count) => write!(f, "stable ({count} monitors)"),
            Self::ChangePending => f.write_str("display change pending"),
            Self::Restoring => f.write_str("restoring"),
        }
    }
}

/// Outcome of reassessing the monitor count after a display change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reassessment {
    /// The live monitor count that is now adopted.
    pub monitors: usize,
    /// Whether windows should be restored for `monitors`.
    pub restore: bool,
}

/// Tracks the last settled monitor count and any change in flight.
#[derive(Debug, Clone)]
pub struct TransitionTracker {
    state: TransitionState,
    last_known: usize,
    /// Lowest live count read while the current change was pending.
    lowest_seen: Option<usize>,
}

impl Default for TransitionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionTracker {
    /// Starts out assuming a single monitor.
    pub fn new() -> Self {
        Self {
            state: TransitionState::Stable(1),
            last_known: 1,
            lowest_seen: None,
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// The monitor count captures are currently recorded at.
    pub fn last_known(&self) -> usize {
        self.last_known
    }

    pub fn is_change_pending(&self) -> bool {
        self.state == TransitionState::ChangePending
    }

    /// Settles on `monitors` without restoring anything.
    pub fn adopt(&mut self, monitors: usize) {
        self.state = TransitionState::Stable(monitors);
        self.last_known = monitors;
        self.lowest_seen = None;
    }

    /// Records a display-change notification and the live count read
    /// when it arrived.
    pub fn display_changed(&mut self, live: usize) {
        self.state = TransitionState::ChangePending;
        self.lowest_seen = Some(self.lowest_seen.map_or(live, |low| low.min(live)));
    }

    /// Returns whether window movement should schedule a capture.
    ///
    /// Movement during a pending change is the OS shuffling windows
    /// around, not the user arranging them.
    pub fn accepts_moves(&self) -> bool {
        !self.is_change_pending()
    }

    /// Returns whether a capture may run with `live` monitors connected.
    ///
    /// Never while a change is pending, even if the count is back where
    /// it was: the OS may already have moved windows off a monitor that
    /// blinked. Otherwise a count that differs from the last settled one
    /// means a change has not been reassessed yet.
    pub fn allows_capture(&self, live: usize) -> bool {
        !self.is_change_pending() && live == self.last_known
    }

    /// Decides what to do with the `live` count once the change settles.
    ///
    /// Restores when more than one monitor is connected and either the
    /// count differs from the last settled one, or it dipped below the
    /// final count during the burst (a monitor dropped and came back
    /// before the debounce fired, and the OS has already moved windows
    /// off it). On restore the tracker enters `Restoring` and the caller
    /// must call [`finish`](Self::finish); otherwise it is stable again.
    pub fn reassess(&mut self, live: usize) -> Reassessment {
        let dipped = self.lowest_seen.is_some_and(|low| low < live);
        let restore = live > 1 && (live != self.last_known || dipped);

        if restore {
            self.state = TransitionState::Restoring;
            self.last_known = live;
            self.lowest_seen = None;
        } else {
            self.adopt(live);
        }

        Reassessment {
            monitors: live,
            restore,
        }
    }

    /// Leaves `Restoring` once the restore pass is done.
    pub fn finish(&mut self) {
        if self.state == TransitionState::Restoring {
            self.state = TransitionState::Stable(self.last_known);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stable_at(monitors: usize) -> TransitionTracker {
        let mut tracker = TransitionTracker::new();
        tracker.adopt(monitors);
        tracker
    }

    #[test]
    fn starts_stable_at_one_monitor() {
        let tracker = TransitionTracker::new();

        assert_eq!(tracker.state(), TransitionState::Stable(1));
        assert_eq!(tracker.last_known(), 1);
        assert!(tracker.accepts_moves());
    }

    #[test]
    fn display_change_blocks_moves_until_reassessed() {
        let mut tracker = stable_at(2);

        tracker.display_changed(1);

        assert!(tracker.is_change_pending());
        assert!(!tracker.accepts_moves());
    }

    #[test]
    fn monitor_count_increase_restores() {
        // Arrange
        let mut tracker = stable_at(1);
        tracker.display_changed(2);

        // Act
        let decision = tracker.reassess(2);

        // Assert
        assert_eq!(
            decision,
            Reassessment {
                monitors: 2,
                restore: true
            }
        );
        assert_eq!(tracker.state(), TransitionState::Restoring);
        tracker.finish();
        assert_eq!(tracker.state(), TransitionState::Stable(2));
    }

    #[test]
    fn decrease_to_several_monitors_restores_that_layout() {
        // Arrange: 3 -> 2 still has a saved two-monitor layout to go back to.
        let mut tracker = stable_at(3);
        tracker.display_changed(2);

        // Act
        let decision = tracker.reassess(2);

        // Assert
        assert!(decision.restore);
        assert_eq!(tracker.last_known(), 2);
    }

    #[test]
    fn drop_to_single_monitor_never_restores() {
        let mut tracker = stable_at(2);
        tracker.display_changed(1);

        let decision = tracker.reassess(1);

        assert!(!decision.restore);
        assert_eq!(tracker.state(), TransitionState::Stable(1));
        assert!(tracker.allows_capture(1));
        assert!(!tracker.allows_capture(2));
    }

    #[test]
    fn brief_drop_within_one_burst_restores() {
        // Arrange: 2 -> 1 -> 2 before the debounce fires.
        let mut tracker = stable_at(2);
        tracker.display_changed(1);
        tracker.display_changed(2);

        // Act
        let decision = tracker.reassess(2);

        // Assert
        assert!(decision.restore);
        assert_eq!(decision.monitors, 2);
    }

    #[test]
    fn same_count_change_does_not_restore() {
        // Resolution change with both monitors connected throughout.
        let mut tracker = stable_at(2);
        tracker.display_changed(2);

        let decision = tracker.reassess(2);

        assert!(!decision.restore);
        assert_eq!(tracker.state(), TransitionState::Stable(2));
    }

    #[test]
    fn dip_is_forgotten_after_reassessment() {
        let mut tracker = stable_at(2);
        tracker.display_changed(1);
        tracker.reassess(2);
        tracker.finish();

        tracker.display_changed(2);
        let decision = tracker.reassess(2);

        assert!(!decision.restore);
    }

    #[test]
    fn pending_change_blocks_capture_at_unchanged_count() {
        let mut tracker = stable_at(2);

        tracker.display_changed(2);

        assert!(!tracker.allows_capture(2));
        tracker.reassess(2);
        assert!(tracker.allows_capture(2));
    }

    #[test]
    fn capture_guard_compares_live_count_with_last_known() {
        let tracker = stable_at(2);

        assert!(tracker.allows_capture(2));
        assert!(!tracker.allows_capture(1));
        assert!(!tracker.allows_capture(3));
    }
}
