use std::fmt;
use std::time::Instant;

use crate::capture::{CaptureSummary, capture};
use crate::config::{Config, TimingConfig};
use crate::event::WindowEvent;
use crate::record::MonitorRange;
use crate::restore::{RestoreSummary, restore};
use crate::store::RecordStore;
use crate::timer::{TimerId, Timers};
use crate::transition::{TransitionState, TransitionTracker};
use crate::window::WindowSystem;

/// The tracking context: every piece of state the engine keeps, plus
/// the window system it talks to.
///
/// Owned by the daemon's main thread and driven from there: window
/// events go to [`handle_event`](Self::handle_event), and the thread
/// sleeps until [`next_deadline`](Self::next_deadline) before calling
/// [`fire_due`](Self::fire_due). Nothing in here blocks or fails; every
/// window-system error is absorbed and logged.
pub struct Keeper<W: WindowSystem> {
    system: W,
    store: RecordStore,
    tracker: TransitionTracker,
    timers: Timers,
    timing: TimingConfig,
}

/// A point-in-time summary of the keeper, for `monitor-keeper status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeeperStatus {
    pub state: TransitionState,
    /// Monitor count captures are recorded at.
    pub last_known_monitors: usize,
    /// Monitor count reported by the window system right now.
    pub live_monitors: usize,
    /// Records holding a window, live or stale.
    pub tracked: usize,
    /// Records eligible for restoration.
    pub live: usize,
    /// Slots allocated in the store.
    pub capacity: usize,
    pub range: MonitorRange,
}

impl fmt::Display for KeeperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} monitors connected, tracking {} windows ({} live, {} slots)",
            self.state,
            self.live_monitors,
            self.tracked,
            self.live,
            self.capacity
        )?;
        write!(
            f,
            ", layouts saved for {}-{} monitors",
            self.range.min(),
            self.range.max()
        )
    }
}

impl<W: WindowSystem> Keeper<W> {
    pub fn new(system: W, config: &Config) -> Self {
        Self {
            system,
            store: RecordStore::new(config.monitors.range()),
            tracker: TransitionTracker::new(),
            timers: Timers::new(),
            timing: config.timing.clone(),
        }
    }

    pub fn system(&self) -> &W {
        &self.system
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn tracker(&self) -> &TransitionTracker {
        &self.tracker
    }

    /// Adopts the live monitor count and saves the current layout.
    pub fn start(&mut self) -> Option<CaptureSummary> {
        let live = self.system.monitor_count();
        self.tracker.adopt(live);
        crate::log_info!("Tracking started with {live} monitors");
        self.capture_pass()
    }

    /// Reacts to a window-system notification.
    ///
    /// Display changes (re)arm the transition timer; window movement
    /// (re)arms the capture timer unless a display change is pending.
    pub fn handle_event(&mut self, event: &WindowEvent, now: Instant) {
        match event {
            WindowEvent::DisplayChanged => {
                let live = self.system.monitor_count();
                crate::log_info!("Display change, {live} monitors reported");
                self.tracker.display_changed(live);
                self.timers
                    .arm(TimerId::Transition, self.timing.transition_delay(), now);
            }
            e if e.triggers_capture() => {
                if self.tracker.accepts_moves() {
                    self.timers
                        .arm(TimerId::Capture, self.timing.capture_delay(), now);
                }
            }
            _ => {}
        }
    }

    /// The earliest instant at which [`fire_due`](Self::fire_due) has
    /// work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Runs every timer whose deadline is at or before `now`.
    pub fn fire_due(&mut self, now: Instant) {
        while let Some(id) = self.timers.pop_expired(now) {
            match id {
                TimerId::Capture => {
                    self.capture_pass();
                }
                TimerId::Transition => self.reassess(),
            }
        }
    }

    /// Runs a capture pass immediately, subject to the same guard as a
    /// timed one. Returns `None` if the pass was suppressed or the
    /// monitor count is outside the saved range.
    pub fn capture_now(&mut self) -> Option<CaptureSummary> {
        self.timers.disarm(TimerId::Capture);
        self.capture_pass()
    }

    /// Restores windows for the current monitor count immediately.
    ///
    /// Returns `None` while a display change is unsettled or when the
    /// count is outside the saved range.
    pub fn restore_now(&mut self) -> Option<RestoreSummary> {
        let live = self.system.monitor_count();
        if !self.tracker.allows_capture(live) {
            crate::log_info!("Manual restore ignored: display change in progress");
            return None;
        }
        let summary = restore(&self.store, &self.system, live)?;
        crate::log_info!("Manual restore at {live} monitors: {summary:?}");
        Some(summary)
    }

    pub fn status(&self) -> KeeperStatus {
        KeeperStatus {
            state: self.tracker.state(),
            last_known_monitors: self.tracker.last_known(),
            live_monitors: self.system.monitor_count(),
            tracked: self.store.tracked().count(),
            live: self.store.live().count(),
            capacity: self.store.capacity(),
            range: self.store.range(),
        }
    }

    fn capture_pass(&mut self) -> Option<CaptureSummary> {
        let live = self.system.monitor_count();
        if !self.tracker.allows_capture(live) {
            crate::log_debug!(
                "Capture skipped: {live} monitors, last known {}, {}",
                self.tracker.last_known(),
                self.tracker.state()
            );
            return None;
        }
        let summary = capture(&mut self.store, &self.system, live)?;
        crate::log_debug!(
            "Monitors: {live}, saved {} of {} windows",
            summary.saved,
            summary.windows
        );
        Some(summary)
    }

    fn reassess(&mut self) {
        let live = self.system.monitor_count();
        let previous = self.tracker.last_known();
        let decision = self.tracker.reassess(live);

        if !decision.restore {
            crate::log_info!("Monitors {previous} -> {live}, nothing to restore");
            return;
        }

        match restore(&self.store, &self.system, decision.monitors) {
            Some(summary) => crate::log_info!(
                "Monitors {previous} -> {live}, restored {} windows ({} skipped, {} failed)",
                summary.restored,
                summary.skipped,
                summary.failed
            ),
            None => crate::log_info!("Monitors {previous} -> {live}, no layout saved for {live}"),
        }
        self.tracker.finish();
    }
}
