use std::time::{Duration, Instant};

/// Identifies one of the two independent debounce timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Delays a capture pass until window movement settles.
    Capture,
    /// Delays monitor-count reassessment until display changes settle.
    Transition,
}

impl TimerId {
    const ALL: [TimerId; 2] = [TimerId::Capture, TimerId::Transition];

    fn index(self) -> usize {
        match self {
            Self::Capture => 0,
            Self::Transition => 1,
        }
    }
}

/// Coalescing one-shot timers keyed by [`TimerId`].
///
/// Arming a timer that is already pending replaces its deadline, so a
/// burst of arm requests yields a single firing after the last one.
/// Time is passed in by the caller, which keeps the table free of any
/// clock and makes it deterministic under test.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    deadlines: [Option<Instant>; 2],
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `id` to fire `delay` after `now`, replacing any pending
    /// deadline for the same id.
    pub fn arm(&mut self, id: TimerId, delay: Duration, now: Instant) {
        self.deadlines[id.index()] = Some(now + delay);
    }

    /// Cancels a pending timer. Does nothing if it is not armed.
    pub fn disarm(&mut self, id: TimerId) {
        self.deadlines[id.index()] = None;
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.deadlines[id.index()].is_some()
    }

    /// The earliest pending deadline, if any timer is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().flatten().min().copied()
    }

    /// Disarms and returns the earliest timer whose deadline has passed.
    ///
    /// Call repeatedly until it returns `None` to drain every expired
    /// timer in deadline order.
    pub fn pop_expired(&mut self, now: Instant) -> Option<TimerId> {
        let id = TimerId::ALL
            .into_iter()
            .filter_map(|id| self.deadlines[id.index()].map(|d| (d, id)))
            .filter(|(deadline, _)| *deadline <= now)
            .min_by_key(|(deadline, _)| *deadline)
            .map(|(_, id)| id)?;
        self.disarm(id);
        Some(id)
    }
}
