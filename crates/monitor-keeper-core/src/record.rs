use crate::Placement;

/// Smallest monitor count that is ever recorded or restored.
///
/// Single-monitor placements are never saved: that is the layout the
/// OS falls back to, not one worth restoring.
pub const MIN_MONITORS: usize = 2;

/// Default largest monitor count that is recorded or restored.
pub const DEFAULT_MAX_MONITORS: usize = 5;

/// A record with `stale_count` at or below this is live.
pub const LIVE_THRESHOLD: u32 = 2;

/// `stale_count` stops increasing here so long-idle slots never overflow.
pub const STALE_CAP: u32 = 100;

/// The inclusive range of monitor counts that get a placement slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorRange {
    min: usize,
    max: usize,
}

impl MonitorRange {
    /// Creates a range from [`MIN_MONITORS`] to `max`.
    ///
    /// A `max` below the minimum yields a single-slot range.
    pub fn up_to(max: usize) -> Self {
        Self {
            min: MIN_MONITORS,
            max: max.max(MIN_MONITORS),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of placement slots each record carries.
    pub fn len(&self) -> usize {
        self.max - self.min + 1
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }

    /// Maps a monitor count to its placement slot index.
    pub fn slot(&self, count: usize) -> Option<usize> {
        self.contains(count).then(|| count - self.min)
    }
}

impl Default for MonitorRange {
    fn default() -> Self {
        Self::up_to(DEFAULT_MAX_MONITORS)
    }
}

/// Saved state for one top-level window across monitor counts.
///
/// The handle is a weak reference: the window may be destroyed
/// without notice, and the OS may hand the same handle to an
/// unrelated window later. `class_name` guards against the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    hwnd: Option<usize>,
    class_name: String,
    placements: Vec<Option<Placement>>,
    stale_count: u32,
}

impl WindowRecord {
    /// Creates an empty slot sized for `range`.
    pub fn empty(range: MonitorRange) -> Self {
        Self {
            hwnd: None,
            class_name: String::new(),
            placements: vec![None; range.len()],
            stale_count: 0,
        }
    }

    /// Returns the tracked handle, or `None` for an unused slot.
    pub fn hwnd(&self) -> Option<usize> {
        self.hwnd
    }

    /// The class name captured at the last refresh.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Number of consecutive capture passes that missed this window.
    pub fn stale_count(&self) -> u32 {
        self.stale_count
    }

    /// Returns whether the slot holds a window seen recently enough
    /// to be restored.
    pub fn is_live(&self) -> bool {
        self.hwnd.is_some() && self.stale_count <= LIVE_THRESHOLD
    }

    /// Returns whether the slot may be handed to a different window.
    pub fn is_reusable(&self) -> bool {
        self.hwnd.is_none() || self.stale_count > LIVE_THRESHOLD
    }

    /// Returns the placement saved at exactly `count` monitors.
    pub fn placement(&self, range: MonitorRange, count: usize) -> Option<&Placement> {
        let slot = range.slot(count)?;
        self.placements.get(slot)?.as_ref()
    }

    /// Iterates `(monitor_count, placement)` for every populated slot.
    pub fn placements(&self, range: MonitorRange) -> impl Iterator<Item = (usize, &Placement)> {
        self.placements
            .iter()
            .enumerate()
            .filter_map(move |(i, p)| p.as_ref().map(|p| (range.min() + i, p)))
    }

    /// Hands the slot to `hwnd`, discarding everything saved for the
    /// previous occupant.
    pub(crate) fn claim(&mut self, hwnd: usize) {
        self.hwnd = Some(hwnd);
        self.class_name.clear();
        self.placements.iter_mut().for_each(|p| *p = None);
        self.stale_count = 0;
    }

    /// Marks the window as observed in the current pass.
    pub(crate) fn refresh(&mut self, class_name: String) {
        self.stale_count = 0;
        self.class_name = class_name;
    }

    /// Stores the placement for `count` monitors. Out-of-range counts
    /// are ignored.
    pub(crate) fn set_placement(
        &mut self,
        range: MonitorRange,
        count: usize,
        placement: Placement,
    ) {
        if let Some(slot) = range.slot(count)
            && let Some(entry) = self.placements.get_mut(slot)
        {
            *entry = Some(placement);
        }
    }

    /// Counts one more pass without seeing the window.
    pub(crate) fn tag_unused(&mut self) {
        if self.hwnd.is_some() && self.stale_count < STALE_CAP {
            self.stale_count += 1;
        }
    }
}
