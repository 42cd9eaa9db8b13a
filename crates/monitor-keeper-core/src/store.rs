use crate::record::{MonitorRange, WindowRecord};

/// Number of slots a fresh store starts with.
pub const INITIAL_CAPACITY: usize = 32;

/// Number of slots added whenever the store runs out of reusable ones.
pub const GROWTH_INCREMENT: usize = 32;

/// A growable array of window records keyed by handle.
///
/// Slots are never removed. A record whose window has not been seen for
/// more than [`LIVE_THRESHOLD`](crate::record::LIVE_THRESHOLD) capture
/// passes becomes reusable, and reuse is the only way a record goes away.
/// Lookups are linear scans; the store holds a few dozen windows at most.
#[derive(Debug, Clone)]
pub struct RecordStore {
    range: MonitorRange,
    records: Vec<WindowRecord>,
}

impl RecordStore {
    /// Creates a store with [`INITIAL_CAPACITY`] empty slots.
    pub fn new(range: MonitorRange) -> Self {
        Self {
            range,
            records: vec![WindowRecord::empty(range); INITIAL_CAPACITY],
        }
    }

    /// The monitor counts each record keeps a placement for.
    pub fn range(&self) -> MonitorRange {
        self.range
    }

    /// Total number of slots, used or not.
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Returns the record for `hwnd`, claiming a slot if there is none.
    ///
    /// Lookup order: a slot already holding `hwnd`; then the first empty
    /// or stale slot, which is wiped and handed to `hwnd`; otherwise the
    /// store grows by [`GROWTH_INCREMENT`] and the first new slot is used.
    pub fn find_or_allocate(&mut self, hwnd: usize) -> &mut WindowRecord {
        let index = match self.position(hwnd) {
            Some(i) => i,
            None => {
                let i = match self.records.iter().position(WindowRecord::is_reusable) {
                    Some(i) => i,
                    None => self.grow(),
                };
                self.records[i].claim(hwnd);
                i
            }
        };
        &mut self.records[index]
    }

    /// Ages every occupied slot by one missed pass.
    pub fn tag_all_unused(&mut self) {
        self.records.iter_mut().for_each(WindowRecord::tag_unused);
    }

    /// Iterates live records in store order.
    pub fn live(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.iter().filter(|r| r.is_live())
    }

    /// Iterates every occupied slot, live or stale, in store order.
    pub fn tracked(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.iter().filter(|r| r.hwnd().is_some())
    }

    /// Returns the record currently holding `hwnd`.
    pub fn get(&self, hwnd: usize) -> Option<&WindowRecord> {
        self.position(hwnd).map(|i| &self.records[i])
    }

    fn position(&self, hwnd: usize) -> Option<usize> {
        self.records.iter().position(|r| r.hwnd() == Some(hwnd))
    }

    /// Appends a block of empty slots and returns the index of the first.
    fn grow(&mut self) -> usize {
        let first_new = self.records.len();
        let new_len = first_new + GROWTH_INCREMENT;
        crate::log_info!("Record store full, growing {first_new} -> {new_len} slots");
        self.records.resize(new_len, WindowRecord::empty(self.range));
        first_new
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Placement, Rect, ShowState};

    fn store() -> RecordStore {
        RecordStore::new(MonitorRange::default())
    }

    /// Fills every slot with a live, distinct window (handles 1..=n).
    fn fill(store: &mut RecordStore) {
        let range = store.range();
        for hwnd in 1..=store.capacity() {
            let record = store.find_or_allocate(hwnd);
            record.refresh(format!("Class{hwnd}"));
            let rect = Rect::new(hwnd as i32, 0, 100, 100);
            record.set_placement(range, 2, Placement::new(rect, ShowState::Normal));
        }
    }

    #[test]
    fn new_store_has_initial_capacity_and_no_records() {
        let store = store();

        assert_eq!(store.capacity(), INITIAL_CAPACITY);
        assert_eq!(store.tracked().count(), 0);
    }

    #[test]
    fn same_handle_returns_same_slot() {
        // Arrange
        let mut store = store();
        store.find_or_allocate(0xA).refresh("Notepad".into());

        // Act
        let record = store.find_or_allocate(0xA);

        // Assert
        assert_eq!(record.class_name(), "Notepad");
        assert_eq!(store.tracked().count(), 1);
    }

    #[test]
    fn window_missed_twice_keeps_its_slot() {
        // Arrange
        let mut store = store();
        fill(&mut store);
        store.tag_all_unused();
        store.find_or_allocate(1).refresh("Class1".into());
        // Everything except handle 1 has now missed one pass.
        store.tag_all_unused();

        // Act
        let record = store.find_or_allocate(0xBEEF);

        // Assert: no live slot was reused, so the store grew.
        assert_eq!(record.hwnd(), Some(0xBEEF));
        assert_eq!(store.capacity(), INITIAL_CAPACITY + GROWTH_INCREMENT);
    }

    #[test]
    fn window_missed_three_times_is_reused() {
        // Arrange
        let mut store = store();
        store.find_or_allocate(0xA);
        store.find_or_allocate(0xB);
        for _ in 0..3 {
            store.tag_all_unused();
            store.find_or_allocate(0xB).refresh("Kept".into());
        }

        // Act
        store.find_or_allocate(0xC);

        // Assert: 0xC took 0xA's slot (index 0), 0xB untouched.
        assert!(store.get(0xA).is_none());
        assert_eq!(store.get(0xC).map(|r| r.stale_count()), Some(0));
        assert_eq!(store.get(0xB).map(|r| r.class_name()), Some("Kept"));
        assert_eq!(store.tracked().next().and_then(|r| r.hwnd()), Some(0xC));
    }

    #[test]
    fn empty_slot_preferred_over_growth() {
        let mut store = store();
        store.find_or_allocate(0xA);

        store.find_or_allocate(0xB);

        assert_eq!(store.capacity(), INITIAL_CAPACITY);
        assert_eq!(store.tracked().count(), 2);
    }

    #[test]
    fn full_store_grows_and_preserves_existing_records() {
        // Arrange
        let mut store = store();
        fill(&mut store);
        let before: Vec<WindowRecord> = store.tracked().cloned().collect();

        // Act
        let hwnd = store.find_or_allocate(0xFFFF).hwnd();

        // Assert
        assert_eq!(hwnd, Some(0xFFFF));
        assert_eq!(store.capacity(), INITIAL_CAPACITY + GROWTH_INCREMENT);
        let after: Vec<WindowRecord> = store.tracked().take(before.len()).cloned().collect();
        assert_eq!(after, before);
        assert_eq!(
            store.tracked().nth(INITIAL_CAPACITY).and_then(|r| r.hwnd()),
            Some(0xFFFF)
        );
    }

    #[test]
    fn live_skips_stale_records() {
        let mut store = store();
        store.find_or_allocate(0xA);
        store.find_or_allocate(0xB);
        for _ in 0..3 {
            store.tag_all_unused();
        }
        store.find_or_allocate(0xB).refresh(String::new());

        let live: Vec<_> = store.live().filter_map(|r| r.hwnd()).collect();

        assert_eq!(live, vec![0xB]);
    }
}
