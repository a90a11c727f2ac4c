//! Bounded log of views the user dwelled on.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::options::SAVE_COUNT_RANGE;
use crate::sample::ViewSample;

/// A committed view together with how often it was observed again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecentHistoryEntry {
    /// The recorded view.
    pub sample: ViewSample,
    /// Number of dwell ticks that matched this entry (at least 1).
    pub repeat_count: u32,
}

impl RecentHistoryEntry {
    /// Creates an entry with a repeat count of 1.
    pub fn new(sample: ViewSample) -> Self {
        Self {
            sample,
            repeat_count: 1,
        }
    }
}

/// Insertion-ordered ring of recent views.
///
/// Index 0 is the oldest entry. When an insert pushes the length over the
/// capacity the oldest entries are evicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentHistory {
    entries: VecDeque<RecentHistoryEntry>,
    capacity: usize,
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::new(10)
    }
}

impl RecentHistory {
    /// Creates an empty history. The capacity is clamped to the valid range.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(SAVE_COUNT_RANGE.0, SAVE_COUNT_RANGE.1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity, evicting the oldest entries if needed.
    ///
    /// Returns the number of evicted entries.
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        self.capacity = capacity.clamp(SAVE_COUNT_RANGE.0, SAVE_COUNT_RANGE.1);
        self.trim()
    }

    /// Appends a new entry with a repeat count of 1.
    ///
    /// Returns the index of the new entry and the number of evicted entries.
    pub fn commit(&mut self, sample: ViewSample) -> (usize, usize) {
        self.entries.push_back(RecentHistoryEntry::new(sample));
        let evicted = self.trim();
        (self.entries.len() - 1, evicted)
    }

    /// Returns the index of the first entry exactly equal to `sample`.
    pub fn find_matching(&self, sample: &ViewSample) -> Option<usize> {
        self.entries.iter().position(|entry| entry.sample == *sample)
    }

    /// Increments the repeat count of the entry at `index`.
    ///
    /// Returns the new count, or `None` if the index is out of bounds.
    pub fn bump(&mut self, index: usize) -> Option<u32> {
        let entry = self.entries.get_mut(index)?;
        entry.repeat_count = entry.repeat_count.saturating_add(1);
        Some(entry.repeat_count)
    }

    /// Gets an entry in insertion order (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&RecentHistoryEntry> {
        self.entries.get(index)
    }

    /// Gets an entry in reverse insertion order (0 = most recent).
    pub fn get_recent(&self, index: usize) -> Option<&RecentHistoryEntry> {
        let len = self.entries.len();
        if index >= len {
            return None;
        }
        self.entries.get(len - 1 - index)
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &RecentHistoryEntry> {
        self.entries.iter()
    }

    /// Iterates most recent first.
    pub fn iter_recent(&self) -> impl Iterator<Item = &RecentHistoryEntry> {
        self.entries.iter().rev()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trim(&mut self) -> usize {
        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }
}
