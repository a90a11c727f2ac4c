//! Navigation through a view collection, most recent first.

use crate::error::{Collection, Result, ReviewError};

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards more recent views.
    Next,
    /// Towards older views.
    Previous,
    /// To the most recent view.
    MostRecent,
    /// To the oldest view.
    Oldest,
}

/// An index into a collection presented in reverse insertion order.
///
/// Index 0 is the most recent entry. The index is clamped to
/// `[0, count - 1]` and never wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationCursor {
    index: usize,
    collection: Collection,
}

impl NavigationCursor {
    /// Creates a cursor over the given collection, at the most recent entry.
    pub fn new(collection: Collection) -> Self {
        Self {
            index: 0,
            collection,
        }
    }

    /// Returns the collection this cursor walks.
    #[must_use]
    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Returns the current index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves one step towards the most recent entry.
    pub fn next(&mut self, count: usize) -> Result<usize> {
        self.ensure_not_empty(count)?;
        self.clamp(count);
        if self.index > 0 {
            self.index -= 1;
        }
        Ok(self.index)
    }

    /// Moves one step towards the oldest entry.
    pub fn previous(&mut self, count: usize) -> Result<usize> {
        self.ensure_not_empty(count)?;
        self.clamp(count);
        if self.index < count - 1 {
            self.index += 1;
        }
        Ok(self.index)
    }

    /// Moves to the most recent entry.
    pub fn jump_to_most_recent(&mut self, count: usize) -> Result<usize> {
        self.ensure_not_empty(count)?;
        self.index = 0;
        Ok(self.index)
    }

    /// Moves to the oldest entry.
    pub fn jump_to_oldest(&mut self, count: usize) -> Result<usize> {
        self.ensure_not_empty(count)?;
        self.index = count - 1;
        Ok(self.index)
    }

    /// Moves to `index`, clamped to the last entry.
    pub fn jump_to(&mut self, index: usize, count: usize) -> Result<usize> {
        self.ensure_not_empty(count)?;
        self.index = index.min(count - 1);
        Ok(self.index)
    }

    /// Applies a step in the given direction.
    pub fn step(&mut self, direction: Direction, count: usize) -> Result<usize> {
        match direction {
            Direction::Next => self.next(count),
            Direction::Previous => self.previous(count),
            Direction::MostRecent => self.jump_to_most_recent(count),
            Direction::Oldest => self.jump_to_oldest(count),
        }
    }

    /// Pulls the index back into range after the collection shrank.
    pub fn clamp(&mut self, count: usize) {
        self.index = self.index.min(count.saturating_sub(1));
    }

    /// Resets to the most recent entry.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    fn ensure_not_empty(&self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(ReviewError::EmptyCollection(self.collection));
        }
        Ok(())
    }
}
