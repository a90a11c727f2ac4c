//! Session state for view tracking.
//!
//! A [`Session`] owns everything the tracker needs between two timer ticks:
//! the options, both view collections, the dwell detector, the navigation
//! cursors and the activation flag. The host keeps one session per scene and
//! drives it from its main thread, so no locking is involved.

use serde::{Deserialize, Serialize};

use crate::cursor::{Direction, NavigationCursor};
use crate::detector::{DwellDetector, Observation};
use crate::error::{Collection, Result, ReviewError};
use crate::history::RecentHistory;
use crate::host::{Scheduler, TickOutcome, ViewportHost};
use crate::options::Options;
use crate::sample::ViewSample;
use crate::saved::{SaveOutcome, SavedViewSet, ViewId};

/// Where navigation landed, for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPosition {
    /// Index in most-recent-first order.
    pub index: usize,
    /// Number of entries in the collection.
    pub count: usize,
}

impl ViewPosition {
    /// 1-based position.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

impl std::fmt::Display for ViewPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.ordinal(), self.count)
    }
}

/// Serializable shape of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSnapshot {
    /// Settings.
    pub options: Options,
    /// Recent history entries, oldest first.
    pub recent: RecentHistory,
    /// Saved views, in creation order.
    pub saved: SavedViewSet,
}

/// Per-scene tracking state.
#[derive(Debug, Clone)]
pub struct Session {
    options: Options,
    history: RecentHistory,
    saved: SavedViewSet,
    detector: DwellDetector,
    recent_cursor: NavigationCursor,
    saved_cursor: NavigationCursor,
    active: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Session {
    /// Creates an inactive session with empty collections.
    pub fn new(options: Options) -> Self {
        let options = options.clamped();
        Self {
            history: RecentHistory::new(options.save_count),
            options,
            saved: SavedViewSet::new(),
            detector: DwellDetector::new(),
            recent_cursor: NavigationCursor::new(Collection::Recent),
            saved_cursor: NavigationCursor::new(Collection::Saved),
            active: false,
        }
    }

    /// Returns the current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options. A smaller `save_count` evicts old history
    /// entries immediately.
    pub fn set_options(&mut self, options: Options) {
        self.options = options.clamped();
        let evicted = self.history.set_capacity(self.options.save_count);
        if evicted > 0 {
            log::debug!("capacity change evicted {evicted} recent view(s)");
        }
        self.recent_cursor.clamp(self.history.len());
    }

    /// The recent history.
    pub fn history(&self) -> &RecentHistory {
        &self.history
    }

    /// The saved views.
    pub fn saved(&self) -> &SavedViewSet {
        &self.saved
    }

    /// Mutable access to the saved views, for renaming and selection.
    pub fn saved_mut(&mut self) -> &mut SavedViewSet {
        &mut self.saved
    }

    /// The dwell detector.
    pub fn detector(&self) -> &DwellDetector {
        &self.detector
    }

    /// The cursor over the recent history.
    pub fn recent_cursor(&self) -> &NavigationCursor {
        &self.recent_cursor
    }

    /// The cursor over the saved views.
    pub fn saved_cursor(&self) -> &NavigationCursor {
        &self.saved_cursor
    }

    // ========================================================================
    // Activation
    // ========================================================================

    /// Returns whether automatic tracking is on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turns tracking on and registers the timer.
    ///
    /// Returns false if tracking was already on. If a timer from an earlier
    /// activation is still registered it is reused instead of registering a
    /// second one.
    pub fn activate(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        if scheduler.is_registered() {
            log::debug!("timer still registered, reusing it");
        } else {
            scheduler.register(self.options.interval());
        }
        log::info!(
            "view tracking activated (every {}s)",
            self.options.update_delay
        );
        true
    }

    /// Turns tracking off. The timer stops at its next tick.
    ///
    /// Returns false if tracking was already off.
    pub fn deactivate(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.detector.reset();
        log::info!("view tracking deactivated");
        true
    }

    /// Flips tracking on or off and returns the new state.
    pub fn toggle(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.active {
            self.deactivate();
        } else {
            self.activate(scheduler);
        }
        self.active
    }

    /// Forces tracking off and deregisters the timer.
    pub fn teardown(&mut self, scheduler: &mut impl Scheduler) {
        self.active = false;
        self.detector.reset();
        self.recent_cursor.reset();
        self.saved_cursor.reset();
        scheduler.unregister();
        log::debug!("session torn down");
    }

    // ========================================================================
    // Sampling
    // ========================================================================

    /// Timer callback: samples the viewport and updates the history.
    ///
    /// A missing viewport skips the tick but keeps the timer alive. A tick
    /// that fires after deactivation skips sampling and stops the timer.
    pub fn tick(&mut self, host: &impl ViewportHost) -> TickOutcome {
        if !self.active {
            return TickOutcome::Stop;
        }

        match host.read_view() {
            Some(current) => {
                let observation = self.detector.observe(current, &mut self.history);
                match observation {
                    Observation::Committed { index, evicted } => {
                        log::info!("recorded view {} (evicted {evicted})", index + 1);
                    }
                    Observation::Repeated { index, count } => {
                        log::debug!("view {} seen again ({count}x)", index + 1);
                    }
                    Observation::Primed | Observation::Moved => {
                        log::trace!("tick: {observation:?}");
                    }
                }
                self.recent_cursor.clamp(self.history.len());
            }
            None => {
                log::warn!("{}, skipping tick", ReviewError::NoViewportAvailable);
            }
        }

        TickOutcome::Reschedule(self.options.interval())
    }

    // ========================================================================
    // Recent history
    // ========================================================================

    /// Steps through the recent history and applies the reached view.
    pub fn navigate_recent(
        &mut self,
        direction: Direction,
        host: &mut impl ViewportHost,
    ) -> Result<ViewPosition> {
        let count = self.history.len();
        let before = self.recent_cursor;
        let index = self.recent_cursor.step(direction, count)?;
        let view = self
            .history
            .get_recent(index)
            .map(|entry| entry.sample)
            .ok_or(ReviewError::EmptyCollection(Collection::Recent))?;
        if !host.write_view(&view) {
            self.recent_cursor = before;
            return Err(ReviewError::NoViewportAvailable);
        }
        Ok(ViewPosition { index, count })
    }

    /// Empties the recent history and resets its cursor.
    pub fn clear_recent(&mut self) {
        self.history.clear();
        self.recent_cursor.reset();
        log::info!("recent views cleared");
    }

    // ========================================================================
    // Saved views
    // ========================================================================

    /// Saves the current view: overwrites the selected saved views, or
    /// creates a new one if nothing is selected.
    pub fn save_view(&mut self, host: &impl ViewportHost) -> Result<SaveOutcome> {
        let current = host.read_view().ok_or(ReviewError::NoViewportAvailable)?;
        let outcome = self.saved.save_or_overwrite(current)?;
        if let SaveOutcome::Created(_) = outcome {
            self.saved_cursor.reset();
        }
        Ok(outcome)
    }

    /// Applies the saved view with the given id.
    pub fn restore_saved(
        &mut self,
        id: ViewId,
        host: &mut impl ViewportHost,
    ) -> Result<ViewSample> {
        if self.saved.is_empty() {
            return Err(ReviewError::EmptyCollection(Collection::Saved));
        }
        let view = self.saved.restore(id).map_err(|err| {
            log::warn!("saved view {id} no longer exists");
            err
        })?;
        if !host.write_view(&view) {
            return Err(ReviewError::NoViewportAvailable);
        }
        if let Some(index) = self.saved.iter_recent().position(|entry| entry.id() == id) {
            self.saved_cursor.jump_to(index, self.saved.len())?;
        }
        Ok(view)
    }

    /// Steps through the saved views and applies the reached view.
    pub fn navigate_saved(
        &mut self,
        direction: Direction,
        host: &mut impl ViewportHost,
    ) -> Result<ViewPosition> {
        let count = self.saved.len();
        let before = self.saved_cursor;
        let index = self.saved_cursor.step(direction, count)?;
        let view = self
            .saved
            .get_recent(index)
            .map(|entry| entry.sample)
            .ok_or(ReviewError::EmptyCollection(Collection::Saved))?;
        if !host.write_view(&view) {
            self.saved_cursor = before;
            return Err(ReviewError::NoViewportAvailable);
        }
        Ok(ViewPosition { index, count })
    }

    /// Deletes every selected saved view.
    pub fn delete_selected(&mut self) -> Result<usize> {
        let deleted = self.saved.delete_selected()?;
        self.saved_cursor.clamp(self.saved.len());
        log::info!("deleted {deleted} saved view(s)");
        Ok(deleted)
    }

    /// Empties the saved views and resets their cursor.
    pub fn clear_saved(&mut self) {
        self.saved.clear();
        self.saved_cursor.reset();
        log::info!("saved views cleared");
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Captures the collections and options.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            options: self.options.clone(),
            recent: self.history.clone(),
            saved: self.saved.clone(),
        }
    }

    /// Rebuilds an inactive session from a snapshot.
    ///
    /// Fails with [`ReviewError::DuplicateIdentifier`] if two saved views
    /// share an id.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Result<Self> {
        snapshot.saved.validate()?;
        let mut session = Self::new(snapshot.options);
        session.history = snapshot.recent;
        session.saved = snapshot.saved;
        session.saved.clear_selection();
        session.history.set_capacity(session.options.save_count);
        Ok(session)
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Rebuilds an inactive session from JSON written by [`Session::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: SessionSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }
}
