//! Named views managed explicitly by the user.
//!
//! Every saved view carries a [`ViewId`] assigned when it is created. Lookups,
//! selection and deletion go through the id, never through list positions, so
//! removing several entries in one action cannot shift the wrong entry.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewError};
use crate::sample::ViewSample;

/// Default display name of a new saved view.
pub const DEFAULT_VIEW_NAME: &str = "Untitled";

/// Stable identifier of a saved view.
///
/// Displayed and serialized as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ViewId(u64);

impl ViewId {
    /// Creates an id from its numeric value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ViewId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(ViewId)
    }
}

impl From<ViewId> for String {
    fn from(id: ViewId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ViewId {
    type Error = std::num::ParseIntError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

/// A user-named view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedViewEntry {
    /// Stable identifier.
    id: ViewId,
    /// Display label.
    pub name: String,
    /// The stored view.
    pub sample: ViewSample,
    /// Transient UI selection.
    #[serde(skip)]
    pub selected: bool,
}

impl SavedViewEntry {
    /// Returns the stable identifier.
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }
}

/// Result of [`SavedViewSet::save_or_overwrite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing was selected, a new entry was created.
    Created(ViewId),
    /// The given number of selected entries were overwritten.
    Updated(usize),
}

/// Unbounded, insertion-ordered set of saved views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedViewSet {
    entries: Vec<SavedViewEntry>,
}

impl SavedViewSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next created entry will get: one past the highest id in
    /// use, or 0 when empty.
    pub fn next_id(&self) -> Result<ViewId> {
        match self.entries.iter().map(|entry| entry.id).max() {
            None => Ok(ViewId(0)),
            Some(max) => max
                .0
                .checked_add(1)
                .map(ViewId)
                .ok_or(ReviewError::IdentifierOverflow(max)),
        }
    }

    /// Checks that no two entries share an id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.id) {
                return Err(ReviewError::DuplicateIdentifier(entry.id));
            }
        }
        Ok(())
    }

    /// Overwrites every selected entry with `sample`, or creates a new entry
    /// when nothing is selected.
    pub fn save_or_overwrite(&mut self, sample: ViewSample) -> Result<SaveOutcome> {
        let mut updated = 0;
        for entry in self.entries.iter_mut().filter(|entry| entry.selected) {
            entry.sample = sample;
            updated += 1;
        }
        if updated > 0 {
            log::debug!("overwrote {updated} saved view(s)");
            return Ok(SaveOutcome::Updated(updated));
        }

        let id = self.next_id()?;
        self.entries.push(SavedViewEntry {
            id,
            name: DEFAULT_VIEW_NAME.to_string(),
            sample,
            selected: false,
        });
        log::debug!("created saved view {id}");
        Ok(SaveOutcome::Created(id))
    }

    /// Removes every selected entry.
    ///
    /// Returns the number removed, or [`ReviewError::NothingSelected`].
    pub fn delete_selected(&mut self) -> Result<usize> {
        let ids: Vec<ViewId> = self.selected_ids().collect();
        if ids.is_empty() {
            return Err(ReviewError::NothingSelected);
        }
        for id in &ids {
            self.delete(*id)?;
        }
        Ok(ids.len())
    }

    /// Removes the entry with the given id.
    pub fn delete(&mut self, id: ViewId) -> Result<SavedViewEntry> {
        let index = self.position(id)?;
        Ok(self.entries.remove(index))
    }

    /// Returns the stored view for `id`.
    pub fn restore(&self, id: ViewId) -> Result<ViewSample> {
        self.get(id)
            .map(|entry| entry.sample)
            .ok_or(ReviewError::StaleIdentifier(id))
    }

    /// Gets an entry by id.
    pub fn get(&self, id: ViewId) -> Option<&SavedViewEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Gets an entry in reverse insertion order (0 = most recent).
    pub fn get_recent(&self, index: usize) -> Option<&SavedViewEntry> {
        self.entries.iter().rev().nth(index)
    }

    /// Renames an entry.
    pub fn rename(&mut self, id: ViewId, name: impl Into<String>) -> Result<()> {
        let index = self.position(id)?;
        self.entries[index].name = name.into();
        Ok(())
    }

    /// Sets the selection flag of an entry.
    pub fn set_selected(&mut self, id: ViewId, selected: bool) -> Result<()> {
        let index = self.position(id)?;
        self.entries[index].selected = selected;
        Ok(())
    }

    /// Selects `id` and deselects everything else.
    pub fn select_only(&mut self, id: ViewId) -> Result<()> {
        self.position(id)?;
        for entry in &mut self.entries {
            entry.selected = entry.id == id;
        }
        Ok(())
    }

    /// Deselects every entry.
    pub fn clear_selection(&mut self) {
        for entry in &mut self.entries {
            entry.selected = false;
        }
    }

    /// Ids of the selected entries, in insertion order.
    pub fn selected_ids(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.id)
    }

    /// Returns the number of selected entries.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.selected).count()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SavedViewEntry> {
        self.entries.iter()
    }

    /// Iterates most recent first.
    pub fn iter_recent(&self) -> impl Iterator<Item = &SavedViewEntry> {
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

    fn position(&self, id: ViewId) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(ReviewError::StaleIdentifier(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    fn sample(x: f32) -> ViewSample {
        ViewSample::default().with_location(Vec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut set = SavedViewSet::new();
        assert_eq!(set.save_or_overwrite(sample(1.0)).unwrap(), SaveOutcome::Created(ViewId::new(0)));
        assert_eq!(set.save_or_overwrite(sample(2.0)).unwrap(), SaveOutcome::Created(ViewId::new(1)));

        let first = set.get(ViewId::new(0)).unwrap();
        assert_eq!(first.name, DEFAULT_VIEW_NAME);
        assert_eq!(first.id().to_string(), "0");
        assert!(!first.selected);
    }

    #[test]
    fn test_overwrite_selected_in_place() {
        let mut set = SavedViewSet::new();
        set.save_or_overwrite(sample(1.0)).unwrap();
        set.save_or_overwrite(sample(2.0)).unwrap();
        set.save_or_overwrite(sample(3.0)).unwrap();
        set.rename(ViewId::new(0), "Front").unwrap();
        set.set_selected(ViewId::new(0), true).unwrap();
        set.set_selected(ViewId::new(2), true).unwrap();

        assert_eq!(set.save_or_overwrite(sample(9.0)).unwrap(), SaveOutcome::Updated(2));
        assert_eq!(set.len(), 3);
        let front = set.get(ViewId::new(0)).unwrap();
        assert_eq!(front.name, "Front");
        assert_eq!(front.sample, sample(9.0));
        assert_eq!(set.restore(ViewId::new(1)).unwrap(), sample(2.0));
        assert_eq!(set.restore(ViewId::new(2)).unwrap(), sample(9.0));
    }

    #[test]
    fn test_delete_selected_by_id() {
        let mut set = SavedViewSet::new();
        for i in 0..4 {
            set.save_or_overwrite(sample(i as f32)).unwrap();
        }
        set.set_selected(ViewId::new(1), true).unwrap();
        set.set_selected(ViewId::new(2), true).unwrap();

        assert_eq!(set.delete_selected().unwrap(), 2);
        let ids: Vec<String> = set.iter().map(|e| e.id().to_string()).collect();
        assert_eq!(ids, vec!["0", "3"]);
    }

    #[test]
    fn test_delete_nothing_selected() {
        let mut set = SavedViewSet::new();
        set.save_or_overwrite(sample(1.0)).unwrap();
        assert!(matches!(set.delete_selected(), Err(ReviewError::NothingSelected)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_restore_stale_id() {
        let mut set = SavedViewSet::new();
        let SaveOutcome::Created(id) = set.save_or_overwrite(sample(1.0)).unwrap() else {
            panic!("expected a new entry");
        };
        set.delete(id).unwrap();
        assert!(matches!(set.restore(id), Err(ReviewError::StaleIdentifier(stale)) if stale == id));
    }

    #[test]
    fn test_next_id_after_delete() {
        let mut set = SavedViewSet::new();
        for i in 0..4 {
            set.save_or_overwrite(sample(i as f32)).unwrap();
        }
        // Deleting a middle id never brings it back.
        set.delete(ViewId::new(1)).unwrap();
        assert_eq!(set.next_id().unwrap(), ViewId::new(4));
        // The highest id is recomputed from the survivors.
        set.delete(ViewId::new(3)).unwrap();
        assert_eq!(set.next_id().unwrap(), ViewId::new(3));
        set.clear();
        assert_eq!(set.next_id().unwrap(), ViewId::new(0));
    }

    #[test]
    fn test_next_id_overflow_is_an_error() {
        let json = format!(
            r#"[{{ "id": "{}", "name": "Last", "sample": {{ "rotation": "1 0 0 0", "location": [0.0, 0.0, 0.0], "distance": 1.0 }} }}]"#,
            u64::MAX
        );
        let mut set: SavedViewSet = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            set.next_id(),
            Err(ReviewError::IdentifierOverflow(id)) if id == ViewId::new(u64::MAX)
        ));
        assert!(matches!(
            set.save_or_overwrite(sample(1.0)),
            Err(ReviewError::IdentifierOverflow(_))
        ));
        assert_eq!(set.len(), 1);

        // Overwriting a selected entry needs no new id.
        set.set_selected(ViewId::new(u64::MAX), true).unwrap();
        assert_eq!(set.save_or_overwrite(sample(2.0)).unwrap(), SaveOutcome::Updated(1));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let json = r#"[
            { "id": "3", "name": "A", "sample": { "rotation": "1 0 0 0", "location": [0.0, 0.0, 0.0], "distance": 1.0 } },
            { "id": "3", "name": "B", "sample": { "rotation": "1 0 0 0", "location": [1.0, 0.0, 0.0], "distance": 1.0 } }
        ]"#;
        let set: SavedViewSet = serde_json::from_str(json).unwrap();
        assert!(matches!(
            set.validate(),
            Err(ReviewError::DuplicateIdentifier(id)) if id == ViewId::new(3)
        ));

        let mut set = SavedViewSet::new();
        set.save_or_overwrite(sample(1.0)).unwrap();
        set.save_or_overwrite(sample(2.0)).unwrap();
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_select_only() {
        let mut set = SavedViewSet::new();
        set.save_or_overwrite(sample(1.0)).unwrap();
        set.save_or_overwrite(sample(2.0)).unwrap();
        set.set_selected(ViewId::new(0), true).unwrap();
        set.select_only(ViewId::new(1)).unwrap();
        assert_eq!(set.selected_ids().collect::<Vec<_>>(), vec![ViewId::new(1)]);
        assert!(set.select_only(ViewId::new(7)).is_err());
        set.clear_selection();
        assert_eq!(set.selected_count(), 0);
    }

    #[test]
    fn test_view_id_parsing() {
        assert_eq!(" 12 ".parse::<ViewId>().unwrap(), ViewId::new(12));
        assert!("abc".parse::<ViewId>().is_err());
    }

    #[test]
    fn test_serialization_skips_selection() {
        let mut set = SavedViewSet::new();
        set.save_or_overwrite(sample(1.0)).unwrap();
        set.set_selected(ViewId::new(0), true).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json[0]["id"], "0");
        assert!(json[0].get("selected").is_none());
        let back: SavedViewSet = serde_json::from_value(json).unwrap();
        assert_eq!(back.selected_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_new_id_is_max_plus_one(count in 1usize..20, deletions in proptest::collection::vec(0u64..20, 0..10)) {
            let mut set = SavedViewSet::new();
            for i in 0..count {
                set.save_or_overwrite(sample(i as f32)).unwrap();
            }
            for id in deletions {
                let _ = set.delete(ViewId::new(id));
            }
            let expected = set.iter().map(|e| e.id().value()).max().map_or(0, |max| max + 1);
            let SaveOutcome::Created(id) = set.save_or_overwrite(sample(-1.0)).unwrap() else {
                panic!("nothing is selected");
            };
            prop_assert_eq!(id.value(), expected);
        }
    }
}
