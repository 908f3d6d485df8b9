//! Named save slots.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SaveError, SaveResult};
use crate::snapshot::Snapshot;

/// File name stem used when exporting without a configured one.
pub const DEFAULT_EXPORT_STEM: &str = "troubadour-saves";

/// One named save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveEntry {
    /// Slot id, unique within a [`SaveSet`].
    pub id: u32,
    /// Player-chosen name.
    pub name: String,
    /// Captured game state.
    pub snapshot: Snapshot,
    /// When the save was made.
    pub date: DateTime<Utc>,
}

impl SaveEntry {
    /// Whether two entries hold the same save, ignoring their ids.
    pub fn same_content(&self, other: &SaveEntry) -> bool {
        self.name == other.name && self.date == other.date && self.snapshot == other.snapshot
    }
}

/// A row of the saves table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRow {
    /// Slot id.
    pub id: u32,
    /// Save name.
    pub name: String,
    /// Date as `YYYY-MM-DD HH:MM`.
    pub date: String,
}

/// A serialized save set ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name.
    pub file_name: String,
    /// JSON contents.
    pub contents: String,
}

/// All saves, unique by id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SaveSetRecord")]
pub struct SaveSet {
    saves: Vec<SaveEntry>,
}

/// Stored shape of a [`SaveSet`], before id uniqueness is checked.
#[derive(Deserialize)]
struct SaveSetRecord {
    #[serde(default)]
    saves: Vec<SaveEntry>,
}

impl TryFrom<SaveSetRecord> for SaveSet {
    type Error = SaveError;

    fn try_from(record: SaveSetRecord) -> SaveResult<Self> {
        let mut seen = HashSet::with_capacity(record.saves.len());
        if let Some(dup) = record.saves.iter().find(|s| !seen.insert(s.id)) {
            return Err(SaveError::DuplicateId(dup.id));
        }
        Ok(Self {
            saves: record.saves,
        })
    }
}

impl SaveSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a set from exported JSON.
    pub fn import(blob: &str) -> SaveResult<Self> {
        serde_json::from_str(blob).map_err(SaveError::Deserialize)
    }

    /// Saves in insertion order.
    pub fn saves(&self) -> &[SaveEntry] {
        &self.saves
    }

    /// Number of saves.
    pub fn len(&self) -> usize {
        self.saves.len()
    }

    /// Whether there are no saves.
    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }

    /// One past the highest id, or 0 for an empty set.
    ///
    /// Deleting the highest save makes its id available again.
    pub fn next_id(&self) -> SaveResult<u32> {
        match self.saves.iter().map(|s| s.id).max() {
            None => Ok(0),
            Some(max) => max.checked_add(1).ok_or(SaveError::IdSpaceExhausted),
        }
    }

    /// Add a save and return its id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        snapshot: Snapshot,
        date: DateTime<Utc>,
    ) -> SaveResult<u32> {
        let id = self.next_id()?;
        self.saves.push(SaveEntry {
            id,
            name: name.into(),
            snapshot,
            date,
        });
        Ok(id)
    }

    /// Look up a save.
    pub fn get(&self, id: u32) -> Option<&SaveEntry> {
        self.saves.iter().find(|s| s.id == id)
    }

    /// Remove a save, returning it.
    pub fn delete(&mut self, id: u32) -> Option<SaveEntry> {
        let index = self.saves.iter().position(|s| s.id == id)?;
        Some(self.saves.remove(index))
    }

    /// Add every incoming save not already present.
    ///
    /// Presence compares name, date and snapshot. Added saves are renumbered
    /// from [`next_id`](Self::next_id) upward; local saves are never changed.
    /// Nothing is added when the new ids would not fit.
    /// Returns how many saves were added.
    pub fn merge(&mut self, incoming: SaveSet) -> SaveResult<usize> {
        let mut fresh: Vec<SaveEntry> = Vec::new();
        for entry in incoming.saves {
            let known = self.saves.iter().chain(&fresh).any(|s| s.same_content(&entry));
            if !known {
                fresh.push(entry);
            }
        }
        if fresh.is_empty() {
            return Ok(0);
        }

        let first = self.next_id()?;
        let last = u32::try_from(fresh.len() - 1)
            .ok()
            .and_then(|extra| first.checked_add(extra))
            .ok_or(SaveError::IdSpaceExhausted)?;

        let added = fresh.len();
        for (id, mut entry) in (first..=last).zip(fresh) {
            entry.id = id;
            self.saves.push(entry);
        }
        debug!(added, total = self.saves.len(), "merged saves");
        Ok(added)
    }

    /// Serialize for download, named `<stem>-YYYY-MM-DD.json`.
    pub fn export(&self, stem: &str, date: NaiveDate) -> SaveResult<ExportFile> {
        let contents = serde_json::to_string_pretty(self).map_err(SaveError::Serialize)?;
        Ok(ExportFile {
            file_name: format!("{stem}-{}.json", date.format("%Y-%m-%d")),
            contents,
        })
    }

    /// Rows for the saves table, in insertion order.
    pub fn rows(&self) -> Vec<SaveRow> {
        self.saves
            .iter()
            .map(|s| SaveRow {
                id: s.id,
                name: s.name.clone(),
                date: s.date.format("%Y-%m-%d %H:%M").to_string(),
            })
            .collect()
    }
}
