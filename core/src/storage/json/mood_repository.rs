//! JSON-backed mood repository.
//!
//! Persists the two logical records, one key each:
//!
//! - `currentMood`  → one wire [`shared::MoodEntry`]
//! - `moodHistory`  → JSON array of wire entries, newest first, ≤ 30
//!
//! Stored content is external state the user (or another process) can
//! corrupt at any time, so reads are tolerant: unparseable content counts
//! as absent/empty, entries whose mood name left the catalog are skipped,
//! and an oversize stored history is clamped on read. Only genuine I/O
//! failures surface as errors.

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use super::connection::JsonConnection;
use crate::domain::models::mood::{MoodEntry, MAX_HISTORY_ENTRIES};
use crate::storage::traits::MoodStorage;

/// Storage key for the most recent selection.
pub const CURRENT_MOOD_KEY: &str = "currentMood";
/// Storage key for the bounded selection history.
pub const MOOD_HISTORY_KEY: &str = "moodHistory";

/// JSON file repository for the current mood and mood history.
#[derive(Debug, Clone)]
pub struct MoodRepository {
    connection: Arc<JsonConnection>,
}

impl MoodRepository {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self { connection }
    }
}

impl MoodStorage for MoodRepository {
    fn get_current_mood(&self) -> Result<Option<MoodEntry>> {
        let contents = match self.connection.read_key(CURRENT_MOOD_KEY)? {
            Some(contents) => contents,
            None => return Ok(None),
        };

        let wire: shared::MoodEntry = match serde_json::from_str(&contents) {
            Ok(wire) => wire,
            Err(e) => {
                warn!("Stored current mood is not valid JSON, treating as absent: {e}");
                return Ok(None);
            }
        };

        match MoodEntry::from_wire(&wire) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                warn!("Stored current mood is unusable, treating as absent: {e:#}");
                Ok(None)
            }
        }
    }

    fn set_current_mood(&self, entry: &MoodEntry) -> Result<()> {
        let json = serde_json::to_string(&entry.to_wire())
            .context("Failed to serialize current mood")?;
        self.connection.write_key(CURRENT_MOOD_KEY, &json)
    }

    fn get_history(&self) -> Result<Vec<MoodEntry>> {
        let contents = match self.connection.read_key(MOOD_HISTORY_KEY)? {
            Some(contents) => contents,
            None => return Ok(Vec::new()),
        };

        let wire_entries: Vec<shared::MoodEntry> = match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Stored mood history is not valid JSON, treating as empty: {e}");
                return Ok(Vec::new());
            }
        };

        let mut entries: Vec<MoodEntry> = wire_entries
            .iter()
            .filter_map(|wire| match MoodEntry::from_wire(wire) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unusable mood history entry: {e:#}");
                    None
                }
            })
            .collect();

        if entries.len() > MAX_HISTORY_ENTRIES {
            warn!(
                "Stored mood history has {} entries, clamping to {}",
                entries.len(),
                MAX_HISTORY_ENTRIES
            );
            entries.truncate(MAX_HISTORY_ENTRIES);
        }

        Ok(entries)
    }

    fn set_history(&self, entries: &[MoodEntry]) -> Result<()> {
        let wire_entries: Vec<shared::MoodEntry> = entries.iter().map(|e| e.to_wire()).collect();
        let json = serde_json::to_string(&wire_entries)
            .context("Failed to serialize mood history")?;
        self.connection.write_key(MOOD_HISTORY_KEY, &json)
    }

    fn clear(&self) -> Result<()> {
        self.connection.remove_key(CURRENT_MOOD_KEY)?;
        self.connection.remove_key(MOOD_HISTORY_KEY)?;
        info!("Cleared stored current mood and mood history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::mood::Mood;
    use tempfile::{tempdir, TempDir};

    fn setup_test_repo() -> (MoodRepository, Arc<JsonConnection>, TempDir) {
        let temp_dir = tempdir().unwrap();
        let conn = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        (MoodRepository::new(conn.clone()), conn, temp_dir)
    }

    #[test]
    fn test_current_mood_round_trip() {
        let (repo, _conn, _temp_dir) = setup_test_repo();

        assert!(repo.get_current_mood().unwrap().is_none());

        let entry = MoodEntry::now(Mood::Happy);
        repo.set_current_mood(&entry).unwrap();

        let loaded = repo.get_current_mood().unwrap().unwrap();
        assert_eq!(loaded, entry);
    }

    #[test]
    fn test_history_round_trip_preserves_order() {
        let (repo, _conn, _temp_dir) = setup_test_repo();

        let newest = MoodEntry::now(Mood::Angry);
        let older = MoodEntry::now(Mood::Sad);
        repo.set_history(&[newest.clone(), older.clone()]).unwrap();

        let loaded = repo.get_history().unwrap();
        assert_eq!(loaded, vec![newest, older]);
    }

    #[test]
    fn test_corrupt_current_mood_treated_as_absent() {
        let (repo, conn, _temp_dir) = setup_test_repo();
        conn.write_key(CURRENT_MOOD_KEY, "{not json at all").unwrap();
        assert!(repo.get_current_mood().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_history_treated_as_empty() {
        let (repo, conn, _temp_dir) = setup_test_repo();
        conn.write_key(MOOD_HISTORY_KEY, "42").unwrap();
        assert!(repo.get_history().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_mood_entries_skipped_from_history() {
        let (repo, conn, _temp_dir) = setup_test_repo();
        conn.write_key(
            MOOD_HISTORY_KEY,
            r#"[
                {"mood":"happy","timestamp":"2025-06-01T10:00:00+00:00","date":"2025-06-01"},
                {"mood":"nostalgic","timestamp":"2025-06-01T09:00:00+00:00","date":"2025-06-01"}
            ]"#,
        )
        .unwrap();

        let loaded = repo.get_history().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].mood, Mood::Happy);
    }

    #[test]
    fn test_current_mood_with_unknown_name_treated_as_absent() {
        let (repo, conn, _temp_dir) = setup_test_repo();
        conn.write_key(
            CURRENT_MOOD_KEY,
            r#"{"mood":"nostalgic","timestamp":"2025-06-01T10:00:00+00:00","date":"2025-06-01"}"#,
        )
        .unwrap();
        assert!(repo.get_current_mood().unwrap().is_none());
    }

    #[test]
    fn test_oversize_history_clamped_on_read() {
        let (repo, _conn, _temp_dir) = setup_test_repo();

        let entries: Vec<MoodEntry> = (0..40).map(|_| MoodEntry::now(Mood::Tired)).collect();
        // set_history stores whatever it is given; the clamp happens on read
        repo.set_history(&entries).unwrap();

        let loaded = repo.get_history().unwrap();
        assert_eq!(loaded.len(), MAX_HISTORY_ENTRIES);
    }

    #[test]
    fn test_clear_removes_both_records_and_is_idempotent() {
        let (repo, _conn, _temp_dir) = setup_test_repo();

        repo.set_current_mood(&MoodEntry::now(Mood::Excited)).unwrap();
        repo.set_history(&[MoodEntry::now(Mood::Excited)]).unwrap();

        repo.clear().unwrap();
        assert!(repo.get_current_mood().unwrap().is_none());
        assert!(repo.get_history().unwrap().is_empty());

        // Clearing an already-empty store is still a success
        repo.clear().unwrap();
        assert!(repo.get_current_mood().unwrap().is_none());
        assert!(repo.get_history().unwrap().is_empty());
    }

    #[test]
    fn test_persistence_across_repository_instances() {
        let (repo, _conn, temp_dir) = setup_test_repo();
        let entry = MoodEntry::now(Mood::Sad);
        repo.set_current_mood(&entry).unwrap();

        // Simulate an app restart with a fresh connection
        let conn2 = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let repo2 = MoodRepository::new(conn2);
        assert_eq!(repo2.get_current_mood().unwrap(), Some(entry));
    }
}
