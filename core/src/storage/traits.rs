//! Storage abstraction for the mood domain layer.
//!
//! The domain services only depend on this trait, so the JSON file backend
//! can be swapped for any other local key-value store without touching the
//! domain logic.

use anyhow::Result;

use crate::domain::models::mood::MoodEntry;

/// Interface for persisting the current mood and the bounded mood history.
///
/// Implementations own the two logical records exclusively; nothing else in
/// the process writes to the underlying keys. Reads are point-in-time
/// snapshots: another process may mutate the store between calls, and
/// callers re-read on their own change signals rather than holding locks.
pub trait MoodStorage: Send + Sync {
    /// Read the stored current mood, if any.
    ///
    /// Corrupt or unrecognizable stored content counts as absent, not as an
    /// error; only real storage failures (I/O) surface as `Err`.
    fn get_current_mood(&self) -> Result<Option<MoodEntry>>;

    /// Overwrite the stored current mood.
    fn set_current_mood(&self, entry: &MoodEntry) -> Result<()>;

    /// Read the stored history, newest first, at most
    /// [`MAX_HISTORY_ENTRIES`](crate::domain::models::mood::MAX_HISTORY_ENTRIES)
    /// entries. Corrupt content counts as empty.
    fn get_history(&self) -> Result<Vec<MoodEntry>>;

    /// Overwrite the stored history.
    fn set_history(&self, entries: &[MoodEntry]) -> Result<()>;

    /// Remove both records. Succeeds when nothing is stored.
    fn clear(&self) -> Result<()>;
}
