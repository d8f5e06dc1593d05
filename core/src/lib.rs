//! # Mood Mirror Core
//!
//! Domain and storage layers for a daily mood check-in: five fixed mood
//! categories, a motivational quote pool per mood, and local persistence of
//! the current selection plus a bounded history.
//!
//! The presentation layer (whatever renders buttons, icons and themes) owns
//! all rendering and event wiring. It constructs one [`MoodMirror`], calls
//! [`MoodService::select_mood`](domain::MoodService::select_mood) on user
//! action, and calls
//! [`MoodService::load_todays_mood`](domain::MoodService::load_todays_mood)
//! on startup and on its own storage-change/visibility signals. Everything
//! is synchronous; there is no async runtime and no server.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use domain::{MoodCatalog, MoodService};
pub use storage::JsonConnection;

/// Entry point bundling the service with its storage connection.
pub struct MoodMirror {
    pub mood_service: MoodService,
}

impl MoodMirror {
    /// Open (creating if needed) the given data directory and build the
    /// service over it.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let connection = Arc::new(JsonConnection::new(data_dir)?);
        Ok(Self {
            mood_service: MoodService::new(connection),
        })
    }

    /// Build over the per-user default data directory.
    pub fn with_default_data_dir() -> Result<Self> {
        Self::new(JsonConnection::default_data_dir())
    }
}
