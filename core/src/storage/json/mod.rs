//! JSON file storage backend.
//!
//! The data directory holds one small JSON file per logical key.

pub mod connection;
pub mod mood_repository;

pub use connection::JsonConnection;
pub use mood_repository::{MoodRepository, CURRENT_MOOD_KEY, MOOD_HISTORY_KEY};
