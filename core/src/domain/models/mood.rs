use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the mood history (sliding window,
/// oldest dropped first).
pub const MAX_HISTORY_ENTRIES: usize = 30;

/// The five supported mood categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Tired,
    Excited,
}

impl Mood {
    /// All moods, in catalog order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Tired,
        Mood::Excited,
    ];

    /// Lowercase name used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
            Mood::Excited => "excited",
        }
    }

    /// Parse a mood name supplied by the presentation layer or read back
    /// from storage. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Result<Self, MoodValidationError> {
        match name.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "tired" => Ok(Mood::Tired),
            "excited" => Ok(Mood::Excited),
            _ => Err(MoodValidationError::UnknownMood(name.to_string())),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoodValidationError {
    #[error("Unknown mood name: '{0}'")]
    UnknownMood(String),
}

/// A single mood selection as the domain layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    /// Instant of selection
    pub timestamp: DateTime<Utc>,
    /// Local calendar day of selection, used for the same-day check
    pub date: NaiveDate,
}

impl MoodEntry {
    /// Build an entry for a selection happening right now.
    pub fn now(mood: Mood) -> Self {
        Self {
            mood,
            timestamp: Utc::now(),
            date: Local::now().date_naive(),
        }
    }

    /// Convert to the persisted wire record.
    pub fn to_wire(&self) -> shared::MoodEntry {
        shared::MoodEntry {
            mood: self.mood.as_str().to_string(),
            timestamp: self.timestamp.to_rfc3339(),
            date: self.date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Parse a persisted wire record back into a domain entry.
    ///
    /// Fails if the mood name is not in the catalog or the timestamp/date
    /// fields do not parse; callers reading storage treat that as absent
    /// data rather than an error.
    pub fn from_wire(wire: &shared::MoodEntry) -> Result<Self> {
        let mood = Mood::from_name(&wire.mood)?;
        let timestamp = DateTime::parse_from_rfc3339(&wire.timestamp)
            .with_context(|| format!("Invalid timestamp in stored mood entry: {}", wire.timestamp))?
            .with_timezone(&Utc);
        let date = NaiveDate::parse_from_str(&wire.date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date in stored mood entry: {}", wire.date))?;

        Ok(Self {
            mood,
            timestamp,
            date,
        })
    }
}
