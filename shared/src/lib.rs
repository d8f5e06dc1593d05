use serde::{Deserialize, Serialize};

/// A single persisted mood selection.
///
/// This is the exact record written under the `currentMood` key and as the
/// elements of the `moodHistory` array, so external tools (and older data)
/// can read the files directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// One of the five mood names: "happy", "sad", "angry", "tired", "excited"
    pub mood: String,
    /// Instant of selection (RFC 3339, UTC)
    pub timestamp: String,
    /// Local calendar day of selection (YYYY-MM-DD), used for the same-day check
    pub date: String,
}

/// Display data for one mood category.
///
/// The presentation layer renders the icon and maps `theme` to a visual
/// theme; it never needs to know where the quotes came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodDefinition {
    /// Display glyph, e.g. "😊"
    pub icon: String,
    /// Theme tag for the presentation layer (same word as the mood name)
    pub theme: String,
    /// Motivational quote pool (built-ins plus any session-local additions)
    pub quotes: Vec<String>,
}

/// Notification payload emitted after every successful mood selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSelected {
    pub mood: String,
    /// Instant of selection (RFC 3339, UTC)
    pub timestamp: String,
    /// Full effective definition at selection time
    pub definition: MoodDefinition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_entry_round_trip() {
        let entry = MoodEntry {
            mood: "happy".to_string(),
            timestamp: "2025-06-01T09:30:00+00:00".to_string(),
            date: "2025-06-01".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let back: MoodEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_mood_entry_wire_field_names() {
        let entry = MoodEntry {
            mood: "tired".to_string(),
            timestamp: "2025-06-01T22:00:00+00:00".to_string(),
            date: "2025-06-01".to_string(),
        };

        let value: serde_json::Value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["mood"], "tired");
        assert_eq!(value["timestamp"], "2025-06-01T22:00:00+00:00");
        assert_eq!(value["date"], "2025-06-01");
    }

    #[test]
    fn test_mood_selected_round_trip() {
        let event = MoodSelected {
            mood: "excited".to_string(),
            timestamp: "2025-06-01T12:00:00+00:00".to_string(),
            definition: MoodDefinition {
                icon: "🤩".to_string(),
                theme: "excited".to_string(),
                quotes: vec!["Enthusiasm is the electricity of life.".to_string()],
            },
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: MoodSelected = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
