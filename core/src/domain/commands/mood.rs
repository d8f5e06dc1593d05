use crate::domain::models::mood::MoodEntry;

/// Request to record a mood selection.
#[derive(Debug, Clone)]
pub struct SelectMoodCommand {
    /// Mood name as supplied by the presentation layer (e.g. from a button)
    pub mood: String,
}

/// Everything the presentation layer needs to render a fresh selection.
#[derive(Debug, Clone)]
pub struct SelectMoodResult {
    /// The entry that was set as current mood and prepended to history
    pub entry: MoodEntry,
    /// The randomly chosen motivational quote
    pub quote: String,
    /// Icon, theme tag and effective quote pool for the selected mood
    pub definition: shared::MoodDefinition,
}
