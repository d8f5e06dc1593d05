//! The built-in mood catalog.
//!
//! Five fixed mood categories, each with a display glyph, a theme tag for the
//! presentation layer, and a pool of motivational quotes. The built-in data
//! is immutable; `add_quote` grows a session-local copy that is never
//! persisted across restarts.

use std::collections::BTreeMap;

use crate::domain::models::mood::Mood;

/// Display/quote data for one mood category.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodDefinition {
    pub icon: &'static str,
    /// Theme tag the presentation layer maps to a visual theme
    pub theme: &'static str,
    pub quotes: Vec<String>,
}

impl MoodDefinition {
    /// Convert to the outward-facing definition type.
    pub fn to_shared(&self) -> shared::MoodDefinition {
        shared::MoodDefinition {
            icon: self.icon.to_string(),
            theme: self.theme.to_string(),
            quotes: self.quotes.clone(),
        }
    }
}

/// The full mood catalog, keyed by mood.
///
/// Always contains exactly one definition per `Mood` variant.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodCatalog {
    definitions: BTreeMap<Mood, MoodDefinition>,
}

impl MoodCatalog {
    /// Build the catalog with the built-in quote pools.
    pub fn builtin() -> Self {
        let mut definitions = BTreeMap::new();

        definitions.insert(
            Mood::Happy,
            definition("😊", "happy", &[
                "Keep smiling, it makes people wonder what you're up to.",
                "Happiness is not something ready made. It comes from your own actions.",
                "The best way to cheer yourself up is to try to cheer somebody else up.",
                "Every day may not be good, but there's something good in every day.",
                "Choose to be optimistic, it feels better.",
            ]),
        );
        definitions.insert(
            Mood::Sad,
            definition("😢", "sad", &[
                "It's okay to feel not okay.",
                "Tears are words that need to be written.",
                "Sometimes you need to sit lonely on the floor in a quiet room in order to hear your own voice.",
                "The cure for anything is salt water: sweat, tears, or the sea.",
                "It's okay to not be okay as long as you don't stay that way.",
            ]),
        );
        definitions.insert(
            Mood::Angry,
            definition("😠", "angry", &[
                "Take a deep breath and let it go.",
                "Anger is an acid that can do more harm to the vessel in which it is stored than to anything on which it is poured.",
                "When angry, count to ten before you speak. If very angry, count to one hundred.",
                "The best fighter is never angry.",
                "You will not be punished for your anger; you will be punished by your anger.",
            ]),
        );
        definitions.insert(
            Mood::Tired,
            definition("😴", "tired", &[
                "Rest if you must, but don't quit.",
                "Take rest; a field that has rested gives a bountiful crop.",
                "Sometimes the most productive thing you can do is relax.",
                "Rest when you're weary. Refresh and renew yourself, your body, your mind, your spirit.",
                "Your body needs rest. Your mind needs peace. Your soul needs quiet.",
            ]),
        );
        definitions.insert(
            Mood::Excited,
            definition("🤩", "excited", &[
                "Let your excitement be louder than your fears.",
                "Enthusiasm is the electricity of life.",
                "Nothing great was ever achieved without enthusiasm.",
                "The way to get started is to quit talking and begin doing.",
                "Excitement is the more practical synonym for happiness, and it is precisely what you should strive to chase.",
            ]),
        );

        Self { definitions }
    }

    /// Look up the definition for a mood. Every mood has one.
    pub fn get(&self, mood: Mood) -> &MoodDefinition {
        &self.definitions[&mood]
    }

    /// Append a quote to a mood's pool for the rest of the session.
    pub fn add_quote(&mut self, mood: Mood, quote: String) {
        if let Some(definition) = self.definitions.get_mut(&mood) {
            definition.quotes.push(quote);
        }
    }

    /// Iterate all definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Mood, &MoodDefinition)> {
        self.definitions.iter().map(|(mood, def)| (*mood, def))
    }
}

impl Default for MoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn definition(icon: &'static str, theme: &'static str, quotes: &[&str]) -> MoodDefinition {
    MoodDefinition {
        icon,
        theme,
        quotes: quotes.iter().map(|q| q.to_string()).collect(),
    }
}
