//! Mood selection domain logic.
//!
//! `MoodService` is the single stateful component of the system: it owns the
//! mood catalog (with any session-local custom quotes), the persisted
//! current-mood/history records, and the in-memory "what was picked this
//! session" marker. The host constructs one instance and holds it; there is
//! no process-wide singleton.
//!
//! ## Persistence policy
//!
//! Storage is best-effort ambient state, not a correctness-critical data
//! path. Read paths degrade to absent/empty on any storage problem, write
//! failures are logged and swallowed, and only an invalid mood name ever
//! reaches a caller as an error.
//!
//! ## Reconciliation
//!
//! `load_todays_mood` is a pure read with a same-day freshness filter. The
//! host invokes it on startup and on its own storage-change or visibility
//! signals; the service registers no environment listeners itself.

use anyhow::Result;
use chrono::Local;
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::domain::catalog::MoodCatalog;
use crate::domain::commands::mood::{SelectMoodCommand, SelectMoodResult};
use crate::domain::models::mood::{Mood, MoodEntry, MAX_HISTORY_ENTRIES};
use crate::storage::json::{JsonConnection, MoodRepository};
use crate::storage::traits::MoodStorage;

type MoodSelectedCallback = Box<dyn Fn(&shared::MoodSelected) + Send>;

/// Service for recording and reconciling daily mood selections.
pub struct MoodService {
    mood_repository: MoodRepository,
    catalog: MoodCatalog,
    session_mood: Option<Mood>,
    subscribers: Vec<MoodSelectedCallback>,
}

impl MoodService {
    /// Create a new MoodService over the given storage connection.
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            mood_repository: MoodRepository::new(connection),
            catalog: MoodCatalog::builtin(),
            session_mood: None,
            subscribers: Vec::new(),
        }
    }

    /// Record a mood selection.
    ///
    /// Validates the name against the catalog, picks a quote uniformly at
    /// random from the mood's effective pool (repeats across calls are
    /// allowed), persists the entry as current mood plus the newest history
    /// entry, notifies subscribers, and returns everything the presentation
    /// layer needs to render the selection.
    ///
    /// An unknown mood name fails with
    /// [`MoodValidationError`](crate::domain::models::mood::MoodValidationError)
    /// and leaves all state untouched.
    pub fn select_mood(&mut self, command: SelectMoodCommand) -> Result<SelectMoodResult> {
        let mood = Mood::from_name(&command.mood).map_err(|e| {
            warn!("Rejected mood selection: {e}");
            e
        })?;

        let entry = MoodEntry::now(mood);
        let definition = self.catalog.get(mood).to_shared();
        let quote = definition
            .quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default();

        if let Err(e) = self.persist_selection(&entry) {
            warn!("Failed to persist mood selection, continuing without storage: {e:#}");
        }
        self.session_mood = Some(mood);

        info!("Mood selected: {} at {}", mood, entry.timestamp.to_rfc3339());

        let event = shared::MoodSelected {
            mood: mood.as_str().to_string(),
            timestamp: entry.timestamp.to_rfc3339(),
            definition: definition.clone(),
        };
        for subscriber in &self.subscribers {
            subscriber(&event);
        }

        Ok(SelectMoodResult {
            entry,
            quote,
            definition,
        })
    }

    /// Return the stored current mood if it was selected today.
    ///
    /// A mood persisted on an earlier calendar day is stale and yields
    /// `None`, so a resumed session never shows yesterday's mood as fresh.
    /// Pure read; history is not touched.
    pub fn load_todays_mood(&self) -> Option<MoodEntry> {
        let entry = match self.mood_repository.get_current_mood() {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read stored current mood: {e:#}");
                return None;
            }
        };

        let today = Local::now().date_naive();
        if entry.date == today {
            Some(entry)
        } else {
            debug!(
                "Stored current mood from {} is stale (today is {})",
                entry.date, today
            );
            None
        }
    }

    /// Return the stored history, newest first, at most 30 entries.
    /// Unavailable or malformed storage yields an empty list.
    pub fn get_history(&self) -> Vec<MoodEntry> {
        match self.mood_repository.get_history() {
            Ok(history) => history,
            Err(e) => {
                warn!("Could not read stored mood history: {e:#}");
                Vec::new()
            }
        }
    }

    /// Remove the stored current mood and history. Idempotent.
    pub fn clear_history(&self) {
        if let Err(e) = self.mood_repository.clear() {
            warn!("Failed to clear stored mood data: {e:#}");
        }
    }

    /// The mood selected via [`select_mood`](Self::select_mood) in this
    /// session, if any. Not re-read from storage.
    pub fn current_mood(&self) -> Option<Mood> {
        self.session_mood
    }

    /// Append a custom quote to a mood's pool for the rest of the session.
    /// No-op for unknown mood names or blank text. Never persisted.
    pub fn add_custom_quote(&mut self, mood_name: &str, quote: &str) {
        let trimmed = quote.trim();
        if trimmed.is_empty() {
            debug!("Ignoring empty custom quote for '{mood_name}'");
            return;
        }

        match Mood::from_name(mood_name) {
            Ok(mood) => {
                self.catalog.add_quote(mood, trimmed.to_string());
                info!("Custom quote added to {mood} pool");
            }
            Err(e) => warn!("Ignoring custom quote: {e}"),
        }
    }

    /// Register a callback invoked after every successful selection.
    pub fn on_mood_selected(&mut self, callback: impl Fn(&shared::MoodSelected) + Send + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Read access to the catalog (icons, themes, effective quote pools).
    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    fn persist_selection(&self, entry: &MoodEntry) -> Result<()> {
        let mut history = self.mood_repository.get_history()?;
        history.insert(0, entry.clone());
        history.truncate(MAX_HISTORY_ENTRIES);

        self.mood_repository.set_current_mood(entry)?;
        self.mood_repository.set_history(&history)?;
        Ok(())
    }
}
