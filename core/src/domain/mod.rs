pub mod catalog;
pub mod commands;
pub mod models;
pub mod mood_service;

pub use catalog::{MoodCatalog, MoodDefinition};
pub use mood_service::MoodService;
