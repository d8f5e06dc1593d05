pub mod json;
pub mod traits;

pub use json::{JsonConnection, MoodRepository};
pub use traits::MoodStorage;
