pub mod flashcards;
pub mod progress;
pub mod sessions;
