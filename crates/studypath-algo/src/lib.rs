//! # studypath-algo - adaptive study scoring
//!
//! Pure scoring logic for the studypath learning platform:
//!
//! - **Progress tracking** - per-subject difficulty tiers driven by a
//!   rolling average of recent question scores
//! - **Flashcard confidence** - per-card mastery estimates derived from
//!   cumulative review accuracy
//! - **Study queues** - mode-based card filtering, including a uniformly
//!   shuffled queue drawn from a caller-supplied RNG
//!
//! Every operation is a total, synchronous transformation of an in-memory
//! record: no I/O, no clocks (timestamps are passed in), no ambient
//! randomness. Persistence and serialization of the records is the
//! caller's responsibility.
//!
//! ## Modules
//!
//! - [`types`] - shared data model (progress records, flashcards, sessions)
//! - [`progress`] - answer recording, tier adjustment, aggregate statistics
//! - [`confidence`] - review scoring, study queue filters, session close-out
//!
//! ## Example
//!
//! ```rust
//! use studypath_algo::{record_answer, Difficulty, SubjectProgress};
//!
//! let progress = SubjectProgress::new("algebra", 0);
//! let progress = record_answer(progress, 90, true, 1_000);
//! assert_eq!(progress.current_difficulty, Difficulty::Intermediate);
//! assert_eq!(progress.completed_questions, 1);
//! ```

pub mod confidence;
pub mod progress;
pub mod types;

pub use confidence::{complete_session, dominant_difficulty, filter_by_mode, review_card};
pub use progress::{overall_stats, record_answer};
pub use types::{
    Confidence, Difficulty, Flashcard, FlashcardSet, OverallStats, StudyMode, StudySession,
    SubjectProgress,
};
