//! Common Types
//!
//! Shared data structures used by the progress and confidence modules.

use serde::{Deserialize, Serialize};

/// Difficulty tier attached to a subject or a flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

impl Difficulty {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }
}

/// Per-card mastery estimate derived from cumulative review accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Default for Confidence {
    fn default() -> Self {
        Self::Low
    }
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Study queue selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    All,
    Difficult,
    Random,
}

impl StudyMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "difficult" => Some(Self::Difficult),
            "random" => Some(Self::Random),
            _ => None,
        }
    }
}

/// Per-subject progress record.
///
/// `session_scores` is append-only and insertion-ordered; the trailing
/// entries feed the rolling average that drives tier transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectProgress {
    pub subject_id: String,
    pub current_difficulty: Difficulty,
    pub completed_questions: u32,
    pub correct_answers: u32,
    pub session_scores: Vec<u32>,
    /// Unix millis, overwritten on every update.
    pub last_accessed: i64,
}

impl SubjectProgress {
    pub fn new(subject_id: impl Into<String>, now_ms: i64) -> Self {
        Self {
            subject_id: subject_id.into(),
            current_difficulty: Difficulty::default(),
            completed_questions: 0,
            correct_answers: 0,
            session_scores: Vec::new(),
            last_accessed: now_ms,
        }
    }
}

/// One flashcard. `difficulty` is fixed at creation; `confidence` is
/// recomputed after every review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
    pub review_count: u32,
    pub correct_count: u32,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<i64>,
}

impl Flashcard {
    pub fn new(
        id: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
            difficulty,
            review_count: 0,
            correct_count: 0,
            confidence: Confidence::default(),
            last_reviewed: None,
        }
    }
}

/// A set owns its cards exclusively; card order is generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardSet {
    pub id: String,
    pub title: String,
    pub subject_id: String,
    pub flashcards: Vec<Flashcard>,
    /// Cached count of high-confidence cards, recomputed at session completion.
    pub mastered_cards: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied: Option<i64>,
    pub created_at: i64,
}

/// Immutable record of one completed study pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub set_id: String,
    pub started_at: i64,
    pub ended_at: i64,
    pub cards_studied: u32,
    pub correct_answers: u32,
    pub average_response_time_ms: f64,
    pub difficulty: Difficulty,
}

/// Aggregate statistics across every subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_questions: u64,
    pub total_correct: u64,
    pub average_score: f64,
    /// Rounded percentage, 0 when no questions were answered.
    pub accuracy: u32,
    pub active_subjects: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_serialize_lowercase() {
        // persisted blobs carry the lowercase names, so the wire format is load-bearing
        assert_eq!(
            serde_json::to_string(&Difficulty::Intermediate).unwrap(),
            "\"intermediate\""
        );
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        let decoded: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(decoded, Difficulty::Advanced);
    }

    #[test]
    fn test_flashcard_round_trip_keeps_camel_case() {
        let card = Flashcard::new("card-1", "front", "back", Difficulty::Beginner);
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["reviewCount"], 0);
        assert!(value.get("lastReviewed").is_none());

        let decoded: Flashcard = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, card);
    }
}
