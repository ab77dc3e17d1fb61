//! Flashcard sets: creation from generated card tuples, study queues,
//! review scoring, and session close-out.
//!
//! Card generation itself happens upstream (an LLM collaborator); this
//! service only consumes its output as front/back/difficulty tuples.

use serde::Deserialize;
use uuid::Uuid;

use studypath_algo::{
    self as algo, Difficulty, Flashcard, FlashcardSet, StudyMode, StudySession,
};

use crate::services::sessions;
use crate::storage::{keys, load_or_default, KeyValueStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum FlashcardError {
    #[error("flashcard set not found")]
    SetNotFound,
    #[error("card not found in set")]
    CardNotFound,
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// One generated card tuple, as produced by the upstream generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Figures the client measured during the study pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFigures {
    pub cards_studied: u32,
    pub correct_answers: u32,
    #[serde(default)]
    pub average_response_time_ms: f64,
    #[serde(default)]
    pub started_at: Option<i64>,
}

fn load_sets(store: &dyn KeyValueStore) -> Vec<FlashcardSet> {
    load_or_default(store, keys::flashcard_sets_key())
}

fn save_sets(store: &dyn KeyValueStore, sets: &[FlashcardSet]) -> Result<(), StorageError> {
    store.set(keys::flashcard_sets_key(), serde_json::to_value(sets)?)
}

pub fn list_sets(store: &dyn KeyValueStore) -> Vec<FlashcardSet> {
    load_sets(store)
}

pub fn get_set(store: &dyn KeyValueStore, set_id: &str) -> Result<FlashcardSet, FlashcardError> {
    load_sets(store)
        .into_iter()
        .find(|set| set.id == set_id)
        .ok_or(FlashcardError::SetNotFound)
}

/// Create a set from already-generated cards, preserving generation order.
pub fn create_set(
    store: &dyn KeyValueStore,
    title: &str,
    subject_id: &str,
    cards: Vec<NewCard>,
) -> Result<FlashcardSet, FlashcardError> {
    let flashcards = cards
        .into_iter()
        .map(|card| {
            Flashcard::new(
                Uuid::new_v4().to_string(),
                card.front,
                card.back,
                card.difficulty,
            )
        })
        .collect();

    let set = FlashcardSet {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        subject_id: subject_id.to_string(),
        flashcards,
        mastered_cards: 0,
        last_studied: None,
        created_at: now_ms(),
    };

    let mut sets = load_sets(store);
    sets.push(set.clone());
    save_sets(store, &sets)?;
    Ok(set)
}

/// Study queue for one set under the requested mode.
pub fn study_queue(
    store: &dyn KeyValueStore,
    set_id: &str,
    mode: StudyMode,
) -> Result<Vec<Flashcard>, FlashcardError> {
    let set = get_set(store, set_id)?;
    let mut rng = rand::thread_rng();
    Ok(algo::filter_by_mode(&set.flashcards, mode, &mut rng))
}

/// Score one review outcome and persist the updated card.
pub fn review_card(
    store: &dyn KeyValueStore,
    set_id: &str,
    card_id: &str,
    was_correct: bool,
) -> Result<Flashcard, FlashcardError> {
    let mut sets = load_sets(store);
    let set = sets
        .iter_mut()
        .find(|set| set.id == set_id)
        .ok_or(FlashcardError::SetNotFound)?;
    let slot = set
        .flashcards
        .iter_mut()
        .find(|card| card.id == card_id)
        .ok_or(FlashcardError::CardNotFound)?;

    let reviewed = algo::review_card(slot.clone(), was_correct, now_ms());
    *slot = reviewed.clone();
    save_sets(store, &sets)?;
    Ok(reviewed)
}

/// Close out a study pass: recount mastery, stamp the set, and append an
/// immutable session record to the capped history.
pub fn complete_session(
    store: &dyn KeyValueStore,
    set_id: &str,
    figures: SessionFigures,
) -> Result<(FlashcardSet, StudySession), FlashcardError> {
    let mut sets = load_sets(store);
    let slot = sets
        .iter_mut()
        .find(|set| set.id == set_id)
        .ok_or(FlashcardError::SetNotFound)?;

    let now = now_ms();
    let completed = algo::complete_session(slot.clone(), now);
    *slot = completed.clone();

    let session = StudySession {
        id: Uuid::new_v4().to_string(),
        set_id: set_id.to_string(),
        started_at: figures.started_at.unwrap_or(now),
        ended_at: now,
        cards_studied: figures.cards_studied,
        correct_answers: figures.correct_answers,
        average_response_time_ms: figures.average_response_time_ms,
        difficulty: algo::dominant_difficulty(&completed.flashcards),
    };

    save_sets(store, &sets)?;
    sessions::append(store, session.clone())?;
    Ok((completed, session))
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
