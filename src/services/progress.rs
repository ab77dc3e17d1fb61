//! Subject progress: read-modify-write around the scoring core.
//!
//! The store holds one blob mapping subject id to its progress record.
//! Records are created lazily with defaults on first access and are never
//! deleted. Callers serialize access per subject; there is at most one
//! logical writer between a read and its write-back.

use std::collections::HashMap;

use studypath_algo::{self as algo, OverallStats, SubjectProgress};

use crate::storage::{keys, load_or_default, KeyValueStore, StorageError};

pub type ProgressMap = HashMap<String, SubjectProgress>;

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

pub fn load_all(store: &dyn KeyValueStore) -> ProgressMap {
    load_or_default(store, keys::subject_progress_key())
}

fn save_all(store: &dyn KeyValueStore, all: &ProgressMap) -> Result<(), StorageError> {
    store.set(keys::subject_progress_key(), serde_json::to_value(all)?)
}

/// All subject records, ordered by subject id for stable listings.
pub fn list_subjects(store: &dyn KeyValueStore) -> Vec<SubjectProgress> {
    let mut subjects: Vec<SubjectProgress> = load_all(store).into_values().collect();
    subjects.sort_by(|a, b| a.subject_id.cmp(&b.subject_id));
    subjects
}

/// The record for one subject, lazily defaulted if none is stored yet.
pub fn get_or_default(store: &dyn KeyValueStore, subject_id: &str) -> SubjectProgress {
    load_all(store)
        .remove(subject_id)
        .unwrap_or_else(|| SubjectProgress::new(subject_id, now_ms()))
}

/// Record an answered question and persist the updated record.
///
/// `score` must already be clamped to 0..=100 by the route layer.
pub fn record_answer(
    store: &dyn KeyValueStore,
    subject_id: &str,
    score: u32,
    was_correct: bool,
) -> Result<SubjectProgress, ProgressError> {
    let mut all = load_all(store);
    let now = now_ms();
    let progress = all
        .remove(subject_id)
        .unwrap_or_else(|| SubjectProgress::new(subject_id, now));

    let updated = algo::record_answer(progress, score, was_correct, now);
    all.insert(subject_id.to_string(), updated.clone());
    save_all(store, &all)?;
    Ok(updated)
}

pub fn overview(store: &dyn KeyValueStore) -> OverallStats {
    let all = load_all(store);
    algo::overall_stats(all.values())
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use studypath_algo::Difficulty;

    #[test]
    fn test_record_answer_creates_record_lazily() {
        let store = MemoryStore::new();
        let progress = record_answer(&store, "algebra", 70, true).unwrap();

        assert_eq!(progress.subject_id, "algebra");
        assert_eq!(progress.completed_questions, 1);
        assert_eq!(progress.correct_answers, 1);
        assert_eq!(progress.session_scores, vec![70]);

        let listed = list_subjects(&store);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], progress);
    }

    #[test]
    fn test_sustained_scores_climb_tiers_across_writes() {
        let store = MemoryStore::new();
        // one step per answer: beginner -> intermediate -> advanced
        let first = record_answer(&store, "algebra", 90, true).unwrap();
        assert_eq!(first.current_difficulty, Difficulty::Intermediate);

        for _ in 0..4 {
            record_answer(&store, "algebra", 90, true).unwrap();
        }
        let progress = get_or_default(&store, "algebra");
        assert_eq!(progress.current_difficulty, Difficulty::Advanced);
        assert_eq!(progress.completed_questions, 5);
    }

    #[test]
    fn test_overview_spans_subjects() {
        let store = MemoryStore::new();
        record_answer(&store, "algebra", 100, true).unwrap();
        record_answer(&store, "history", 0, false).unwrap();

        let stats = overview(&store);
        assert_eq!(stats.total_questions, 2);
        assert_eq!(stats.total_correct, 1);
        assert_eq!(stats.accuracy, 50);
        assert_eq!(stats.active_subjects, 2);
        assert!((stats.average_score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_blob_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store
            .set(keys::subject_progress_key(), serde_json::json!(["not", "a", "map"]))
            .unwrap();

        assert!(load_all(&store).is_empty());
        let progress = record_answer(&store, "algebra", 50, false).unwrap();
        assert_eq!(progress.completed_questions, 1);
    }

    #[test]
    fn test_get_or_default_does_not_persist() {
        let store = MemoryStore::new();
        let progress = get_or_default(&store, "geometry");
        assert_eq!(progress.completed_questions, 0);
        assert!(list_subjects(&store).is_empty());
    }
}
