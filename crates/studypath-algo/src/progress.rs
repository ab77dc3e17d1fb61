//! Adaptive difficulty tracking.
//!
//! A subject's tier follows the rolling average of its most recent scores.
//! Transitions move one step at a time; the thresholds are behavior
//! compatibility constants and must not be retuned.

use crate::types::{Difficulty, OverallStats, SubjectProgress};

const ROLLING_WINDOW: usize = 5;
const PROMOTE_TO_INTERMEDIATE_AVG: f64 = 80.0;
const PROMOTE_TO_ADVANCED_AVG: f64 = 85.0;
const DEMOTE_TO_INTERMEDIATE_AVG: f64 = 60.0;
const DEMOTE_TO_BEGINNER_AVG: f64 = 50.0;

/// Record one answered question and re-evaluate the difficulty tier.
///
/// `score` must already be clamped to 0..=100 by the caller. The tier moves
/// at most one step per call, evaluated against the post-append rolling
/// average of the last [`ROLLING_WINDOW`] scores.
pub fn record_answer(
    mut progress: SubjectProgress,
    score: u32,
    was_correct: bool,
    now_ms: i64,
) -> SubjectProgress {
    progress.completed_questions += 1;
    if was_correct {
        progress.correct_answers += 1;
    }
    progress.session_scores.push(score);
    progress.last_accessed = now_ms;

    let avg = rolling_average(&progress.session_scores);
    progress.current_difficulty = adjust_tier(progress.current_difficulty, avg);
    progress
}

fn rolling_average(scores: &[u32]) -> f64 {
    let start = scores.len().saturating_sub(ROLLING_WINDOW);
    let window = &scores[start..];
    if window.is_empty() {
        return 0.0;
    }
    window.iter().map(|&s| s as f64).sum::<f64>() / window.len() as f64
}

fn adjust_tier(current: Difficulty, avg: f64) -> Difficulty {
    match current {
        Difficulty::Beginner if avg >= PROMOTE_TO_INTERMEDIATE_AVG => Difficulty::Intermediate,
        Difficulty::Intermediate if avg >= PROMOTE_TO_ADVANCED_AVG => Difficulty::Advanced,
        Difficulty::Advanced if avg < DEMOTE_TO_INTERMEDIATE_AVG => Difficulty::Intermediate,
        Difficulty::Intermediate if avg < DEMOTE_TO_BEGINNER_AVG => Difficulty::Beginner,
        other => other,
    }
}

/// Aggregate statistics over every subject record.
///
/// All divisions guard the empty case and yield 0 instead of an error.
pub fn overall_stats<'a, I>(all_progress: I) -> OverallStats
where
    I: IntoIterator<Item = &'a SubjectProgress>,
{
    let mut total_questions = 0u64;
    let mut total_correct = 0u64;
    let mut score_sum = 0f64;
    let mut score_count = 0u64;
    let mut active_subjects = 0usize;

    for progress in all_progress {
        active_subjects += 1;
        total_questions += progress.completed_questions as u64;
        total_correct += progress.correct_answers as u64;
        for &score in &progress.session_scores {
            score_sum += score as f64;
            score_count += 1;
        }
    }

    let average_score = if score_count == 0 {
        0.0
    } else {
        score_sum / score_count as f64
    };

    let accuracy = if total_questions == 0 {
        0
    } else {
        (total_correct as f64 / total_questions as f64 * 100.0).round() as u32
    };

    OverallStats {
        total_questions,
        total_correct,
        average_score,
        accuracy,
        active_subjects,
    }
}
