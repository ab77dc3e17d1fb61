//! Flashcard confidence tracking and study queue construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Confidence, Difficulty, Flashcard, FlashcardSet, StudyMode};

const HIGH_ACCURACY: f64 = 0.8;
const MEDIUM_ACCURACY: f64 = 0.6;
/// Reviews a card must already have before a review can rate it high.
const HIGH_MIN_PRIOR_REVIEWS: u32 = 2;

/// Record one review outcome and recompute the card's confidence.
///
/// Accuracy is taken over the post-increment counters, so a card's first
/// correct review scores 1.0 but can only reach medium: high additionally
/// requires at least [`HIGH_MIN_PRIOR_REVIEWS`] reviews before this one.
pub fn review_card(mut card: Flashcard, was_correct: bool, now_ms: i64) -> Flashcard {
    let reviews_before = card.review_count;
    card.review_count += 1;
    if was_correct {
        card.correct_count += 1;
    }
    card.last_reviewed = Some(now_ms);

    let accuracy = card.correct_count as f64 / card.review_count as f64;
    card.confidence = if accuracy >= HIGH_ACCURACY && reviews_before >= HIGH_MIN_PRIOR_REVIEWS {
        Confidence::High
    } else if accuracy >= MEDIUM_ACCURACY {
        Confidence::Medium
    } else {
        Confidence::Low
    };
    card
}

/// Build a study queue for the requested mode.
///
/// `all` preserves the original order, `difficult` keeps low/medium cards in
/// their relative order, `random` draws a uniform permutation from `rng`.
pub fn filter_by_mode<R: Rng + ?Sized>(
    cards: &[Flashcard],
    mode: StudyMode,
    rng: &mut R,
) -> Vec<Flashcard> {
    match mode {
        StudyMode::All => cards.to_vec(),
        StudyMode::Difficult => cards
            .iter()
            .filter(|card| card.confidence != Confidence::High)
            .cloned()
            .collect(),
        StudyMode::Random => {
            let mut queue = cards.to_vec();
            queue.shuffle(rng);
            queue
        }
    }
}

/// Close out a study pass: recount mastered cards and stamp the set.
///
/// The count is recomputed from scratch, so repeated calls without
/// intervening reviews are idempotent.
pub fn complete_session(mut set: FlashcardSet, now_ms: i64) -> FlashcardSet {
    set.mastered_cards = set
        .flashcards
        .iter()
        .filter(|card| card.confidence == Confidence::High)
        .count() as u32;
    set.last_studied = Some(now_ms);
    set
}

/// The most common card difficulty in a set; ties go to the harder tier.
/// Empty sets report beginner.
pub fn dominant_difficulty(cards: &[Flashcard]) -> Difficulty {
    if cards.is_empty() {
        return Difficulty::Beginner;
    }

    let mut counts = [0usize; 3];
    for card in cards {
        counts[card.difficulty.index()] += 1;
    }

    let mut dominant = Difficulty::Beginner;
    let mut best = counts[0];
    for (difficulty, &count) in [Difficulty::Intermediate, Difficulty::Advanced]
        .iter()
        .zip(&counts[1..])
    {
        if count >= best {
            dominant = *difficulty;
            best = count;
        }
    }
    dominant
}
