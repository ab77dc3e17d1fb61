/// Most recent study sessions kept in history; oldest evicted first.
pub const SESSION_HISTORY_LIMIT: usize = 50;

pub fn subject_progress_key() -> &'static str {
    "subject-progress"
}

pub fn flashcard_sets_key() -> &'static str {
    "flashcard-sets"
}

pub fn study_sessions_key() -> &'static str {
    "study-sessions"
}
