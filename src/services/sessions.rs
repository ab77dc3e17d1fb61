//! Study session history, capped to the most recent entries.

use studypath_algo::StudySession;

use crate::storage::{keys, load_or_default, KeyValueStore, StorageError};
use crate::storage::keys::SESSION_HISTORY_LIMIT;

fn load(store: &dyn KeyValueStore) -> Vec<StudySession> {
    load_or_default(store, keys::study_sessions_key())
}

/// Session history, most recent first.
pub fn history(store: &dyn KeyValueStore) -> Vec<StudySession> {
    let mut sessions = load(store);
    sessions.reverse();
    sessions
}

/// Append a completed session, evicting the oldest entries beyond the cap.
pub fn append(store: &dyn KeyValueStore, session: StudySession) -> Result<(), StorageError> {
    let mut sessions = load(store);
    sessions.push(session);
    if sessions.len() > SESSION_HISTORY_LIMIT {
        let excess = sessions.len() - SESSION_HISTORY_LIMIT;
        sessions.drain(..excess);
    }
    store.set(keys::study_sessions_key(), serde_json::to_value(&sessions)?)
}
