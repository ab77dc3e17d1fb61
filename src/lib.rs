pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::state::AppState;
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};

pub fn create_app(config: &Config) -> axum::Router {
    let store: Arc<dyn KeyValueStore> = match config.data_dir.as_deref() {
        Some(dir) => match JsonFileStore::new(dir) {
            Ok(store) => Arc::new(store),
            Err(err) => {
                tracing::warn!(error = %err, "file store not initialized, running in-memory");
                Arc::new(MemoryStore::new())
            }
        },
        None => Arc::new(MemoryStore::new()),
    };

    let state = AppState::new(store);

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
