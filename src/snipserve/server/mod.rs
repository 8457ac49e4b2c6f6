//! HTTP layer: router construction and shared state.
//!
//! The router is built by [`app`] and never binds a socket itself. The binary
//! binds a listener in `main.rs`; tests drive the router in-process; an
//! embedding host could hand it single requests. Same router in all three
//! cases.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::get;
use axum::Router;
use parking_lot::RwLock;

use crate::api::SnipApi;
use crate::config::Environment;
use crate::store::memory::MemoryStore;

pub mod envelope;
pub mod handlers;

/// Everything the handlers share: the API (behind one lock, so every
/// operation is a single critical section) and process-level diagnostics.
pub struct AppState {
    pub api: RwLock<SnipApi<MemoryStore>>,
    pub started: Instant,
    pub environment: Environment,
}

impl AppState {
    pub fn new(store: MemoryStore, environment: Environment) -> Arc<Self> {
        Arc::new(Self {
            api: RwLock::new(SnipApi::new(store)),
            started: Instant::now(),
            environment,
        })
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Build the full application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/files",
            get(handlers::list_files).post(handlers::create_file),
        )
        .route(
            "/api/files/{id}",
            get(handlers::get_file)
                .put(handlers::update_file)
                .delete(handlers::delete_file),
        )
        .route("/api/stats", get(handlers::stats))
        .route("/health", get(handlers::health))
        .route("/static/app.js", get(handlers::app_js))
        .route("/static/style.css", get(handlers::style_css))
        .fallback(handlers::not_found)
        .with_state(state)
}
