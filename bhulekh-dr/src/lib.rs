//! bhulekh-dr library - Record Review module
//!
//! Read-only inspection of stored land records. Validity is re-derived on
//! demand from the stored nondh set, never from the cached flags, so the
//! review surface always reflects the chain computation itself.

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub mod api;
pub mod db;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only)
    pub db: SqlitePool,
    /// Service start time, for health reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/api/records", get(api::list_records))
        .route("/api/records/:id/validity", get(api::get_record_validity))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
