//! Upload endpoint
//!
//! One request carries one complete batch: the land record plus its nondhs
//! and details. Record-level identity problems are fatal (400); per-detail
//! problems are not, they come back in `skipped`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use bhulekh_common::chain::{process_batch, NondhValidity};
use bhulekh_common::models::UploadBatch;

use crate::db::persist_batch;
use crate::AppState;

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub land_record_id: String,
    /// "created" for a fresh record, "appended" when the batch extended an
    /// existing one
    pub mode: String,
    /// Every nondh of the record in chain order with computed validity
    pub nondhs: Vec<NondhValidity>,
    pub owners_inserted: usize,
    pub owner_insert_failures: usize,
    /// Skipped-detail diagnostics for user correction
    pub skipped: Vec<String>,
}

/// POST /api/upload
pub async fn process_upload(
    State(state): State<AppState>,
    Json(batch): Json<UploadBatch>,
) -> Result<Json<UploadResponse>, UploadError> {
    let identity_errors = batch.record.identity_errors();
    if !identity_errors.is_empty() {
        return Err(UploadError::BadRequest(identity_errors.join(", ")));
    }

    let processed = process_batch(&batch.record, &batch.nondhs, &batch.nondh_details);

    let outcome = persist_batch(&state.db, &batch.record, &batch.nondhs, &processed)
        .await
        .map_err(|e| UploadError::Database(e.to_string()))?;

    info!(
        "Processed upload for {}/{}/{}: {} nondhs, {} skipped details ({})",
        batch.record.district.trim(),
        batch.record.taluka.trim(),
        batch.record.village.trim(),
        outcome.nondhs.len(),
        processed.skipped.len(),
        outcome.mode.as_str()
    );

    Ok(Json(UploadResponse {
        land_record_id: outcome.land_record_id,
        mode: outcome.mode.as_str().to_string(),
        nondhs: outcome.nondhs,
        owners_inserted: outcome.owners_inserted,
        owner_insert_failures: outcome.owner_insert_failures,
        skipped: processed.skipped,
    }))
}

/// Upload API errors
#[derive(Debug)]
pub enum UploadError {
    BadRequest(String),
    Database(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            UploadError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            UploadError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
