//! Record listing and validity review
//!
//! The validity endpoint re-runs the chain computation over the stored
//! nondh set instead of reading the cached flags, so a reviewer sees
//! exactly what the algorithm derives from the record today.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use bhulekh_common::chain::{record_validity, NondhValidity};
use bhulekh_common::db::models::LandRecordRow;
use bhulekh_common::db::queries;

use crate::AppState;

/// Record list response
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub total: usize,
    pub records: Vec<LandRecordRow>,
}

/// GET /api/records
pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<RecordsResponse>, RecordsError> {
    let records = queries::list_records(&state.db)
        .await
        .map_err(|e| RecordsError::Database(e.to_string()))?;

    Ok(Json(RecordsResponse {
        total: records.len(),
        records,
    }))
}

/// Validity review response
#[derive(Debug, Serialize)]
pub struct ValidityResponse {
    pub land_record_id: String,
    /// Every nondh in chain order with freshly derived validity
    pub nondhs: Vec<NondhValidity>,
}

/// GET /api/records/:id/validity
pub async fn get_record_validity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ValidityResponse>, RecordsError> {
    let record_row = queries::get_record(&state.db, &id)
        .await
        .map_err(|e| RecordsError::Database(e.to_string()))?
        .ok_or_else(|| RecordsError::NotFound(id.clone()))?;

    let record = queries::record_input_from_row(&record_row);
    let nondh_rows = queries::load_nondhs(&state.db, &id)
        .await
        .map_err(|e| RecordsError::Database(e.to_string()))?;
    let nondhs = queries::nondh_inputs_from_rows(&nondh_rows);
    let statuses = queries::load_statuses(&state.db, &id)
        .await
        .map_err(|e| RecordsError::Database(e.to_string()))?;

    Ok(Json(ValidityResponse {
        land_record_id: record_row.id,
        nondhs: record_validity(&record, &nondhs, &statuses),
    }))
}

/// Records API errors
#[derive(Debug)]
pub enum RecordsError {
    NotFound(String),
    Database(String),
}

impl IntoResponse for RecordsError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RecordsError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Land record not found: {}", id))
            }
            RecordsError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
