//! Shared queries used by both services
//!
//! Loading a stored record back into chain inputs lives here so the upload
//! processor (append-mode recomputation) and the record review service
//! derive validity from identical data.

use std::collections::HashMap;

use sqlx::SqlitePool;

use super::models::{LandRecordRow, NondhRow};
use crate::models::{LandRecordInput, NondhInput, SNoRefInput};
use crate::vocab::DeclaredStatus;
use crate::Result;

/// Find a stored record matching the duplicate-detection identity:
/// same district/taluka/village plus a matching block or re-survey number.
pub async fn find_record_by_identity(
    pool: &SqlitePool,
    record: &LandRecordInput,
) -> Result<Option<LandRecordRow>> {
    let candidates: Vec<LandRecordRow> = sqlx::query_as(
        "SELECT * FROM land_records WHERE district = ? AND taluka = ? AND village = ?",
    )
    .bind(record.district.trim())
    .bind(record.taluka.trim())
    .bind(record.village.trim())
    .fetch_all(pool)
    .await?;

    let block = record.block_no.as_deref().map(str::trim).filter(|v| !v.is_empty());
    let re_survey = record
        .re_survey_no
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty());

    Ok(candidates.into_iter().find(|row| {
        let row_block = row.block_no.as_deref().map(str::trim).filter(|v| !v.is_empty());
        let row_re_survey = row
            .re_survey_no
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty());
        (block.is_some() && block == row_block)
            || (re_survey.is_some() && re_survey == row_re_survey)
    }))
}

pub async fn list_records(pool: &SqlitePool) -> Result<Vec<LandRecordRow>> {
    let rows = sqlx::query_as("SELECT * FROM land_records ORDER BY created_at, id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get_record(pool: &SqlitePool, id: &str) -> Result<Option<LandRecordRow>> {
    let row = sqlx::query_as("SELECT * FROM land_records WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// All nondhs of a record in their original input order
pub async fn load_nondhs(pool: &SqlitePool, record_id: &str) -> Result<Vec<NondhRow>> {
    let rows = sqlx::query_as("SELECT * FROM nondhs WHERE land_record_id = ? ORDER BY position")
        .bind(record_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Declared statuses per nondh number for a record, from stored details.
/// Rows come back in insertion order so the map collect leaves the newest
/// stored detail's status in place when a nondh has more than one.
pub async fn load_statuses(
    pool: &SqlitePool,
    record_id: &str,
) -> Result<HashMap<String, DeclaredStatus>> {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT n.number, d.status
         FROM nondh_details d
         JOIN nondhs n ON d.nondh_id = n.id
         WHERE n.land_record_id = ?
         ORDER BY d.rowid",
    )
    .bind(record_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(number, status)| (number, DeclaredStatus::from_source(&status)))
        .collect())
}

/// Rebuild chain inputs from a stored record row
pub fn record_input_from_row(row: &LandRecordRow) -> LandRecordInput {
    LandRecordInput {
        district: row.district.clone(),
        taluka: row.taluka.clone(),
        village: row.village.clone(),
        block_no: row.block_no.clone(),
        re_survey_no: row.re_survey_no.clone(),
        s_no: row.s_no.clone(),
    }
}

/// Rebuild nondh inputs from stored rows. A row whose affected-reference
/// JSON fails to parse contributes a nondh with no references (classifies
/// to the default), matching the drop-malformed behavior of the classifier.
pub fn nondh_inputs_from_rows(rows: &[NondhRow]) -> Vec<NondhInput> {
    rows.iter()
        .map(|row| NondhInput {
            number: row.number.clone(),
            affected_s_nos: serde_json::from_str::<Vec<SNoRefInput>>(&row.affected_s_nos)
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;

    async fn seeded_pool() -> (SqlitePool, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let pool = init_database(&dir.path().join("bhulekh.db"))
            .await
            .expect("Should init database");
        sqlx::query(
            "INSERT INTO land_records (id, district, taluka, village, block_no)
             VALUES ('r1', 'Rajkot', 'Gondal', 'Vasavad', '45')",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO nondhs (id, land_record_id, number, affected_s_nos, position)
             VALUES ('n1', 'r1', '1', '[]', 0)",
        )
        .execute(&pool)
        .await
        .unwrap();
        (pool, dir)
    }

    #[tokio::test]
    async fn newest_stored_detail_status_wins() {
        let (pool, _dir) = seeded_pool().await;

        // Two details for the same nondh; the later one supersedes
        for (id, status) in [("d1", "Pramaanik"), ("d2", "Radd")] {
            sqlx::query(
                "INSERT INTO nondh_details (id, nondh_id, detail_type, date, vigat, status, tenure)
                 VALUES (?, 'n1', 'Varsai', '15012020', 'entry', ?, 'Navi')",
            )
            .bind(id)
            .bind(status)
            .execute(&pool)
            .await
            .unwrap();
        }

        let statuses = load_statuses(&pool, "r1").await.unwrap();
        assert_eq!(statuses.get("1"), Some(&DeclaredStatus::Invalid));
    }
}
