//! Persistence layer for bhulekh-up
//!
//! Writes a processed batch out and keeps stored validity flags in sync by
//! recomputing the chain over the whole record after every upload. Owner
//! row failures are logged and counted, never allowed to unwind the
//! already-computed result.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::warn;
use uuid::Uuid;

use bhulekh_common::chain::{record_validity, AcceptedDetail, NondhValidity, ProcessedBatch};
use bhulekh_common::db::queries;
use bhulekh_common::models::{LandRecordInput, NondhInput};
use bhulekh_common::{Error, Result};

/// Whether an upload created a fresh record or appended to an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistMode {
    Created,
    Appended,
}

impl PersistMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistMode::Created => "created",
            PersistMode::Appended => "appended",
        }
    }
}

/// Result of persisting one upload batch
#[derive(Debug)]
pub struct PersistOutcome {
    pub land_record_id: String,
    pub mode: PersistMode,
    pub owners_inserted: usize,
    pub owner_insert_failures: usize,
    /// Validity of every nondh of the record, in chain order, after this upload
    pub nondhs: Vec<NondhValidity>,
}

/// Persist a processed batch, creating or appending to the matching record.
pub async fn persist_batch(
    pool: &SqlitePool,
    record: &LandRecordInput,
    nondhs: &[NondhInput],
    processed: &ProcessedBatch,
) -> Result<PersistOutcome> {
    let existing = queries::find_record_by_identity(pool, record).await?;
    let (record_id, mode, base_position) = match existing {
        Some(row) => {
            let max_position: Option<i64> =
                sqlx::query_scalar("SELECT MAX(position) FROM nondhs WHERE land_record_id = ?")
                    .bind(&row.id)
                    .fetch_one(pool)
                    .await?;
            (row.id, PersistMode::Appended, max_position.map_or(0, |m| m + 1))
        }
        None => {
            let id = Uuid::new_v4().to_string();
            sqlx::query(
                "INSERT INTO land_records (id, district, taluka, village, block_no, re_survey_no, s_no)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(record.district.trim())
            .bind(record.taluka.trim())
            .bind(record.village.trim())
            .bind(record.block_no.as_deref().map(str::trim))
            .bind(record.re_survey_no.as_deref().map(str::trim))
            .bind(record.s_no.as_deref().map(str::trim))
            .execute(pool)
            .await?;
            (id, PersistMode::Created, 0)
        }
    };

    // Nondh entries, preserving input order via position. A nondh number is
    // unique within a record: an incoming number already stored (or repeated
    // within the batch) reuses the existing row, so a client retry of the
    // same upload never doubles a declared status in the chain.
    let mut nondh_ids: HashMap<String, String> = HashMap::new();
    if mode == PersistMode::Appended {
        for row in queries::load_nondhs(pool, &record_id).await? {
            nondh_ids.insert(row.number.trim().to_string(), row.id);
        }
    }
    let mut next_position = base_position;
    for nondh in nondhs {
        let number = nondh.number.trim().to_string();
        if nondh_ids.contains_key(&number) {
            continue;
        }
        let id = Uuid::new_v4().to_string();
        let refs_json = serde_json::to_string(&nondh.affected_s_nos)
            .map_err(|e| Error::Internal(format!("Failed to encode affected refs: {}", e)))?;
        sqlx::query(
            "INSERT INTO nondhs (id, land_record_id, number, affected_s_nos, position)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&record_id)
        .bind(&number)
        .bind(&refs_json)
        .bind(next_position)
        .execute(pool)
        .await?;
        next_position += 1;
        nondh_ids.insert(number, id);
    }

    // Accepted details and their owner relations
    let mut owners_inserted = 0;
    let mut owner_insert_failures = 0;
    for processed_nondh in &processed.nondhs {
        let Some(detail) = &processed_nondh.detail else {
            continue;
        };
        let Some(nondh_id) = nondh_ids.get(&processed_nondh.number) else {
            continue;
        };
        let detail_id = insert_detail(pool, nondh_id, detail, processed_nondh.valid).await?;
        for owner in &detail.owners {
            let insert = sqlx::query(
                "INSERT INTO owner_relations (id, detail_id, name, area_sq_m, is_valid)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&detail_id)
            .bind(&owner.name)
            .bind(owner.area_sq_m)
            .bind(owner.is_valid)
            .execute(pool)
            .await;
            match insert {
                Ok(_) => owners_inserted += 1,
                Err(e) => {
                    warn!(
                        "Failed to insert owner relation for nondh {}: {}",
                        processed_nondh.number, e
                    );
                    owner_insert_failures += 1;
                }
            }
        }
    }

    // Recompute over the whole stored record; an appended batch can change
    // the validity of nondhs stored by earlier uploads
    let validity = recompute_record(pool, &record_id).await?;

    Ok(PersistOutcome {
        land_record_id: record_id,
        mode,
        owners_inserted,
        owner_insert_failures,
        nondhs: validity,
    })
}

async fn insert_detail(
    pool: &SqlitePool,
    nondh_id: &str,
    detail: &AcceptedDetail,
    valid: bool,
) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO nondh_details
         (id, nondh_id, detail_type, date, parsed_date, vigat, status, invalid_reason,
          tenure, hukam_type, ganot, trans_date, amount, old_owner, valid)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(nondh_id)
    .bind(detail.detail_type.as_str())
    .bind(&detail.date)
    .bind(detail.parsed_date.map(|d| d.to_string()))
    .bind(&detail.vigat)
    .bind(detail.status.as_source())
    .bind(&detail.invalid_reason)
    .bind(detail.tenure.as_str())
    .bind(detail.hukam_type.map(|h| h.as_str()))
    .bind(detail.ganot.map(|g| g.as_str()))
    .bind(&detail.trans_date)
    .bind(detail.amount)
    .bind(&detail.old_owner)
    .bind(valid)
    .execute(pool)
    .await?;
    Ok(id)
}

/// Recompute validity for a stored record and write the flags back to its
/// details and owner relations. Returns the fresh validity list.
pub async fn recompute_record(pool: &SqlitePool, record_id: &str) -> Result<Vec<NondhValidity>> {
    let record_row = queries::get_record(pool, record_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Land record {}", record_id)))?;
    let record = queries::record_input_from_row(&record_row);
    let nondh_rows = queries::load_nondhs(pool, record_id).await?;
    let nondh_inputs = queries::nondh_inputs_from_rows(&nondh_rows);
    let statuses = queries::load_statuses(pool, record_id).await?;

    let validity = record_validity(&record, &nondh_inputs, &statuses);

    let by_number: HashMap<&str, bool> = validity
        .iter()
        .map(|v| (v.number.as_str(), v.valid))
        .collect();
    for row in &nondh_rows {
        let Some(valid) = by_number.get(row.number.trim()).copied() else {
            continue;
        };
        sqlx::query("UPDATE nondh_details SET valid = ? WHERE nondh_id = ?")
            .bind(valid)
            .bind(&row.id)
            .execute(pool)
            .await?;
        sqlx::query(
            "UPDATE owner_relations SET is_valid = ?
             WHERE detail_id IN (SELECT id FROM nondh_details WHERE nondh_id = ?)",
        )
        .bind(valid)
        .bind(&row.id)
        .execute(pool)
        .await?;
    }

    Ok(validity)
}
