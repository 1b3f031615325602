//! Database row models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LandRecordRow {
    pub id: String,
    pub district: String,
    pub taluka: String,
    pub village: String,
    pub block_no: Option<String>,
    pub re_survey_no: Option<String>,
    pub s_no: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NondhRow {
    pub id: String,
    pub land_record_id: String,
    pub number: String,
    /// JSON array of affected survey-number references
    pub affected_s_nos: String,
    /// Input position at upload time; sorter tiebreak across recomputation
    pub position: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NondhDetailRow {
    pub id: String,
    pub nondh_id: String,
    pub detail_type: String,
    pub date: String,
    pub parsed_date: Option<String>,
    pub vigat: String,
    pub status: String,
    pub invalid_reason: Option<String>,
    pub tenure: String,
    pub hukam_type: Option<String>,
    pub ganot: Option<String>,
    pub trans_date: Option<String>,
    pub amount: Option<f64>,
    pub old_owner: Option<String>,
    /// Computed effective validity (0/1)
    pub valid: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OwnerRelationRow {
    pub id: String,
    pub detail_id: String,
    pub name: String,
    pub area_sq_m: f64,
    /// Mirrors the parent detail's computed validity (0/1)
    pub is_valid: i64,
}
