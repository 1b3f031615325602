//! Upload batch models
//!
//! Raw input shapes as they arrive from an upload document. These are
//! deliberately loose (everything optional except the location triad);
//! the structural validator decides what is acceptable, per record.

use crate::area::AreaInput;
use serde::{Deserialize, Serialize};

/// The land record (parcel) an upload batch is scoped to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandRecordInput {
    pub district: String,
    pub taluka: String,
    pub village: String,
    /// Block number, required unless a re-survey number is given
    #[serde(default)]
    pub block_no: Option<String>,
    /// Re-survey number, required unless a block number is given
    #[serde(default)]
    pub re_survey_no: Option<String>,
    /// Comma-separated primary survey numbers
    #[serde(default)]
    pub s_no: Option<String>,
}

impl LandRecordInput {
    /// Record-level checks that gate the whole batch (unlike per-detail
    /// validation, these are fatal).
    pub fn identity_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.district.trim().is_empty() {
            errors.push("Missing district".to_string());
        }
        if self.taluka.trim().is_empty() {
            errors.push("Missing taluka".to_string());
        }
        if self.village.trim().is_empty() {
            errors.push("Missing village".to_string());
        }
        let has_block = self.block_no.as_deref().is_some_and(|v| !v.trim().is_empty());
        let has_re_survey = self.re_survey_no.as_deref().is_some_and(|v| !v.trim().is_empty());
        if !has_block && !has_re_survey {
            errors.push("Either block number or re-survey number is required".to_string());
        }
        errors
    }
}

/// One affected survey-number reference on a nondh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SNoRefInput {
    pub number: String,
    /// "s_no" | "block_no" | "re_survey_no"; absent means s_no
    #[serde(default)]
    pub s_no_type: Option<String>,
}

/// A nondh entry: number plus the survey numbers it affects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NondhInput {
    pub number: String,
    #[serde(default)]
    pub affected_s_nos: Vec<SNoRefInput>,
}

/// A beneficiary named in a nondh detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerInput {
    pub name: String,
    pub area: AreaInput,
}

/// Raw nondh detail as uploaded, before structural validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NondhDetailInput {
    /// Number of the nondh this detail belongs to
    #[serde(default)]
    pub nondh_no: String,
    /// One of the twelve nondh type labels
    #[serde(default)]
    pub detail_type: Option<String>,
    /// ddmmyyyy, exactly 8 characters
    #[serde(default)]
    pub date: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub vigat: Option<String>,
    /// "Pramaanik" | "Radd" | "Na Manjoor"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub invalid_reason: Option<String>,
    /// Tenure label; absent defaults to Navi downstream
    #[serde(default)]
    pub tenure: Option<String>,
    /// Issuing authority, Hukam-type details only
    #[serde(default)]
    pub hukam_type: Option<String>,
    /// Ganot right, ALT Krushipanch orders only
    #[serde(default)]
    pub ganot: Option<String>,
    /// Transaction date, sale-type details
    #[serde(default)]
    pub trans_date: Option<String>,
    /// Transaction amount, sale-type details
    #[serde(default)]
    pub amount: Option<f64>,
    /// Previous owner reference, transfer-type details
    #[serde(default)]
    pub old_owner: Option<String>,
    #[serde(default)]
    pub owners: Vec<OwnerInput>,
    #[serde(default)]
    pub new_owners: Vec<OwnerInput>,
}

/// A complete upload batch: one land record plus its nondhs and details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadBatch {
    pub record: LandRecordInput,
    #[serde(default)]
    pub nondhs: Vec<NondhInput>,
    #[serde(default)]
    pub nondh_details: Vec<NondhDetailInput>,
}
