//! Batch pipeline
//!
//! Drives one upload batch through the full chain: referential and
//! structural filtering of details, classification, total ordering, then
//! the parity engine. Synchronous single pass, in memory, no persistence;
//! callers persist the result through their own collaborators.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use super::classify::{classify, valid_number_set};
use super::engine::compute_validity;
use super::sort::sort_for_chain;
use super::validate::{parse_ddmmyyyy, validate_detail};
use crate::models::{LandRecordInput, NondhDetailInput, NondhInput};
use crate::vocab::{
    DeclaredStatus, GanotRight, HukamType, NondhType, SurveyNumberType, TenureType,
};

/// A nondh reduced to what the sorter and engine need.
#[derive(Debug, Clone)]
pub struct ChainNondh {
    pub number: String,
    pub s_no_type: SurveyNumberType,
    /// Position in the original input, the final sort tiebreak
    pub input_index: usize,
}

/// One beneficiary row, area normalized to square meters.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerRow {
    pub name: String,
    pub area_sq_m: f64,
    /// Always mirrors the parent detail's computed validity
    pub is_valid: bool,
}

/// A structurally accepted detail with its fields resolved to vocabulary
/// types and its owners flattened.
#[derive(Debug, Clone, Serialize)]
pub struct AcceptedDetail {
    pub detail_type: NondhType,
    /// Raw ddmmyyyy string as uploaded
    pub date: String,
    /// Calendar date when the raw string forms one, None otherwise
    pub parsed_date: Option<NaiveDate>,
    pub vigat: String,
    pub status: DeclaredStatus,
    pub invalid_reason: Option<String>,
    pub tenure: TenureType,
    pub hukam_type: Option<HukamType>,
    pub ganot: Option<GanotRight>,
    pub trans_date: Option<String>,
    pub amount: Option<f64>,
    pub old_owner: Option<String>,
    pub owners: Vec<OwnerRow>,
}

/// One nondh in chain order with its computed effective validity.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedNondh {
    pub number: String,
    pub s_no_type: SurveyNumberType,
    pub valid: bool,
    pub detail: Option<AcceptedDetail>,
}

/// Result of processing one upload batch.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedBatch {
    /// All nondhs in chain order, validity computed
    pub nondhs: Vec<ProcessedNondh>,
    /// Skipped-detail diagnostics, "Nondh <n>: <reason>, <reason>"
    pub skipped: Vec<String>,
}

/// Classify and sort a nondh set for its record. Shared by the batch
/// pipeline and by recomputation over stored rows.
pub fn sorted_chain(record: &LandRecordInput, nondhs: &[NondhInput]) -> Vec<ChainNondh> {
    let valid_numbers = valid_number_set(record);
    let mut chain: Vec<ChainNondh> = nondhs
        .iter()
        .enumerate()
        .map(|(input_index, nondh)| ChainNondh {
            number: nondh.number.trim().to_string(),
            s_no_type: classify(&nondh.affected_s_nos, &valid_numbers),
            input_index,
        })
        .collect();
    sort_for_chain(&mut chain);
    chain
}

/// Per-nondh validity as reported to callers, in chain order.
#[derive(Debug, Clone, Serialize)]
pub struct NondhValidity {
    pub number: String,
    pub s_no_type: SurveyNumberType,
    pub valid: bool,
}

/// Derive the validity list for a record from its nondh set and declared
/// statuses. Used for recomputation over stored data; `process_batch` goes
/// through the same sorter and engine.
pub fn record_validity(
    record: &LandRecordInput,
    nondhs: &[NondhInput],
    statuses: &HashMap<String, DeclaredStatus>,
) -> Vec<NondhValidity> {
    let chain = sorted_chain(record, nondhs);
    let validity = compute_validity(&chain, statuses);
    chain
        .into_iter()
        .map(|nondh| NondhValidity {
            valid: validity.get(&nondh.number).copied().unwrap_or(true),
            number: nondh.number,
            s_no_type: nondh.s_no_type,
        })
        .collect()
}

/// Process one upload batch end to end.
pub fn process_batch(
    record: &LandRecordInput,
    nondhs: &[NondhInput],
    details: &[NondhDetailInput],
) -> ProcessedBatch {
    let nondh_numbers: HashSet<String> = nondhs
        .iter()
        .map(|n| n.number.trim().to_string())
        .collect();

    let mut accepted: HashMap<String, AcceptedDetail> = HashMap::new();
    let mut skipped = Vec::new();

    for detail in details {
        let number = detail.nondh_no.trim();
        let label = if number.is_empty() { "?" } else { number };

        let errors = validate_detail(detail);
        if !errors.is_empty() {
            skipped.push(format!("Nondh {}: {}", label, errors.join(", ")));
            continue;
        }
        if !nondh_numbers.contains(number) {
            skipped.push(format!("Nondh {}: no matching nondh entry", label));
            continue;
        }
        // Last accepted detail for a number is authoritative
        accepted.insert(number.to_string(), resolve_detail(detail));
    }

    let chain = sorted_chain(record, nondhs);

    let statuses: HashMap<String, DeclaredStatus> = accepted
        .iter()
        .map(|(number, detail)| (number.clone(), detail.status))
        .collect();
    let validity = compute_validity(&chain, &statuses);

    let processed = chain
        .into_iter()
        .map(|nondh| {
            let valid = validity.get(&nondh.number).copied().unwrap_or(true);
            let detail = accepted.remove(&nondh.number).map(|mut detail| {
                for owner in &mut detail.owners {
                    owner.is_valid = valid;
                }
                detail
            });
            ProcessedNondh {
                number: nondh.number,
                s_no_type: nondh.s_no_type,
                valid,
                detail,
            }
        })
        .collect();

    ProcessedBatch {
        nondhs: processed,
        skipped,
    }
}

/// Convert a structurally accepted raw detail into its resolved form.
/// Owner validity is a placeholder until the engine has run.
fn resolve_detail(detail: &NondhDetailInput) -> AcceptedDetail {
    // Fallback arms are unreachable for details that passed validation
    let detail_type = detail
        .detail_type
        .as_deref()
        .and_then(|label| NondhType::from_label(label))
        .unwrap_or(NondhType::Other);
    let date = detail.date.as_deref().unwrap_or("").trim().to_string();

    let tenure = detail
        .tenure
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .and_then(TenureType::from_label)
        .unwrap_or_default();

    // Hukam fields carry meaning only on order-type details
    let (hukam_type, ganot) = if detail_type == NondhType::Hukam {
        (
            detail
                .hukam_type
                .as_deref()
                .and_then(HukamType::from_label),
            detail.ganot.as_deref().and_then(GanotRight::from_label),
        )
    } else {
        (None, None)
    };

    let owners = detail
        .owners
        .iter()
        .chain(detail.new_owners.iter())
        .map(|owner| OwnerRow {
            name: owner.name.trim().to_string(),
            area_sq_m: owner.area.to_square_meters(),
            is_valid: true,
        })
        .collect();

    AcceptedDetail {
        detail_type,
        parsed_date: parse_ddmmyyyy(&date),
        date,
        vigat: detail.vigat.as_deref().unwrap_or("").trim().to_string(),
        status: DeclaredStatus::from_source(detail.status.as_deref().unwrap_or("")),
        invalid_reason: detail.invalid_reason.clone(),
        tenure,
        hukam_type,
        ganot,
        trans_date: detail.trans_date.clone(),
        amount: detail.amount,
        old_owner: detail.old_owner.clone(),
        owners,
    }
}
