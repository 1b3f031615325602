//! Structural validation of raw nondh details
//!
//! Every check runs; all failures are collected rather than
//! short-circuited, so one skipped detail reports everything wrong with it
//! at once. A detail failing any check is excluded from the chain, never
//! fatal to the batch.

use chrono::NaiveDate;

use crate::models::NondhDetailInput;
use crate::vocab::{GanotRight, HukamType, NondhType, TenureType};

/// Validate one raw detail. Empty result means structurally acceptable.
pub fn validate_detail(detail: &NondhDetailInput) -> Vec<String> {
    let mut errors = Vec::new();

    if detail.nondh_no.trim().is_empty() {
        errors.push("Missing nondh number".to_string());
    }

    match detail.detail_type.as_deref().map(str::trim) {
        None | Some("") => errors.push("Missing nondh type".to_string()),
        Some(label) => {
            if NondhType::from_label(label).is_none() {
                errors.push(format!("Invalid nondh type: {}", label));
            }
        }
    }

    // Format check only: exactly 8 characters, ddmmyyyy. Whether the digits
    // form a real calendar date is not this layer's concern.
    match detail.date.as_deref().map(str::trim) {
        None | Some("") => errors.push("Missing date".to_string()),
        Some(date) => {
            if date.len() != 8 {
                errors.push("Date must be exactly 8 digits (ddmmyyyy)".to_string());
            }
        }
    }

    if detail.vigat.as_deref().map(str::trim).unwrap_or("").is_empty() {
        errors.push("Missing vigat".to_string());
    }

    // Absent tenure is fine; it defaults downstream
    if let Some(tenure) = detail.tenure.as_deref().map(str::trim) {
        if !tenure.is_empty() && TenureType::from_label(tenure).is_none() {
            errors.push(format!("Invalid tenure type: {}", tenure));
        }
    }

    // Hukam authority checks apply only to order-type details
    if detail.detail_type.as_deref().map(str::trim) == Some(NondhType::Hukam.as_str()) {
        let hukam_type = detail
            .hukam_type
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty());
        if let Some(label) = hukam_type {
            match HukamType::from_label(label) {
                None => errors.push(format!("Invalid hukam type: {}", label)),
                Some(HukamType::AltKrushipanch) => {
                    if let Some(ganot) = detail.ganot.as_deref().map(str::trim) {
                        if !ganot.is_empty() && GanotRight::from_label(ganot).is_none() {
                            errors.push(format!(
                                "Invalid ganot: {} (expected 1st Right or 2nd Right)",
                                ganot
                            ));
                        }
                    }
                }
                Some(_) => {}
            }
        }
    }

    errors
}

/// Parse a ddmmyyyy string into a calendar date.
///
/// Returns None for anything that is not 8 digits forming a real date.
/// Callers store the raw string regardless; this is storage enrichment,
/// not validation.
pub fn parse_ddmmyyyy(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if date.len() != 8 || !date.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let day: u32 = date[0..2].parse().ok()?;
    let month: u32 = date[2..4].parse().ok()?;
    let year: i32 = date[4..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
