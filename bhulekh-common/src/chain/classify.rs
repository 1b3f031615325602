//! Survey-number classifier
//!
//! Derives a nondh's primary survey-number type from its affected
//! references, filtered against the numbers actually registered for the
//! parcel. A reference naming a number that belongs to some other parcel
//! is dropped, not an error.

use std::collections::HashSet;

use crate::models::{LandRecordInput, SNoRefInput};
use crate::vocab::SurveyNumberType;

/// Build the parcel's valid survey-number set: every comma-split, trimmed,
/// non-empty entry of the s_no field, plus block and re-survey numbers.
pub fn valid_number_set(record: &LandRecordInput) -> HashSet<String> {
    let mut set = HashSet::new();
    if let Some(s_no) = &record.s_no {
        for part in s_no.split(',') {
            let trimmed = part.trim();
            if !trimmed.is_empty() {
                set.insert(trimmed.to_string());
            }
        }
    }
    for field in [&record.block_no, &record.re_survey_no] {
        if let Some(value) = field {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                set.insert(trimmed.to_string());
            }
        }
    }
    set
}

/// Classify a nondh by its affected references.
///
/// Only references whose number is in `valid_numbers` participate. Among
/// the survivors the highest-priority type wins (s_no > block_no >
/// re_survey_no). No survivors, or no references at all, defaults to s_no.
/// A missing or unrecognized type label on a surviving reference is read
/// as s_no.
pub fn classify(refs: &[SNoRefInput], valid_numbers: &HashSet<String>) -> SurveyNumberType {
    let mut best: Option<SurveyNumberType> = None;
    for r in refs {
        if !valid_numbers.contains(r.number.trim()) {
            continue;
        }
        let s_no_type = r
            .s_no_type
            .as_deref()
            .and_then(SurveyNumberType::from_label)
            .unwrap_or(SurveyNumberType::SNo);
        best = match best {
            Some(current) if current.priority() <= s_no_type.priority() => Some(current),
            _ => Some(s_no_type),
        };
    }
    best.unwrap_or(SurveyNumberType::SNo)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(s_no: Option<&str>, block: Option<&str>, re_survey: Option<&str>) -> LandRecordInput {
        LandRecordInput {
            district: "Rajkot".to_string(),
            taluka: "Gondal".to_string(),
            village: "Vasavad".to_string(),
            block_no: block.map(String::from),
            re_survey_no: re_survey.map(String::from),
            s_no: s_no.map(String::from),
        }
    }

    fn sno_ref(number: &str, s_no_type: Option<&str>) -> SNoRefInput {
        SNoRefInput {
            number: number.to_string(),
            s_no_type: s_no_type.map(String::from),
        }
    }

    #[test]
    fn valid_set_splits_and_trims() {
        let set = valid_number_set(&record(Some(" 12 ,13,, 14"), Some("45"), Some("")));
        assert_eq!(set.len(), 4);
        assert!(set.contains("12"));
        assert!(set.contains("13"));
        assert!(set.contains("14"));
        assert!(set.contains("45"));
    }

    #[test]
    fn highest_priority_surviving_type_wins() {
        let set = valid_number_set(&record(Some("12"), Some("45"), None));
        let refs = vec![
            sno_ref("45", Some("block_no")),
            sno_ref("12", Some("s_no")),
        ];
        assert_eq!(classify(&refs, &set), SurveyNumberType::SNo);
    }

    #[test]
    fn foreign_numbers_are_dropped() {
        // Parcel knows block 45 only; reference to 99 is irrelevant here
        let set = valid_number_set(&record(None, Some("45"), None));
        let refs = vec![sno_ref("99", Some("block_no"))];
        assert_eq!(classify(&refs, &set), SurveyNumberType::SNo);

        let refs = vec![sno_ref("99", Some("block_no")), sno_ref("45", Some("block_no"))];
        assert_eq!(classify(&refs, &set), SurveyNumberType::BlockNo);
    }

    #[test]
    fn no_refs_defaults_to_s_no() {
        let set = valid_number_set(&record(None, Some("45"), None));
        assert_eq!(classify(&[], &set), SurveyNumberType::SNo);
    }

    #[test]
    fn missing_type_label_reads_as_s_no() {
        let set = valid_number_set(&record(None, None, Some("101/2")));
        let refs = vec![sno_ref("101/2", None)];
        assert_eq!(classify(&refs, &set), SurveyNumberType::SNo);
    }

    #[test]
    fn classification_is_order_independent() {
        let set = valid_number_set(&record(Some("12"), Some("45"), Some("7")));
        let mut refs = vec![
            sno_ref("7", Some("re_survey_no")),
            sno_ref("45", Some("block_no")),
            sno_ref("12", Some("s_no")),
        ];
        let forward = classify(&refs, &set);
        refs.reverse();
        assert_eq!(classify(&refs, &set), forward);
    }
}
