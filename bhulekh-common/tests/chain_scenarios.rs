//! End-to-end chain scenarios through the batch pipeline
//!
//! These walk realistic upload batches through validation, classification,
//! sorting, and the parity engine in one pass each.

use bhulekh_common::area::AreaInput;
use bhulekh_common::chain::process_batch;
use bhulekh_common::models::{
    LandRecordInput, NondhDetailInput, NondhInput, OwnerInput, SNoRefInput,
};
use bhulekh_common::vocab::SurveyNumberType;

fn record() -> LandRecordInput {
    LandRecordInput {
        district: "Rajkot".to_string(),
        taluka: "Gondal".to_string(),
        village: "Vasavad".to_string(),
        block_no: Some("45".to_string()),
        re_survey_no: None,
        s_no: Some("12, 13".to_string()),
    }
}

fn nondh(number: &str, refs: &[(&str, &str)]) -> NondhInput {
    NondhInput {
        number: number.to_string(),
        affected_s_nos: refs
            .iter()
            .map(|(n, t)| SNoRefInput {
                number: n.to_string(),
                s_no_type: Some(t.to_string()),
            })
            .collect(),
    }
}

fn detail(nondh_no: &str, detail_type: &str, status: &str) -> NondhDetailInput {
    NondhDetailInput {
        nondh_no: nondh_no.to_string(),
        detail_type: Some(detail_type.to_string()),
        date: Some("15012020".to_string()),
        vigat: Some("entry".to_string()),
        status: Some(status.to_string()),
        invalid_reason: None,
        tenure: None,
        hukam_type: None,
        ganot: None,
        trans_date: None,
        amount: None,
        old_owner: None,
        owners: vec![],
        new_owners: vec![],
    }
}

#[test]
fn block_nondhs_sort_after_survey_nondhs() {
    // Survey-number nondhs outrank block nondhs regardless of number
    let nondhs = vec![
        nondh("1", &[("45", "block_no")]),
        nondh("2", &[("12", "s_no")]),
    ];
    let details = vec![
        detail("1", "Varsai", "Pramaanik"),
        detail("2", "Vechand", "Pramaanik"),
    ];
    let batch = process_batch(&record(), &nondhs, &details);

    assert_eq!(batch.nondhs[0].number, "2");
    assert_eq!(batch.nondhs[0].s_no_type, SurveyNumberType::SNo);
    assert_eq!(batch.nondhs[1].number, "1");
    assert_eq!(batch.nondhs[1].s_no_type, SurveyNumberType::BlockNo);
}

#[test]
fn later_radd_invalidates_earlier_block_nondh() {
    let nondhs = vec![
        nondh("1", &[("45", "block_no")]),
        nondh("2", &[("45", "block_no")]),
    ];
    let details = vec![
        detail("1", "Varsai", "Pramaanik"),
        detail("2", "Hukam", "Radd"),
    ];
    let batch = process_batch(&record(), &nondhs, &details);

    assert!(!batch.nondhs[0].valid, "one later Radd flips nondh 1");
    assert!(batch.nondhs[1].valid, "nothing after nondh 2");
}

#[test]
fn a_second_radd_restores_the_first_nondh() {
    let nondhs = vec![
        nondh("1", &[("45", "block_no")]),
        nondh("2", &[("45", "block_no")]),
        nondh("3", &[("45", "block_no")]),
    ];
    let details = vec![
        detail("1", "Varsai", "Pramaanik"),
        detail("2", "Hukam", "Radd"),
        detail("3", "Durasti", "Radd"),
    ];
    let batch = process_batch(&record(), &nondhs, &details);

    let validity: Vec<bool> = batch.nondhs.iter().map(|n| n.valid).collect();
    assert_eq!(validity, vec![true, false, true]);
}

#[test]
fn foreign_block_reference_falls_back_to_survey_type() {
    // Block 99 belongs to some other parcel; with nothing surviving the
    // filter the nondh classifies to the default survey-number type.
    let nondhs = vec![nondh("1", &[("99", "block_no")])];
    let batch = process_batch(&record(), &nondhs, &[detail("1", "Varsai", "Pramaanik")]);
    assert_eq!(batch.nondhs[0].s_no_type, SurveyNumberType::SNo);
}

#[test]
fn alt_krushipanch_ganot_gate() {
    let nondhs = vec![nondh("1", &[("45", "block_no")])];

    let mut rejected = detail("1", "Hukam", "Pramaanik");
    rejected.hukam_type = Some("ALT Krushipanch".to_string());
    rejected.ganot = Some("3rd Right".to_string());
    let batch = process_batch(&record(), &nondhs, &[rejected]);
    assert_eq!(batch.skipped.len(), 1);
    assert!(batch.skipped[0].contains("ganot"));
    assert!(batch.nondhs[0].detail.is_none());

    let mut accepted = detail("1", "Hukam", "Pramaanik");
    accepted.hukam_type = Some("ALT Krushipanch".to_string());
    accepted.ganot = Some("1st Right".to_string());
    let batch = process_batch(&record(), &nondhs, &[accepted]);
    assert!(batch.skipped.is_empty());
    assert!(batch.nondhs[0].detail.is_some());
}

#[test]
fn mixed_batch_keeps_good_details_and_reports_bad_ones() {
    let nondhs = vec![
        nondh("1", &[("45", "block_no")]),
        nondh("2", &[("45", "block_no")]),
    ];
    let mut broken = detail("2", "Varsai", "Radd");
    broken.date = Some("15/1/20".to_string());
    let orphan = detail("7", "Varsai", "Radd");
    let details = vec![detail("1", "Varsai", "Pramaanik"), broken, orphan];

    let batch = process_batch(&record(), &nondhs, &details);
    assert_eq!(batch.skipped.len(), 2);
    assert!(batch.skipped[0].contains("Nondh 2"));
    assert!(batch.skipped[1].contains("Nondh 7"));
    // Neither skipped Radd reached the chain, so nondh 1 stays valid
    assert!(batch.nondhs.iter().all(|n| n.valid));
}

#[test]
fn owner_areas_normalize_and_mirror_validity() {
    let nondhs = vec![
        nondh("1", &[("45", "block_no")]),
        nondh("2", &[("45", "block_no")]),
    ];
    let mut first = detail("1", "Varsai", "Pramaanik");
    first.owners = vec![
        OwnerInput {
            name: "Jadeja Kiritsinh".to_string(),
            area: AreaInput::AcreGuntha { acre: 2.0, guntha: 10.0 },
        },
        OwnerInput {
            name: "Jadeja Mahipatsinh".to_string(),
            area: AreaInput::SquareMeters { sq_m: 1200.0 },
        },
    ];
    let details = vec![first, detail("2", "Hukam", "Radd")];

    let batch = process_batch(&record(), &nondhs, &details);
    let owners = &batch.nondhs[0].detail.as_ref().unwrap().owners;
    assert!((owners[0].area_sq_m - (2.0 * 4046.86 + 10.0 * 101.17)).abs() < 1e-9);
    assert_eq!(owners[1].area_sq_m, 1200.0);
    assert!(owners.iter().all(|o| !o.is_valid));
}

#[test]
fn processing_is_deterministic() {
    let nondhs = vec![
        nondh("3", &[("45", "block_no")]),
        nondh("1", &[("12", "s_no")]),
        nondh("2", &[("45", "block_no")]),
    ];
    let details = vec![
        detail("1", "Varsai", "Pramaanik"),
        detail("2", "Hukam", "Radd"),
        detail("3", "Durasti", "Na Manjoor"),
    ];
    let first = process_batch(&record(), &nondhs, &details);
    let second = process_batch(&record(), &nondhs, &details);

    let order_a: Vec<_> = first.nondhs.iter().map(|n| (&n.number, n.valid)).collect();
    let order_b: Vec<_> = second.nondhs.iter().map(|n| (&n.number, n.valid)).collect();
    assert_eq!(order_a, order_b);
    assert_eq!(first.skipped, second.skipped);
}
