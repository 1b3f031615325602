//! Validity-chain engine
//!
//! Effective validity of a nondh is the parity of declared-Invalid statuses
//! strictly after it in chain order: even (including zero) is valid, odd is
//! invalid. Each later invalidation flips everything before it; a second
//! one flips it back. That models chained legal supersession, where an
//! invalidating order can itself be invalidated later.
//!
//! Counting uses raw declared statuses only. A nondh's computed validity
//! never feeds back into the counts (one pass, no fixed point), and a
//! Nullified ("Na Manjoor") status never counts toward the tally: a
//! nullified record is voided without counter-invalidating anything
//! upstream.

use std::collections::HashMap;

use super::pipeline::ChainNondh;
use crate::vocab::DeclaredStatus;

/// Compute effective validity per nondh number over a sorted sequence.
///
/// A nondh with no entry in `statuses` contributes nothing to any count
/// but still occupies its position. Single reverse pass, O(n).
pub fn compute_validity(
    sorted: &[ChainNondh],
    statuses: &HashMap<String, DeclaredStatus>,
) -> HashMap<String, bool> {
    let mut validity = HashMap::with_capacity(sorted.len());
    let mut later_invalid_count: usize = 0;
    for nondh in sorted.iter().rev() {
        validity.insert(nondh.number.clone(), later_invalid_count % 2 == 0);
        if statuses.get(&nondh.number) == Some(&DeclaredStatus::Invalid) {
            later_invalid_count += 1;
        }
    }
    validity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::SurveyNumberType;

    fn chain(numbers: &[&str]) -> Vec<ChainNondh> {
        numbers
            .iter()
            .enumerate()
            .map(|(i, n)| ChainNondh {
                number: n.to_string(),
                s_no_type: SurveyNumberType::BlockNo,
                input_index: i,
            })
            .collect()
    }

    fn statuses(pairs: &[(&str, DeclaredStatus)]) -> HashMap<String, DeclaredStatus> {
        pairs
            .iter()
            .map(|(n, s)| (n.to_string(), *s))
            .collect()
    }

    #[test]
    fn single_later_invalid_flips_earlier() {
        // N1 valid, N2 invalid => N1 flipped, N2 stays valid
        let sorted = chain(&["N1", "N2"]);
        let statuses = statuses(&[
            ("N1", DeclaredStatus::Valid),
            ("N2", DeclaredStatus::Invalid),
        ]);
        let validity = compute_validity(&sorted, &statuses);
        assert_eq!(validity["N1"], false);
        assert_eq!(validity["N2"], true);
    }

    #[test]
    fn second_later_invalid_flips_back() {
        let sorted = chain(&["N1", "N2", "N3"]);
        let statuses = statuses(&[
            ("N1", DeclaredStatus::Valid),
            ("N2", DeclaredStatus::Invalid),
            ("N3", DeclaredStatus::Invalid),
        ]);
        let validity = compute_validity(&sorted, &statuses);
        assert_eq!(validity["N1"], true); // two later invalids, even
        assert_eq!(validity["N2"], false); // one later invalid, odd
        assert_eq!(validity["N3"], true); // nothing after it
    }

    #[test]
    fn nullified_does_not_toggle() {
        // Na Manjoor voids a record without counter-invalidating upstream
        let sorted = chain(&["N1", "N2"]);
        let statuses = statuses(&[
            ("N1", DeclaredStatus::Valid),
            ("N2", DeclaredStatus::Nullified),
        ]);
        let validity = compute_validity(&sorted, &statuses);
        assert_eq!(validity["N1"], true);
        assert_eq!(validity["N2"], true);
    }

    #[test]
    fn missing_detail_occupies_position_without_invalidating() {
        let sorted = chain(&["N1", "N2", "N3"]);
        // N2 has no detail at all
        let statuses = statuses(&[
            ("N1", DeclaredStatus::Valid),
            ("N3", DeclaredStatus::Invalid),
        ]);
        let validity = compute_validity(&sorted, &statuses);
        assert_eq!(validity["N1"], false);
        assert_eq!(validity["N2"], false);
        assert_eq!(validity["N3"], true);
    }

    #[test]
    fn empty_chain_yields_empty_map() {
        let validity = compute_validity(&[], &HashMap::new());
        assert!(validity.is_empty());
    }

    #[test]
    fn engine_is_idempotent() {
        let sorted = chain(&["A", "B", "C", "D"]);
        let statuses = statuses(&[
            ("A", DeclaredStatus::Invalid),
            ("B", DeclaredStatus::Valid),
            ("C", DeclaredStatus::Invalid),
            ("D", DeclaredStatus::Nullified),
        ]);
        let first = compute_validity(&sorted, &statuses);
        let second = compute_validity(&sorted, &statuses);
        assert_eq!(first, second);
    }

    #[test]
    fn parity_matches_brute_force_count() {
        // Cross-check the suffix scan against the O(n^2) counting definition
        // over every status assignment of a 5-element chain.
        let numbers = ["A", "B", "C", "D", "E"];
        let sorted = chain(&numbers);
        let options = [
            DeclaredStatus::Valid,
            DeclaredStatus::Invalid,
            DeclaredStatus::Nullified,
        ];
        for assignment in 0..3usize.pow(5) {
            let mut statuses = HashMap::new();
            let mut declared = Vec::new();
            let mut code = assignment;
            for number in &numbers {
                let status = options[code % 3];
                code /= 3;
                statuses.insert(number.to_string(), status);
                declared.push(status);
            }
            let validity = compute_validity(&sorted, &statuses);
            for (i, number) in numbers.iter().enumerate() {
                let later_invalid = declared[i + 1..]
                    .iter()
                    .filter(|s| **s == DeclaredStatus::Invalid)
                    .count();
                assert_eq!(
                    validity[*number],
                    later_invalid % 2 == 0,
                    "assignment {} position {}",
                    assignment,
                    i
                );
            }
        }
    }
}
