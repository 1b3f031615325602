//! Nondh total order
//!
//! Sort key: (survey-number type priority, numeric nondh number, original
//! input position). Later position means "comes after" for the validity
//! chain. The input-position tiebreak makes order-equivalent nondhs (same
//! type, same numeric value) deterministic across runtimes instead of
//! leaking whatever stability the underlying sort happens to have.

use super::pipeline::ChainNondh;

/// Numeric value of a nondh number for the sort tiebreak.
///
/// Leading digits are taken, anything after is ignored ("12a" reads as 12);
/// a number with no leading digits reads as 0.
pub fn numeric_value(number: &str) -> i64 {
    let digits: String = number
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Sort nondhs into chain order in place.
pub fn sort_for_chain(nondhs: &mut [ChainNondh]) {
    nondhs.sort_by_key(|n| {
        (
            n.s_no_type.priority(),
            numeric_value(&n.number),
            n.input_index,
        )
    });
}
