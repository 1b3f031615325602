//! Area normalization
//!
//! All owner areas are stored in square meters regardless of the unit they
//! arrive in. The conversion constants must stay exactly as written for
//! round-trip consistency with previously stored data.

use serde::{Deserialize, Serialize};

/// Square meters per acre
pub const SQM_PER_ACRE: f64 = 4046.86;

/// Square meters per guntha
pub const SQM_PER_GUNTHA: f64 = 101.17;

/// Owner area as it appears on the wire: either square meters directly,
/// or an acre/guntha pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaInput {
    SquareMeters { sq_m: f64 },
    AcreGuntha { acre: f64, guntha: f64 },
}

impl AreaInput {
    /// Normalize to square meters
    pub fn to_square_meters(&self) -> f64 {
        match *self {
            AreaInput::SquareMeters { sq_m } => sq_m,
            AreaInput::AcreGuntha { acre, guntha } => {
                acre * SQM_PER_ACRE + guntha * SQM_PER_GUNTHA
            }
        }
    }
}
