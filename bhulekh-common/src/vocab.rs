//! Domain vocabulary for land-record amendments
//!
//! Every enum here is the single authoritative copy shared by all entry
//! points; call sites must never re-declare these lists.

use serde::{Deserialize, Serialize};

/// The three parallel numbering schemes a parcel may be identified by.
///
/// Priority order when a nondh touches more than one scheme:
/// survey number > block number > re-survey number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurveyNumberType {
    #[serde(rename = "s_no")]
    SNo,
    #[serde(rename = "block_no")]
    BlockNo,
    #[serde(rename = "re_survey_no")]
    ReSurveyNo,
}

impl SurveyNumberType {
    /// Sort priority (lower sorts earlier)
    pub fn priority(&self) -> u8 {
        match self {
            SurveyNumberType::SNo => 0,
            SurveyNumberType::BlockNo => 1,
            SurveyNumberType::ReSurveyNo => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyNumberType::SNo => "s_no",
            SurveyNumberType::BlockNo => "block_no",
            SurveyNumberType::ReSurveyNo => "re_survey_no",
        }
    }

    /// Parse a wire/database label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "s_no" => Some(SurveyNumberType::SNo),
            "block_no" => Some(SurveyNumberType::BlockNo),
            "re_survey_no" => Some(SurveyNumberType::ReSurveyNo),
            _ => None,
        }
    }
}

/// Declared status of a nondh detail, mapped from the source vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclaredStatus {
    #[serde(rename = "valid")]
    Valid,
    #[serde(rename = "invalid")]
    Invalid,
    #[serde(rename = "nullified")]
    Nullified,
}

impl DeclaredStatus {
    /// Fixed source-vocabulary mapping. Anything unrecognized is Valid.
    pub fn from_source(label: &str) -> Self {
        match label.trim() {
            "Radd" => DeclaredStatus::Invalid,
            "Na Manjoor" => DeclaredStatus::Nullified,
            _ => DeclaredStatus::Valid,
        }
    }

    pub fn as_source(&self) -> &'static str {
        match self {
            DeclaredStatus::Valid => "Pramaanik",
            DeclaredStatus::Invalid => "Radd",
            DeclaredStatus::Nullified => "Na Manjoor",
        }
    }
}

/// The twelve recognized nondh types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NondhType {
    Kabjedaar,
    Ekatrikaran,
    Varsai,
    #[serde(rename = "Hayati_ma_hakh_dakhal")]
    HayatiMaHakhDakhal,
    Vechand,
    Durasti,
    Promulgation,
    Hukam,
    Vehchani,
    #[serde(rename = "Bojo_Dakhal")]
    BojoDakhal,
    #[serde(rename = "Bojo_Mukti")]
    BojoMukti,
    Other,
}

impl NondhType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NondhType::Kabjedaar => "Kabjedaar",
            NondhType::Ekatrikaran => "Ekatrikaran",
            NondhType::Varsai => "Varsai",
            NondhType::HayatiMaHakhDakhal => "Hayati_ma_hakh_dakhal",
            NondhType::Vechand => "Vechand",
            NondhType::Durasti => "Durasti",
            NondhType::Promulgation => "Promulgation",
            NondhType::Hukam => "Hukam",
            NondhType::Vehchani => "Vehchani",
            NondhType::BojoDakhal => "Bojo_Dakhal",
            NondhType::BojoMukti => "Bojo_Mukti",
            NondhType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Kabjedaar" => Some(NondhType::Kabjedaar),
            "Ekatrikaran" => Some(NondhType::Ekatrikaran),
            "Varsai" => Some(NondhType::Varsai),
            "Hayati_ma_hakh_dakhal" => Some(NondhType::HayatiMaHakhDakhal),
            "Vechand" => Some(NondhType::Vechand),
            "Durasti" => Some(NondhType::Durasti),
            "Promulgation" => Some(NondhType::Promulgation),
            "Hukam" => Some(NondhType::Hukam),
            "Vehchani" => Some(NondhType::Vehchani),
            "Bojo_Dakhal" => Some(NondhType::BojoDakhal),
            "Bojo_Mukti" => Some(NondhType::BojoMukti),
            "Other" => Some(NondhType::Other),
            _ => None,
        }
    }
}

/// Land tenure of the affected parcel after the amendment.
///
/// Absent tenure on input is not an error; it defaults to `Navi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenureType {
    Navi,
    Juni,
    #[serde(rename = "Kheti_Jamin")]
    KhetiJamin,
    #[serde(rename = "Bin_Kheti")]
    BinKheti,
    #[serde(rename = "Prati_bandhit")]
    PratiBandhit,
    Sarkari,
}

impl TenureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenureType::Navi => "Navi",
            TenureType::Juni => "Juni",
            TenureType::KhetiJamin => "Kheti_Jamin",
            TenureType::BinKheti => "Bin_Kheti",
            TenureType::PratiBandhit => "Prati_bandhit",
            TenureType::Sarkari => "Sarkari",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Navi" => Some(TenureType::Navi),
            "Juni" => Some(TenureType::Juni),
            "Kheti_Jamin" => Some(TenureType::KhetiJamin),
            "Bin_Kheti" => Some(TenureType::BinKheti),
            "Prati_bandhit" => Some(TenureType::PratiBandhit),
            "Sarkari" => Some(TenureType::Sarkari),
            _ => None,
        }
    }
}

impl Default for TenureType {
    fn default() -> Self {
        TenureType::Navi
    }
}

/// Issuing authority for Hukam (order) type nondhs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HukamType {
    #[serde(rename = "SSRD")]
    Ssrd,
    Collector,
    #[serde(rename = "Collector_Ganot")]
    CollectorGanot,
    Prant,
    Mamlatdar,
    #[serde(rename = "GRT")]
    Grt,
    #[serde(rename = "Civil_Court")]
    CivilCourt,
    #[serde(rename = "ALT Krushipanch")]
    AltKrushipanch,
    Other,
}

impl HukamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HukamType::Ssrd => "SSRD",
            HukamType::Collector => "Collector",
            HukamType::CollectorGanot => "Collector_Ganot",
            HukamType::Prant => "Prant",
            HukamType::Mamlatdar => "Mamlatdar",
            HukamType::Grt => "GRT",
            HukamType::CivilCourt => "Civil_Court",
            HukamType::AltKrushipanch => "ALT Krushipanch",
            HukamType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "SSRD" => Some(HukamType::Ssrd),
            "Collector" => Some(HukamType::Collector),
            "Collector_Ganot" => Some(HukamType::CollectorGanot),
            "Prant" => Some(HukamType::Prant),
            "Mamlatdar" => Some(HukamType::Mamlatdar),
            "GRT" => Some(HukamType::Grt),
            "Civil_Court" => Some(HukamType::CivilCourt),
            "ALT Krushipanch" => Some(HukamType::AltKrushipanch),
            "Other" => Some(HukamType::Other),
            _ => None,
        }
    }
}

/// Ganot right class for ALT Krushipanch orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GanotRight {
    #[serde(rename = "1st Right")]
    First,
    #[serde(rename = "2nd Right")]
    Second,
}

impl GanotRight {
    pub fn as_str(&self) -> &'static str {
        match self {
            GanotRight::First => "1st Right",
            GanotRight::Second => "2nd Right",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "1st Right" => Some(GanotRight::First),
            "2nd Right" => Some(GanotRight::Second),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_fixed() {
        assert_eq!(DeclaredStatus::from_source("Pramaanik"), DeclaredStatus::Valid);
        assert_eq!(DeclaredStatus::from_source("Radd"), DeclaredStatus::Invalid);
        assert_eq!(DeclaredStatus::from_source("Na Manjoor"), DeclaredStatus::Nullified);
        // Unrecognized labels default to Valid
        assert_eq!(DeclaredStatus::from_source("something else"), DeclaredStatus::Valid);
        assert_eq!(DeclaredStatus::from_source(""), DeclaredStatus::Valid);
    }

    #[test]
    fn survey_number_type_priority_order() {
        assert!(SurveyNumberType::SNo.priority() < SurveyNumberType::BlockNo.priority());
        assert!(SurveyNumberType::BlockNo.priority() < SurveyNumberType::ReSurveyNo.priority());
    }

    #[test]
    fn labels_round_trip() {
        for t in [
            NondhType::Kabjedaar,
            NondhType::HayatiMaHakhDakhal,
            NondhType::BojoMukti,
            NondhType::Other,
        ] {
            assert_eq!(NondhType::from_label(t.as_str()), Some(t));
        }
        assert_eq!(NondhType::from_label("Unknown"), None);
        assert_eq!(HukamType::from_label("ALT Krushipanch"), Some(HukamType::AltKrushipanch));
        assert_eq!(GanotRight::from_label("3rd Right"), None);
        assert_eq!(TenureType::default(), TenureType::Navi);
    }
}
