//! Type-safe vocabularies for the career engine
//!
//! Education levels, streams and career domains are closed sets. They are
//! modelled as enums so that rule code can match exhaustively instead of
//! comparing strings all over the place.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Highest education level the student has completed or is enrolled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum EducationLevel {
    #[strum(serialize = "10th")]
    #[serde(rename = "10th")]
    Tenth,
    #[strum(serialize = "Intermediate")]
    Intermediate,
    #[strum(serialize = "ITI")]
    #[serde(rename = "ITI")]
    Iti,
    #[strum(serialize = "Diploma")]
    Diploma,
    #[strum(serialize = "Degree")]
    Degree,
    #[strum(serialize = "B.Tech")]
    #[serde(rename = "B.Tech")]
    BTech,
    #[strum(serialize = "M.Tech")]
    #[serde(rename = "M.Tech")]
    MTech,
}

/// Stream, subject, trade or branch identifiers known to the engine.
///
/// The string form is the exact identifier stored in a profile's
/// `currentStream`. Parsing is case-sensitive: `"cse"` is not `CSE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Stream {
    // M.Tech catch-all
    #[strum(serialize = "Automatic Analysis")]
    #[serde(rename = "Automatic Analysis")]
    AutoAnalysis,

    // Intermediate groups
    #[strum(serialize = "MPC")]
    #[serde(rename = "MPC")]
    Mpc,
    #[strum(serialize = "BiPC")]
    #[serde(rename = "BiPC")]
    Bipc,
    #[strum(serialize = "CEC")]
    #[serde(rename = "CEC")]
    Cec,
    #[strum(serialize = "MEC")]
    #[serde(rename = "MEC")]
    Mec,
    #[strum(serialize = "HEC")]
    #[serde(rename = "HEC")]
    Hec,

    // 10th class subjects
    #[strum(serialize = "Mathematics")]
    #[serde(rename = "Mathematics")]
    SscMath,
    #[strum(serialize = "General Science")]
    #[serde(rename = "General Science")]
    SscScience,
    #[strum(serialize = "Social Studies")]
    #[serde(rename = "Social Studies")]
    SscSocial,
    #[strum(serialize = "English/Languages")]
    #[serde(rename = "English/Languages")]
    SscEnglish,

    // ITI trades
    #[strum(serialize = "Electrician")]
    #[serde(rename = "Electrician")]
    ItiElectrician,
    #[strum(serialize = "Fitter")]
    #[serde(rename = "Fitter")]
    ItiFitter,
    #[strum(serialize = "COPA")]
    #[serde(rename = "COPA")]
    ItiCopa,
    #[strum(serialize = "Motor Mech")]
    #[serde(rename = "Motor Mech")]
    ItiMotorMech,

    // Professional
    #[strum(serialize = "MBBS")]
    #[serde(rename = "MBBS")]
    Mbbs,

    // Engineering branches
    #[strum(serialize = "CSE")]
    #[serde(rename = "CSE")]
    Cse,
    #[strum(serialize = "AI & ML")]
    #[serde(rename = "AI & ML")]
    AiMl,
    #[strum(serialize = "ECE")]
    #[serde(rename = "ECE")]
    Ece,
    #[strum(serialize = "EEE")]
    #[serde(rename = "EEE")]
    Eee,
    #[strum(serialize = "MECH")]
    #[serde(rename = "MECH")]
    Mech,
    #[strum(serialize = "CIVIL")]
    #[serde(rename = "CIVIL")]
    Civil,

    // Degree
    #[strum(serialize = "B.Com")]
    #[serde(rename = "B.Com")]
    BCom,
    #[strum(serialize = "B.Sc")]
    #[serde(rename = "B.Sc")]
    BSc,
    #[strum(serialize = "B.A")]
    #[serde(rename = "B.A")]
    Ba,
    #[strum(serialize = "BBA")]
    #[serde(rename = "BBA")]
    Bba,
}

impl Stream {
    /// Computing streams: CSE, AI & ML and the COPA trade
    pub fn is_cs_like(&self) -> bool {
        matches!(self, Self::Cse | Self::AiMl | Self::ItiCopa)
    }

    /// Electrical/electronics streams: ECE, EEE and the Electrician trade
    pub fn is_elec_like(&self) -> bool {
        matches!(self, Self::Ece | Self::Eee | Self::ItiElectrician)
    }

    /// Mechanical streams: MECH plus the Fitter and Motor Mech trades
    pub fn is_mech_like(&self) -> bool {
        matches!(self, Self::Mech | Self::ItiFitter | Self::ItiMotorMech)
    }

    pub fn is_civil_like(&self) -> bool {
        matches!(self, Self::Civil)
    }
}

/// Career domain a recommendation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Domain {
    #[strum(serialize = "Tech")]
    Tech,
    #[strum(serialize = "Medical")]
    Medical,
    #[strum(serialize = "Business")]
    Business,
    #[strum(serialize = "Arts")]
    Arts,
    #[strum(serialize = "Government")]
    Government,
    #[strum(serialize = "Core Engineering")]
    #[serde(rename = "Core Engineering")]
    CoreEngineering,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_education_level_labels() {
        assert_eq!(EducationLevel::Tenth.to_string(), "10th");
        assert_eq!(EducationLevel::BTech.to_string(), "B.Tech");
        assert_eq!(EducationLevel::MTech.to_string(), "M.Tech");
        assert_eq!(EducationLevel::from_str("ITI").unwrap(), EducationLevel::Iti);
    }

    #[test]
    fn test_stream_parsing_is_exact() {
        assert_eq!(Stream::from_str("AI & ML").unwrap(), Stream::AiMl);
        assert_eq!(Stream::from_str("Motor Mech").unwrap(), Stream::ItiMotorMech);
        assert_eq!(Stream::from_str("Mathematics").unwrap(), Stream::SscMath);
        assert!(Stream::from_str("cse").is_err());
        assert!(Stream::from_str(" CSE").is_err());
        assert!(Stream::from_str("").is_err());
    }

    #[test]
    fn test_stream_display_matches_serde() {
        for stream in Stream::iter() {
            let json = serde_json::to_string(&stream).unwrap();
            assert_eq!(json, format!("\"{}\"", stream));
        }
    }

    #[test]
    fn test_stream_groups_are_disjoint() {
        for stream in Stream::iter() {
            let groups = [
                stream.is_cs_like(),
                stream.is_elec_like(),
                stream.is_mech_like(),
                stream.is_civil_like(),
            ];
            assert!(groups.iter().filter(|g| **g).count() <= 1, "{stream} in two groups");
        }
    }

    #[test]
    fn test_stream_group_membership() {
        assert!(Stream::ItiCopa.is_cs_like());
        assert!(Stream::ItiElectrician.is_elec_like());
        assert!(Stream::ItiMotorMech.is_mech_like());
        assert!(Stream::Civil.is_civil_like());
        assert!(!Stream::Mpc.is_cs_like());
        assert!(!Stream::Mpc.is_elec_like());
    }

    #[test]
    fn test_domain_serialization() {
        assert_eq!(Domain::CoreEngineering.to_string(), "Core Engineering");
        let json = serde_json::to_string(&Domain::CoreEngineering).unwrap();
        assert_eq!(json, "\"Core Engineering\"");
        assert_eq!(Domain::iter().count(), 6);
    }
}
