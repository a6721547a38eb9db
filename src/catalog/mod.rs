//! Questionnaire reference data.
//!
//! Stream lists per education level, interest tags and skill tags. Kept in
//! Rust so the lists are checked against the `Stream` enum at compile time
//! and can be tested without a front end.
//!
//! # Streams by Level
//!
//! | Level        | Offered streams |
//! |--------------|-----------------|
//! | 10th         | Favourite subject |
//! | Intermediate | MPC, BiPC, MEC, CEC, HEC |
//! | ITI          | Trades |
//! | Diploma/B.Tech | Engineering branches |
//! | M.Tech       | Automatic Analysis + engineering branches |
//! | Degree       | B.Com, BBA, B.Sc, B.A |
//!
//! The engine never reads this module.

use crate::types::{EducationLevel, Stream};

/// A selectable stream with its short label and longer description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    pub stream: Stream,
    pub label: &'static str,
    pub full: &'static str,
}

const fn info(stream: Stream, label: &'static str, full: &'static str) -> StreamInfo {
    StreamInfo { stream, label, full }
}

pub const TENTH_SUBJECTS: &[StreamInfo] = &[
    info(Stream::SscMath, "Mathematics", "Strong interest in calculation & logic"),
    info(Stream::SscScience, "Science", "Physics, Chemistry, Biology"),
    info(Stream::SscSocial, "Social Studies", "History, Civics, Geography"),
    info(Stream::SscEnglish, "English/Arts", "Literature, Languages, Creative"),
];

pub const INTER_STREAMS: &[StreamInfo] = &[
    info(Stream::Mpc, "MPC", "Maths, Physics, Chemistry"),
    info(Stream::Bipc, "BiPC", "Biology, Physics, Chemistry"),
    info(Stream::Mec, "MEC", "Maths, Economics, Commerce"),
    info(Stream::Cec, "CEC", "Commerce, Economics, Civics"),
    info(Stream::Hec, "HEC", "History, Economics, Civics"),
];

pub const ITI_TRADES: &[StreamInfo] = &[
    info(Stream::ItiElectrician, "Electrician", "Electrical Wiring & Equipment"),
    info(Stream::ItiFitter, "Fitter", "Machine Fitting & Assembly"),
    info(Stream::ItiCopa, "COPA", "Computer Operator"),
    info(Stream::ItiMotorMech, "Motor Mech", "Automobile Repair"),
];

pub const ENGINEERING_BRANCHES: &[StreamInfo] = &[
    info(Stream::Cse, "CSE", "Computer Science & Engg"),
    info(Stream::AiMl, "AI & ML", "Artificial Intelligence"),
    info(Stream::Ece, "ECE", "Electronics & Comm."),
    info(Stream::Eee, "EEE", "Electrical & Electronics"),
    info(Stream::Mech, "MECH", "Mechanical Engineering"),
    info(Stream::Civil, "CIVIL", "Civil Engineering"),
];

pub const MTECH_STREAMS: &[StreamInfo] = &[
    info(
        Stream::AutoAnalysis,
        "Automatic Analysis",
        "Let AI analyze based on skills/interests",
    ),
    info(Stream::Cse, "CSE", "Computer Science & Engg"),
    info(Stream::AiMl, "AI & ML", "Artificial Intelligence"),
    info(Stream::Ece, "ECE", "Electronics & Comm."),
    info(Stream::Eee, "EEE", "Electrical & Electronics"),
    info(Stream::Mech, "MECH", "Mechanical Engineering"),
    info(Stream::Civil, "CIVIL", "Civil Engineering"),
];

pub const DEGREE_STREAMS: &[StreamInfo] = &[
    info(Stream::BCom, "B.Com", "Commerce"),
    info(Stream::Bba, "BBA", "Business Admin"),
    info(Stream::BSc, "B.Sc", "Science"),
    info(Stream::Ba, "B.A", "Arts"),
];

/// Interest tag ids and their display labels.
///
/// Rules match on these ids by substring, so `code` and `tech` must stay
/// stable.
pub const INTEREST_TAGS: &[(&str, &str)] = &[
    ("tech", "Technology & AI"),
    ("med", "Medicine & Bio"),
    ("biz", "Business & Mgmt"),
    ("art", "Arts & Design"),
    ("law", "Law & Governance"),
    ("teach", "Teaching"),
    ("agri", "Agriculture"),
    ("code", "Coding"),
];

pub const SKILL_TAGS: &[&str] = &[
    "Mathematics",
    "Logical Reasoning",
    "Communication",
    "Leadership",
    "Creativity",
    "Data Analysis",
    "Biology",
    "Accounting",
    "Problem Solving",
    "Public Speaking",
    "Research",
    "Programming",
    "Design",
];

/// Streams offered for an education level
pub fn streams_for(level: EducationLevel) -> &'static [StreamInfo] {
    match level {
        EducationLevel::Tenth => TENTH_SUBJECTS,
        EducationLevel::Intermediate => INTER_STREAMS,
        EducationLevel::Iti => ITI_TRADES,
        EducationLevel::Diploma | EducationLevel::BTech => ENGINEERING_BRANCHES,
        EducationLevel::Degree => DEGREE_STREAMS,
        EducationLevel::MTech => MTECH_STREAMS,
    }
}

/// Every stream across all levels, for when no level has been chosen.
///
/// Engineering branches appear twice (Diploma/B.Tech and M.Tech lists);
/// duplicates are dropped keeping the first occurrence.
pub fn all_streams() -> Vec<StreamInfo> {
    let mut all: Vec<StreamInfo> = Vec::new();
    for group in [
        TENTH_SUBJECTS,
        INTER_STREAMS,
        ITI_TRADES,
        ENGINEERING_BRANCHES,
        MTECH_STREAMS,
        DEGREE_STREAMS,
    ] {
        for entry in group {
            if !all.iter().any(|s| s.stream == entry.stream) {
                all.push(*entry);
            }
        }
    }
    all
}

/// Question wording for the stream step
pub fn stream_prompt(level: Option<EducationLevel>) -> &'static str {
    match level {
        Some(EducationLevel::Tenth) => "Favorite / Strongest Subject",
        Some(EducationLevel::Intermediate) => "Current Group / Stream",
        Some(EducationLevel::Iti) => "Trade",
        Some(EducationLevel::Diploma | EducationLevel::BTech | EducationLevel::MTech) => {
            "Engineering Branch"
        }
        Some(EducationLevel::Degree) | None => "Specialization / Major",
    }
}

/// Display label for an interest tag id
pub fn interest_label(id: &str) -> Option<&'static str> {
    INTEREST_TAGS
        .iter()
        .find(|(tag, _)| *tag == id)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_level_has_streams() {
        for level in EducationLevel::iter() {
            assert!(!streams_for(level).is_empty(), "{level} has no streams");
        }
    }

    #[test]
    fn test_labels_match_identifiers() {
        // Labels may differ from ids for 10th subjects only
        for group in [INTER_STREAMS, ITI_TRADES, ENGINEERING_BRANCHES, DEGREE_STREAMS] {
            for entry in group {
                assert_eq!(entry.label, entry.stream.to_string());
            }
        }
    }

    #[test]
    fn test_mtech_starts_with_auto_analysis() {
        let streams = streams_for(EducationLevel::MTech);
        assert_eq!(streams[0].stream, Stream::AutoAnalysis);
        assert_eq!(streams.len(), ENGINEERING_BRANCHES.len() + 1);
    }

    #[test]
    fn test_all_streams_covers_enum() {
        let all = all_streams();
        assert_eq!(all.len(), Stream::iter().filter(|s| *s != Stream::Mbbs).count());
        for stream in Stream::iter().filter(|s| *s != Stream::Mbbs) {
            assert!(all.iter().any(|s| s.stream == stream), "{stream} missing");
        }
    }

    #[test]
    fn test_stream_prompt() {
        assert_eq!(stream_prompt(Some(EducationLevel::Iti)), "Trade");
        assert_eq!(stream_prompt(Some(EducationLevel::MTech)), "Engineering Branch");
        assert_eq!(stream_prompt(None), "Specialization / Major");
    }

    #[test]
    fn test_interest_label() {
        assert_eq!(interest_label("code"), Some("Coding"));
        assert_eq!(interest_label("tech"), Some("Technology & AI"));
        assert_eq!(interest_label("cooking"), None);
    }

    #[test]
    fn test_skill_tags_unique() {
        let mut sorted = SKILL_TAGS.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), SKILL_TAGS.len());
        assert!(SKILL_TAGS.contains(&"Accounting"));
    }
}
