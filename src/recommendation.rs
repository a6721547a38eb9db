//! Career recommendation produced by the engine

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::profile::Profile;
use crate::types::Domain;

/// Highest score any recommendation may carry
pub const MAX_SCORE: u8 = 100;

/// One suggested career path with its supporting detail.
///
/// `id` identifies the rule that produced it and is the deduplication key;
/// titles and descriptions can differ between variants of the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub match_score: u8,
    pub domain: Domain,
    pub exams: Vec<String>,
    pub roadmap: Vec<String>,
    pub salary_potential: String,
}

impl Recommendation {
    /// Roadmap milestones labelled `Phase 1`, `Phase 2`, ...
    pub fn roadmap_phases(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.roadmap
            .iter()
            .enumerate()
            .map(|(idx, milestone)| (format!("Phase {}", idx + 1), milestone.as_str()))
    }

    /// Headline sentence for a results page
    pub fn summary(&self, profile: &Profile) -> String {
        let interest = profile
            .interests
            .first()
            .and_then(|id| catalog::interest_label(id))
            .unwrap_or("various fields");

        format!(
            "Based on your profile ({} background with interests in {}), \
             {} is a {}% match.",
            profile.current_stream, interest, self.title, self.match_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EducationLevel;

    fn sample() -> Recommendation {
        Recommendation {
            id: "software-eng".to_string(),
            title: "Software Engineer / Architect".to_string(),
            description: "Build software.".to_string(),
            match_score: 95,
            domain: Domain::Tech,
            exams: vec!["GATE (CSE)".to_string()],
            roadmap: vec!["Strong DSA".to_string(), "System Design".to_string()],
            salary_potential: "Very High".to_string(),
        }
    }

    #[test]
    fn test_roadmap_phases() {
        let rec = sample();
        let phases: Vec<_> = rec.roadmap_phases().collect();
        assert_eq!(phases[0], ("Phase 1".to_string(), "Strong DSA"));
        assert_eq!(phases[1], ("Phase 2".to_string(), "System Design"));
    }

    #[test]
    fn test_summary_uses_first_interest_label() {
        let mut profile = Profile::with_stream(EducationLevel::BTech, "CSE");
        profile.interests = vec!["code".to_string(), "tech".to_string()];

        let summary = sample().summary(&profile);
        assert_eq!(
            summary,
            "Based on your profile (CSE background with interests in Coding), \
             Software Engineer / Architect is a 95% match."
        );
    }

    #[test]
    fn test_summary_without_known_interest() {
        let profile = Profile::with_stream(EducationLevel::BTech, "CSE");
        assert!(sample().summary(&profile).contains("interests in various fields"));
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["matchScore"], 95);
        assert_eq!(json["salaryPotential"], "Very High");
        assert_eq!(json["domain"], "Tech");
    }
}
