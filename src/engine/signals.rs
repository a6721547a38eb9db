//! Profile signals: every predicate the rules consult, computed once per call.

use std::str::FromStr;

use crate::profile::Profile;
use crate::types::{EducationLevel, Stream};

/// Derived view of a [`Profile`] shared by all rules.
///
/// Interests and skills are stored lowercased so tag lookups are
/// case-insensitive substring matches. An unknown or empty stream becomes
/// `None` and matches no stream-specific rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signals {
    pub level: Option<EducationLevel>,
    pub stream: Option<Stream>,
    interests: Vec<String>,
    skills: Vec<String>,

    // Stream groups
    pub cs_like: bool,
    pub elec_like: bool,
    pub mech_like: bool,
    pub civil_like: bool,

    // Backgrounds that lead forward into a domain
    pub math_background: bool,
    pub science_background: bool,
    pub social_background: bool,
    pub commerce_background: bool,
}

impl Signals {
    pub fn from_profile(profile: &Profile) -> Self {
        let stream = Stream::from_str(&profile.current_stream).ok();
        let is = |s: Stream| stream == Some(s);

        let cs_like = stream.is_some_and(|s| s.is_cs_like());
        let elec_like = stream.is_some_and(|s| s.is_elec_like());
        let mech_like = stream.is_some_and(|s| s.is_mech_like());
        let civil_like = stream.is_some_and(|s| s.is_civil_like());

        Self {
            level: profile.education_level,
            stream,
            interests: lowercased(&profile.interests),
            skills: lowercased(&profile.skills),
            cs_like,
            elec_like,
            mech_like,
            civil_like,
            math_background: is(Stream::SscMath) || is(Stream::Mpc) || is(Stream::Mec) || cs_like,
            science_background: is(Stream::SscScience) || is(Stream::Bipc) || is(Stream::BSc),
            social_background: is(Stream::SscSocial)
                || is(Stream::Hec)
                || is(Stream::Ba)
                || is(Stream::Cec),
            commerce_background: is(Stream::SscMath)
                || is(Stream::Mec)
                || is(Stream::Cec)
                || is(Stream::BCom),
        }
    }

    /// Exact stream match
    pub fn is(&self, stream: Stream) -> bool {
        self.stream == Some(stream)
    }

    pub fn is_any(&self, streams: &[Stream]) -> bool {
        self.stream.is_some_and(|s| streams.contains(&s))
    }

    /// True if any interest contains `tag`, ignoring case
    pub fn has_interest(&self, tag: &str) -> bool {
        contains_tag(&self.interests, tag)
    }

    /// True if any skill contains `tag`, ignoring case
    pub fn has_skill(&self, tag: &str) -> bool {
        contains_tag(&self.skills, tag)
    }
}

fn lowercased(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

fn contains_tag(haystack: &[String], tag: &str) -> bool {
    let needle = tag.to_lowercase();
    haystack.iter().any(|entry| entry.contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(stream: &str) -> Signals {
        Signals::from_profile(&Profile::with_stream(EducationLevel::BTech, stream))
    }

    #[test]
    fn test_unknown_stream_is_none() {
        let s = signals("Quantum Basket Weaving");
        assert!(s.stream.is_none());
        assert!(!s.cs_like && !s.elec_like && !s.mech_like && !s.civil_like);
        assert!(!s.math_background && !s.science_background);
        assert!(!s.social_background && !s.commerce_background);
    }

    #[test]
    fn test_empty_stream_matches_nothing() {
        let s = signals("");
        assert!(s.stream.is_none());
        assert!(!s.is_any(&[Stream::Cse, Stream::Mpc]));
    }

    #[test]
    fn test_cs_like_implies_math_background() {
        for stream in ["CSE", "AI & ML", "COPA"] {
            let s = signals(stream);
            assert!(s.cs_like, "{stream}");
            assert!(s.math_background, "{stream}");
        }
    }

    #[test]
    fn test_backgrounds() {
        assert!(signals("Mathematics").math_background);
        assert!(signals("Mathematics").commerce_background);
        assert!(signals("MEC").math_background);
        assert!(signals("MEC").commerce_background);
        assert!(signals("CEC").social_background);
        assert!(signals("CEC").commerce_background);
        assert!(signals("B.Sc").science_background);
        assert!(signals("B.Com").commerce_background);
        assert!(!signals("BBA").commerce_background);
        assert!(!signals("MBBS").science_background);
    }

    #[test]
    fn test_interest_substring_case_insensitive() {
        let mut profile = Profile::with_stream(EducationLevel::Degree, "B.A");
        profile.interests = vec!["BioTech".to_string(), "LAW & Order".to_string()];
        let s = Signals::from_profile(&profile);

        assert!(s.has_interest("tech"));
        assert!(s.has_interest("law"));
        assert!(s.has_interest("TECH"));
        assert!(!s.has_interest("med"));
    }

    #[test]
    fn test_skill_match_ignores_needle_case() {
        let mut profile = Profile::with_stream(EducationLevel::Degree, "B.Com");
        profile.skills = vec!["Accounting".to_string()];
        let s = Signals::from_profile(&profile);

        assert!(s.has_skill("Accounting"));
        assert!(s.has_skill("account"));
        assert!(!s.has_skill("Design"));
    }

    #[test]
    fn test_empty_tags_match_nothing() {
        let s = signals("CSE");
        assert!(!s.has_interest("tech"));
        assert!(!s.has_skill("programming"));
    }
}
