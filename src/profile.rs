//! Student profile: the questionnaire answers fed to the engine.
//!
//! Profiles can be saved to and loaded from JSON using the same camelCase
//! keys the questionnaire produces. Loading never consults the catalog, so
//! free-text streams survive a round trip untouched.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::catalog;
use crate::error::ProfileError;
use crate::types::{EducationLevel, Stream};

/// Accepted GPA range (percentage)
pub const GPA_RANGE: (u8, u8) = (40, 100);

/// Accepted range for the 1-10 preference sliders
pub const PREFERENCE_RANGE: (u8, u8) = (1, 10);

/// Everything the questionnaire collects about a student.
///
/// `gpa`, `work_style` and `environment` are validated but no current rule
/// reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    #[serde(
        serialize_with = "serialize_level",
        deserialize_with = "deserialize_level"
    )]
    pub education_level: Option<EducationLevel>,
    pub current_stream: String, // Catalog identifier or free text
    pub gpa: u8,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    /// 1 = individual, 10 = team player
    pub work_style: u8,
    /// 1 = office/desk, 10 = field work
    pub environment: u8,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 16,
            education_level: None,
            current_stream: String::new(),
            gpa: 75,
            interests: Vec::new(),
            skills: Vec::new(),
            work_style: 5,
            environment: 5,
        }
    }
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the two answers that drive most rules
    pub fn with_stream(level: EducationLevel, stream: impl Into<String>) -> Self {
        Self {
            education_level: Some(level),
            current_stream: stream.into(),
            ..Self::default()
        }
    }

    /// The stream as a catalog value, if it is one
    pub fn known_stream(&self) -> Option<Stream> {
        Stream::from_str(&self.current_stream).ok()
    }

    /// Save profile to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize profile to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write profile to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load profile from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile from {:?}", path.as_ref()))?;

        let profile: Self =
            serde_json::from_str(&content).context("Failed to parse profile JSON")?;

        Ok(profile)
    }

    /// Check the numeric answers are inside the questionnaire's ranges.
    ///
    /// Streams are never rejected: an unknown stream is only logged, the
    /// engine falls back gracefully on its own.
    pub fn validate(&self) -> std::result::Result<(), ProfileError> {
        let (min, max) = GPA_RANGE;
        if !(min..=max).contains(&self.gpa) {
            return Err(ProfileError::GpaOutOfRange { value: self.gpa, min, max });
        }

        let (min, max) = PREFERENCE_RANGE;
        for (field, value) in [("workStyle", self.work_style), ("environment", self.environment)] {
            if !(min..=max).contains(&value) {
                return Err(ProfileError::PreferenceOutOfRange { field, value, min, max });
            }
        }

        if let Some(level) = self.education_level {
            let offered = self
                .known_stream()
                .is_some_and(|s| catalog::streams_for(level).iter().any(|info| info.stream == s));
            if !offered && !self.current_stream.is_empty() {
                tracing::debug!(
                    stream = %self.current_stream,
                    level = %level,
                    "stream is not in the catalog for this education level"
                );
            }
        }

        Ok(())
    }
}

/// Unset levels travel as `""`, matching the questionnaire's initial state
fn serialize_level<S: Serializer>(
    level: &Option<EducationLevel>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match level {
        Some(level) => serializer.serialize_str(&level.to_string()),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_level<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<EducationLevel>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => EducationLevel::from_str(s).map(Some).map_err(|_| {
            serde::de::Error::custom(format!("unknown education level: {s:?}"))
        }),
    }
}
