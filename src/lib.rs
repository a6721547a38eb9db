//! careerpath library
//!
//! A deterministic, explainable career recommendation engine. A student
//! profile goes in, at most three ranked career recommendations come out.

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod profile;
pub mod recommendation;
pub mod types;

// Re-export main types for convenience
pub use engine::{generate, generate_recommendations, Track, MAX_RESULTS};
pub use error::{CareerPathError, ProfileError};
pub use profile::Profile;
pub use recommendation::Recommendation;
pub use types::{Domain, EducationLevel, Stream};
