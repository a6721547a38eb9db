//! Recommendation engine — maps a profile to a ranked list of careers.
//!
//! The engine is a pure function over the profile and the compiled rule
//! table: no I/O, no randomness, no state between calls.
//!
//! # Flow
//!
//! ```text
//! Profile ──► Signals ──► Track::select
//!                             │
//!        ┌────────────────────┼──────────────────────┐
//!   MTechTerminal         ItiTerminal        General { mtech_preamble }
//!   (R&D, professor,      (trade + lateral   (optional M.Tech pair,
//!    architect)            diploma)           rule table, fallback)
//!        └────────────────────┼──────────────────────┘
//!                             ▼
//!                  finalize: dedupe → sort → top 3
//! ```

pub mod rules;
pub mod signals;

use tracing::{debug, trace};

use crate::profile::Profile;
use crate::recommendation::Recommendation;
use crate::types::{EducationLevel, Stream};

pub use rules::{GENERAL_RULES, Rule};
pub use signals::Signals;

/// Maximum number of recommendations returned
pub const MAX_RESULTS: usize = 3;

/// Which evaluation path a profile takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// M.Tech with Automatic Analysis: fixed trio, general rules skipped
    MTechTerminal,
    /// ITI: one trade card plus lateral entry, general rules skipped
    ItiTerminal,
    /// Rule table. M.Tech students with a specific branch get the
    /// research/professor pair ahead of the table.
    General { mtech_preamble: bool },
}

impl Track {
    pub fn select(signals: &Signals) -> Self {
        match signals.level {
            Some(EducationLevel::MTech) if signals.is(Stream::AutoAnalysis) => Self::MTechTerminal,
            Some(EducationLevel::MTech) => Self::General { mtech_preamble: true },
            Some(EducationLevel::Iti) => Self::ItiTerminal,
            _ => Self::General { mtech_preamble: false },
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::MTechTerminal | Self::ItiTerminal)
    }
}

/// Produce at most [`MAX_RESULTS`] recommendations for a profile.
///
/// Total over every input: empty or unknown streams and empty tag lists
/// simply match fewer rules. The result has unique ids and is sorted by
/// score, highest first, keeping emission order among equal scores.
pub fn generate(profile: &Profile) -> Vec<Recommendation> {
    let signals = Signals::from_profile(profile);
    let track = Track::select(&signals);

    let candidates = match track {
        Track::MTechTerminal => {
            let mut recs = rules::mtech_core();
            recs.push(rules::tech_architect());
            recs
        }
        Track::ItiTerminal => {
            let mut recs: Vec<_> = rules::iti_trade(&signals).into_iter().collect();
            recs.push(rules::lateral_diploma());
            recs
        }
        Track::General { mtech_preamble } => {
            let mut recs = if mtech_preamble { rules::mtech_core() } else { Vec::new() };
            for rule in GENERAL_RULES {
                let fired = rule.evaluate(&signals);
                if !fired.is_empty() {
                    trace!(rule = rule.id(), count = fired.len(), "rule fired");
                }
                recs.extend(fired);
            }
            if recs.is_empty() {
                recs.push(rules::fallback());
            }
            recs
        }
    };

    debug!(?track, candidates = candidates.len(), "evaluated career rules");

    finalize(candidates)
}

/// Alias kept for callers using the questionnaire's naming
pub fn generate_recommendations(profile: &Profile) -> Vec<Recommendation> {
    generate(profile)
}

/// Deduplicate by id, sort by score descending (stable), keep the top three.
///
/// A repeated id keeps the position of its first occurrence and the value
/// of its last.
pub fn finalize(candidates: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut unique: Vec<Recommendation> = Vec::with_capacity(candidates.len());
    for rec in candidates {
        match unique.iter_mut().find(|existing| existing.id == rec.id) {
            Some(existing) => *existing = rec,
            None => unique.push(rec),
        }
    }

    // sort_by is stable
    unique.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    unique.truncate(MAX_RESULTS);
    unique
}
