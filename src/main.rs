//! careerpath - command-line entry point
//!
//! Loads a profile file, runs the engine and prints the result.

use anyhow::{Context, Result};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use careerpath::catalog;
use careerpath::cli::{Cli, Commands};
use careerpath::{CareerPathError, EducationLevel, Profile, Recommendation};

/// Initialize logging to stderr; RUST_LOG overrides the default level
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Recommend { profile, json } => {
            let profile = load_valid_profile(&profile)?;
            let recs = careerpath::generate(&profile);
            info!(count = recs.len(), "recommendations generated");

            if json {
                let out = serde_json::to_string_pretty(&recs)
                    .context("Failed to serialize recommendations")?;
                println!("{}", out);
            } else {
                print_report(&profile, &recs);
            }
        }
        Commands::Validate { profile } => {
            load_valid_profile(&profile)?;
            println!("✓ Profile is valid: {}", profile.display());
        }
        Commands::Catalog { level } => {
            let level = level
                .map(|l| {
                    EducationLevel::from_str(&l).map_err(|_| {
                        CareerPathError::validation(format!("unknown education level: {l}"))
                    })
                })
                .transpose()?;
            print_catalog(level);
        }
        Commands::Template { output } => {
            let profile = Profile::default();
            match output {
                Some(path) => {
                    profile.save_to_file(&path)?;
                    info!("Wrote profile template to {:?}", path);
                }
                None => println!("{}", serde_json::to_string_pretty(&profile)?),
            }
        }
    }

    Ok(())
}

/// Load a profile and reject out-of-range answers, exiting with status 1
fn load_valid_profile(path: &Path) -> Result<Profile> {
    info!("Loading profile from {:?}", path);

    let profile = match Profile::load_from_file(path) {
        Ok(profile) => profile,
        Err(e) => {
            error!("Failed to load profile: {:#}", e);
            eprintln!("✗ Failed to load profile: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = profile.validate() {
        error!("Profile validation failed: {}", e);
        eprintln!("✗ Profile validation failed: {}", e);
        std::process::exit(1);
    }

    Ok(profile)
}

fn print_report(profile: &Profile, recs: &[Recommendation]) {
    let Some(top) = recs.first() else {
        println!("No recommendations.");
        return;
    };

    println!("Result: {}", top.title);
    println!("{}", top.summary(profile));
    println!();

    for (rank, rec) in recs.iter().enumerate() {
        println!(
            "{}. {:<40} {:>3}%  [{}] salary: {}",
            rank + 1,
            rec.title,
            rec.match_score,
            rec.domain,
            rec.salary_potential
        );
    }

    println!();
    println!("Career Roadmap");
    for (phase, milestone) in top.roadmap_phases() {
        println!("  {}: {}", phase, milestone);
    }

    println!();
    println!("Recommended Entrance Exams: {}", top.exams.join(", "));
}

fn print_catalog(level: Option<EducationLevel>) {
    println!("{}:", catalog::stream_prompt(level));
    let streams = match level {
        Some(level) => catalog::streams_for(level).to_vec(),
        None => catalog::all_streams(),
    };
    for info in streams {
        println!("  {:<20} {}", info.stream, info.full);
    }

    println!();
    println!("Interests:");
    for (id, label) in catalog::INTEREST_TAGS {
        println!("  {:<20} {}", id, label);
    }

    println!();
    println!("Skills: {}", catalog::SKILL_TAGS.join(", "));
}
