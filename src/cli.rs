use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// careerpath - rule-based career guidance for students
#[derive(Parser)]
#[command(name = "careerpath")]
#[command(about = "Recommend career paths from a student profile")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate recommendations for a profile file
    Recommend {
        /// Path to the profile JSON file
        profile: PathBuf,

        /// Print the recommendations as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Validate a profile file without generating recommendations
    Validate {
        /// Path to the profile JSON file
        profile: PathBuf,
    },
    /// List streams, interest tags and skill tags
    Catalog {
        /// Only show streams for this education level (e.g. "B.Tech")
        #[arg(short, long)]
        level: Option<String>,
    },
    /// Write a default profile to fill in
    Template {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_requires_command() {
        let result = Cli::try_parse_from(["careerpath"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_recommend() {
        let cli = Cli::try_parse_from(["careerpath", "recommend", "/tmp/profile.json"]).unwrap();
        match cli.command {
            Commands::Recommend { profile, json } => {
                assert_eq!(profile.to_str().unwrap(), "/tmp/profile.json");
                assert!(!json);
            }
            _ => panic!("Expected Recommend command"),
        }
    }

    #[test]
    fn test_cli_recommend_json() {
        let cli =
            Cli::try_parse_from(["careerpath", "recommend", "p.json", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Recommend { json: true, .. }));
    }

    #[test]
    fn test_cli_validate() {
        let cli = Cli::try_parse_from(["careerpath", "validate", "p.json"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate { .. }));
    }

    #[test]
    fn test_cli_catalog_level() {
        let cli = Cli::try_parse_from(["careerpath", "catalog", "--level", "M.Tech"]).unwrap();
        match cli.command {
            Commands::Catalog { level } => assert_eq!(level.as_deref(), Some("M.Tech")),
            _ => panic!("Expected Catalog command"),
        }
    }

    #[test]
    fn test_cli_template_output() {
        let cli = Cli::try_parse_from(["careerpath", "template", "-o", "out.json"]).unwrap();
        match cli.command {
            Commands::Template { output } => {
                assert_eq!(output.unwrap().to_str().unwrap(), "out.json");
            }
            _ => panic!("Expected Template command"),
        }
    }
}
