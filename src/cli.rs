use crate::config::PresetLevel;
use crate::extraction::ExtractionStyle;
use crate::io::OutputFormat;
use crate::scoring::UrgencyPolicy;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sevscore")]
#[command(about = "Severity scoring and labeling for issue tracker submissions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an issue and update its labels
    Score {
        /// Issue number or identifier
        #[arg(long = "issue", env = "ISSUE_NUMBER")]
        issue: String,

        /// Issue body text
        #[arg(long = "body", env = "ISSUE_BODY", conflicts_with = "body_file", hide_env_values = true)]
        body: Option<String>,

        /// Read the issue body from a file (`-` for stdin)
        #[arg(long = "body-file")]
        body_file: Option<PathBuf>,

        /// Scores at or below this value remove the pager-duty label
        #[arg(long = "threshold", env = "SEVERITY_THRESHOLD")]
        threshold: Option<f64>,

        /// Which urgency rule applies
        #[arg(long = "urgency-policy", value_enum)]
        urgency_policy: Option<UrgencyPolicy>,

        /// How answers are written in the issue body
        #[arg(long = "extraction", value_enum)]
        extraction: Option<ExtractionStyle>,

        /// Base preset for the settings above
        #[arg(long = "preset", value_enum)]
        preset: Option<PresetLevel>,

        /// Repository as owner/name
        #[arg(long = "repo", env = "GITHUB_REPOSITORY")]
        repo: Option<String>,

        /// Configuration file (defaults to the nearest .sevscore.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log the tracker calls instead of making them
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Print the weight tables
    Weights,

    /// Initialize a new .sevscore.toml configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Log level implied by `-v`, used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from([
            "sevscore",
            "score",
            "--issue",
            "12",
            "--body",
            "text",
            "--threshold",
            "250",
            "--urgency-policy",
            "reason-only",
            "--dry-run",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        match cli.command {
            Commands::Score {
                issue,
                threshold,
                urgency_policy,
                dry_run,
                ..
            } => {
                assert_eq!(issue, "12");
                assert_eq!(threshold, Some(250.0));
                assert_eq!(urgency_policy, Some(UrgencyPolicy::ReasonOnly));
                assert!(dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_threshold_is_rejected() {
        let result = Cli::try_parse_from([
            "sevscore",
            "score",
            "--issue",
            "1",
            "--threshold",
            "high",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_body_and_body_file_conflict() {
        let result = Cli::try_parse_from([
            "sevscore",
            "score",
            "--issue",
            "1",
            "--body",
            "x",
            "--body-file",
            "-",
        ]);
        assert!(result.is_err());
    }
}
