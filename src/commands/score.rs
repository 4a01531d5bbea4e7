use crate::config::{self, Settings, SettingsOverrides, SevscoreConfig};
use crate::io::{self, OutputFormat};
use crate::scorer::{RunSummary, SeverityScorer};
use crate::tracker::{DryRunTracker, GhCliTracker, IssueTracker};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScoreCommandConfig {
    pub issue: String,
    pub body: Option<String>,
    pub body_file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub overrides: SettingsOverrides,
    pub dry_run: bool,
    pub format: OutputFormat,
}

/// Score one issue. Exits successfully whether the issue was scored or
/// skipped for missing answers; tracker failures are reported, not raised.
pub fn handle_score(config: ScoreCommandConfig) -> Result<()> {
    let file_config = load_file_config(config.config.as_ref())?;
    let settings = Settings::resolve(&config.overrides, &file_config);
    log::debug!("Resolved settings: {:?}", settings);

    let body = read_body(&config)?;
    let scorer = SeverityScorer::new(settings.scorer_config(&config.issue, body))
        .context("Cannot score issue")?;

    let summary = if config.dry_run {
        scorer.run(&DryRunTracker::new())
    } else {
        run_with(&scorer, &gh_tracker(settings.repo.clone()))
    };

    io::create_writer(config.format).write_summary(&summary)?;
    Ok(())
}

fn run_with<T: IssueTracker>(scorer: &SeverityScorer, tracker: &T) -> RunSummary {
    let summary = scorer.run(tracker);
    let failures = summary.actions.iter().filter(|a| !a.succeeded()).count();
    if failures > 0 {
        log::warn!(
            "{} of {} tracker actions failed for issue {}",
            failures,
            summary.actions.len(),
            summary.issue_id
        );
    }
    summary
}

/// `gh` from `PATH`. When it is missing, calls fall back to a bare `gh` and
/// fail one by one, so skipped issues and logging are unaffected.
fn gh_tracker(repo: Option<String>) -> GhCliTracker {
    GhCliTracker::new(repo.clone()).unwrap_or_else(|e| {
        log::warn!("{}", e);
        GhCliTracker::with_program("gh", repo)
    })
}

fn load_file_config(path: Option<&PathBuf>) -> Result<SevscoreConfig> {
    match path {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

fn read_body(config: &ScoreCommandConfig) -> Result<String> {
    match (&config.body, &config.body_file) {
        (_, Some(path)) => io::read_input(path),
        (Some(body), None) => Ok(body.clone()),
        (None, None) => {
            anyhow::bail!("No issue body given. Pass --body, --body-file or set ISSUE_BODY.")
        }
    }
}
