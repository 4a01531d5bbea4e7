use super::IssueTracker;
use crate::errors::TrackerError;
use std::path::{Path, PathBuf};
use std::process::Command;

const GH: &str = "gh";

/// Issue tracker backed by the GitHub CLI.
///
/// Authentication is left to `gh` itself (`GH_TOKEN` / `GITHUB_TOKEN` in CI).
/// Without a repository, `gh` resolves it from the current checkout.
#[derive(Debug, Clone)]
pub struct GhCliTracker {
    program: PathBuf,
    repo: Option<String>,
}

impl GhCliTracker {
    /// Locate `gh` on `PATH`.
    pub fn new(repo: Option<String>) -> Result<Self, TrackerError> {
        let program = which::which(GH).map_err(|_| TrackerError::NotInstalled(GH.to_string()))?;
        Ok(Self::with_program(program, repo))
    }

    pub fn with_program(program: impl Into<PathBuf>, repo: Option<String>) -> Self {
        Self {
            program: program.into(),
            repo,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn repo(&self) -> Option<&str> {
        self.repo.as_deref()
    }

    /// Arguments for `gh issue edit <issue> <flag> <label>`.
    pub fn edit_args(&self, issue: &str, flag: &str, label: &str) -> Vec<String> {
        self.with_repo(vec![
            "issue".to_string(),
            "edit".to_string(),
            issue.to_string(),
            flag.to_string(),
            label.to_string(),
        ])
    }

    /// Arguments for `gh issue comment <issue> --body <body>`.
    pub fn comment_args(&self, issue: &str, body: &str) -> Vec<String> {
        self.with_repo(vec![
            "issue".to_string(),
            "comment".to_string(),
            issue.to_string(),
            "--body".to_string(),
            body.to_string(),
        ])
    }

    fn with_repo(&self, mut args: Vec<String>) -> Vec<String> {
        if let Some(repo) = &self.repo {
            args.push("--repo".to_string());
            args.push(repo.clone());
        }
        args
    }

    fn run(
        &self,
        operation: &'static str,
        issue: &str,
        args: &[String],
    ) -> Result<(), TrackerError> {
        log::debug!("Running {} {}", self.program.display(), args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| TrackerError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let raw = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr
        };
        Err(TrackerError::rejected(operation, issue, raw))
    }
}

impl IssueTracker for GhCliTracker {
    fn add_label(&self, issue: &str, label: &str) -> Result<(), TrackerError> {
        let args = self.edit_args(issue, "--add-label", label);
        self.run("add label", issue, &args)
    }

    fn remove_label(&self, issue: &str, label: &str) -> Result<(), TrackerError> {
        let args = self.edit_args(issue, "--remove-label", label);
        self.run("remove label", issue, &args)
    }

    fn post_comment(&self, issue: &str, body: &str) -> Result<(), TrackerError> {
        let args = self.comment_args(issue, body);
        self.run("post comment", issue, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_args_without_repo() {
        let tracker = GhCliTracker::with_program("gh", None);
        assert_eq!(
            tracker.edit_args("42", "--add-label", "urgent"),
            vec!["issue", "edit", "42", "--add-label", "urgent"]
        );
    }

    #[test]
    fn test_comment_args_with_repo() {
        let tracker = GhCliTracker::with_program("gh", Some("devtron-labs/devtron".into()));
        assert_eq!(
            tracker.comment_args("7", "Severity Score: 200"),
            vec![
                "issue",
                "comment",
                "7",
                "--body",
                "Severity Score: 200",
                "--repo",
                "devtron-labs/devtron"
            ]
        );
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let tracker = GhCliTracker::with_program("/nonexistent/sevscore-gh", None);
        let err = tracker.add_label("1", "urgent").unwrap_err();
        assert!(matches!(err, TrackerError::Launch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_rejected() {
        // `false` ignores its arguments and exits 1
        let tracker = GhCliTracker::with_program("false", None);
        let err = tracker.remove_label("1", "pager-duty").unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Rejected {
                operation: "remove label",
                ..
            }
        ));
    }
}
