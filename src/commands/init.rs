use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# sevscore configuration

# Base settings: "issue-forms" (free text answers, threshold 300)
# or "checkbox" (weights in parentheses, threshold must be set)
preset = "issue-forms"

[scoring]
threshold = 300
urgency_policy = "reason-or-outage"
extraction = "free-text"

[labels]
urgent = "urgent"
pager_duty = "pager-duty"
comment = "Severity Score: {score}"

[tracker]
# repo = "owner/name"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(&PathBuf::from(CONFIG_FILE_NAME), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, PresetLevel};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset, Some(PresetLevel::IssueForms));
        assert_eq!(config.threshold(), Some(300.0));
        assert_eq!(config.repo(), None);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "keep me").unwrap();

        assert!(init_config_at(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        init_config_at(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
