use anyhow::Result;
use clap::Parser;
use sevscore::cli::{Cli, Commands};
use sevscore::commands::{self, ScoreCommandConfig};
use sevscore::config::SettingsOverrides;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Commands::Score {
            issue,
            body,
            body_file,
            threshold,
            urgency_policy,
            extraction,
            preset,
            repo,
            config,
            dry_run,
            format,
        } => commands::handle_score(ScoreCommandConfig {
            issue,
            body,
            body_file,
            config,
            overrides: SettingsOverrides {
                preset,
                threshold,
                urgency_policy,
                extraction,
                repo,
            },
            dry_run,
            format,
        }),
        Commands::Weights => {
            commands::print_weights();
            Ok(())
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

// RUST_LOG, when set, takes precedence over -v
fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
