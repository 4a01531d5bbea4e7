//! CLI command implementations.
//!
//! - **score**: score one issue and apply the resulting tracker actions
//! - **weights**: print the static weight tables
//! - **init**: write a default `.sevscore.toml`

pub mod init;
pub mod score;
pub mod weights;

pub use init::init_config;
pub use score::{handle_score, ScoreCommandConfig};
pub use weights::{print_weights, weights_table};
