//! ghfetch - A small CLI over GitHub's organization, member and rate limit endpoints

pub mod commands;
pub mod config;
pub mod constants;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use ghfetch_github as github;

/// Load the configuration and resolve a token, producing a ready client
///
/// `base_uri` and `per_page` override whatever the config file says.
pub fn build_client(
    config_path: &str,
    token: Option<String>,
    token_file: Option<&std::path::Path>,
    base_uri: Option<String>,
    per_page: Option<u32>,
) -> Result<github::GitHubClient> {
    let config = Config::load_config(config_path)?.with_overrides(base_uri, per_page)?;
    let token = config::resolve_token(token, token_file, &config)?;
    config.client(token)
}
