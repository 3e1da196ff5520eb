//! OAuth token resolution
//!
//! Lookup order: explicit `--token` flag, the `GITHUB_TOKEN` environment
//! variable, an explicitly named token file (flag first, then config), and
//! finally `~/.github_api_key`. If none yields a token the client runs
//! unauthenticated.

use super::Config;
use crate::constants::github::{DEFAULT_TOKEN_FILE, TOKEN_ENV_VAR};
use anyhow::{Context, Result};
use ghfetch_github::OAuthToken;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read a token from a file, trimming surrounding whitespace
pub fn read_token_file(path: &Path) -> Result<OAuthToken> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read token file '{}'", path.display()))?;
    Ok(OAuthToken::new(contents.trim()))
}

/// Default token file location in the user's home directory
pub fn default_token_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_TOKEN_FILE))
}

/// Resolve the token to use for API requests
pub fn resolve_token(
    flag: Option<String>,
    token_file: Option<&Path>,
    config: &Config,
) -> Result<OAuthToken> {
    if let Some(token) = flag.filter(|t| !t.is_empty()) {
        debug!("using token from command line");
        return Ok(OAuthToken::new(token));
    }

    if let Some(token) = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()) {
        debug!("using token from {}", TOKEN_ENV_VAR);
        return Ok(OAuthToken::new(token));
    }

    // Explicitly named files must exist.
    if let Some(path) = token_file {
        return read_token_file(path);
    }
    if let Some(path) = config.token_file_path() {
        return read_token_file(&path);
    }

    if let Some(path) = default_token_path().filter(|p| p.exists()) {
        match read_token_file(&path) {
            Ok(token) => {
                debug!(path = %path.display(), "using token from default token file");
                return Ok(token);
            }
            Err(e) => warn!("Ignoring unreadable token file: {:#}", e),
        }
    }

    debug!("no token configured, requests will be unauthenticated");
    Ok(OAuthToken::anonymous())
}
