//! Base types and traits for the command pattern

use anyhow::Result;
use ghfetch_github::GitHubClient;

/// Context passed to all commands
#[derive(Clone)]
pub struct CommandContext {
    /// Client configured with the resolved token, base URI and page size
    pub client: GitHubClient,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
