//! Raw paginated query command

use super::{Command, CommandContext};
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Fetch every page of an arbitrary API path and print the items as JSON
pub struct GetCommand {
    /// API path with no leading or trailing slash, eg `users/octocat/repos`
    pub query: String,
}

#[async_trait]
impl Command for GetCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let mut request = context.client.request(self.query.as_str());
        let items = context
            .client
            .api_request(&mut request)
            .await
            .with_context(|| format!("Failed to fetch '{}'", self.query))?;

        println!("{}", serde_json::to_string_pretty(&items)?);
        Ok(())
    }
}
