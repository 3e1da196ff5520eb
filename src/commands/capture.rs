//! Test-data capture command
//!
//! Pulls responses for a fixed set of queries and writes them to a JSON file
//! keyed by query string, for use as recorded fixtures.

use super::{Command, CommandContext};
use crate::utils::ensure_directory_exists;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use ghfetch_github::{GitHubClient, Item};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

/// Captured responses keyed by query
pub type Captures = BTreeMap<String, Vec<Item>>;

/// Capture API responses into a fixture file
pub struct CaptureCommand {
    pub user: String,
    pub repo: String,
    pub org: String,
    /// Additional queries captured after the built-in set
    pub extra_queries: Vec<String>,
    pub output: PathBuf,
}

impl CaptureCommand {
    /// Every query this capture will fetch, in fetch order
    pub fn queries(&self) -> Vec<String> {
        let mut queries = vec![
            "rate_limit".to_string(),
            format!("users/{}", self.user),
            format!("users/{}/repos", self.user),
            format!("repos/{}/{}", self.user, self.repo),
            format!("repos/{}/{}/languages", self.user, self.repo),
            format!("orgs/{}", self.org),
            format!("orgs/{}/members", self.org),
        ];
        for query in &self.extra_queries {
            if !queries.contains(query) {
                queries.push(query.clone());
            }
        }
        queries
    }

    /// Fetch every query; the first failure aborts the whole capture
    pub async fn collect(&self, client: &GitHubClient) -> Result<Captures> {
        let mut captures = Captures::new();
        for query in self.queries() {
            let mut request = client.request(query.as_str());
            let items = client
                .api_request(&mut request)
                .await
                .with_context(|| format!("Failed to capture '{}'", query))?;
            println!("{} | {} items", query.cyan(), items.len());
            captures.insert(query, items);
        }
        Ok(captures)
    }

    /// Write captured responses as pretty-printed JSON
    pub fn write(&self, captures: &Captures) -> Result<()> {
        if let Some(parent) = self.output.parent()
            && !parent.as_os_str().is_empty()
        {
            ensure_directory_exists(parent)?;
        }

        let json = serde_json::to_string_pretty(captures)?;
        std::fs::write(&self.output, json)
            .with_context(|| format!("Failed to write '{}'", self.output.display()))?;

        info!(path = %self.output.display(), queries = captures.len(), "wrote capture file");
        Ok(())
    }
}

#[async_trait]
impl Command for CaptureCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        println!(
            "{}",
            format!("Capturing {} queries...", self.queries().len()).green()
        );

        let captures = self.collect(&context.client).await?;
        self.write(&captures)?;

        println!("{}", format!("Wrote {}", self.output.display()).green());
        Ok(())
    }
}
