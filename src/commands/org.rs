//! Organization lookup command

use super::{Command, CommandContext};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use ghfetch_github::Item;

/// Fields shown in the human-readable summary, when present
const SUMMARY_FIELDS: [&str; 6] = [
    "name",
    "description",
    "public_repos",
    "followers",
    "blog",
    "html_url",
];

/// Show a single organization
pub struct OrgCommand {
    pub org: String,
    /// Print the raw object as JSON
    pub json: bool,
}

impl OrgCommand {
    /// Render the organization object for display
    pub fn render(&self, org: &Item) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(org)?);
        }

        let login = org
            .get("login")
            .and_then(|v| v.as_str())
            .unwrap_or(&self.org);

        let mut lines = vec![format!("{} {}", "•".blue(), login.bold())];
        for field in SUMMARY_FIELDS {
            match org.get(field) {
                Some(serde_json::Value::Null) | None => {}
                Some(serde_json::Value::String(s)) if s.is_empty() => {}
                Some(serde_json::Value::String(s)) => lines.push(format!("  {}: {}", field, s)),
                Some(other) => lines.push(format!("  {}: {}", field, other)),
            }
        }
        Ok(lines.join("\n"))
    }
}

#[async_trait]
impl Command for OrgCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let org = context
            .client
            .org(&self.org)
            .await
            .with_context(|| format!("Failed to fetch organization '{}'", self.org))?;

        println!("{}", self.render(&org)?);
        Ok(())
    }
}
