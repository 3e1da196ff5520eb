//! Organization member listing command

use super::{Command, CommandContext};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use ghfetch_github::{Item, stringify_values, values_for_key};

/// List every member of an organization across all pages
pub struct MembersCommand {
    pub org: String,
    /// Print only the login of each member, one per line
    pub handles: bool,
    /// Print the raw member objects as JSON
    pub json: bool,
}

impl MembersCommand {
    /// Render the member list for display
    pub fn render(&self, members: &[Item]) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(members)?);
        }

        let logins = values_for_key("login", members)?;
        let handles = stringify_values("login", &logins)?;

        if self.handles {
            return Ok(handles.join("\n"));
        }

        let mut lines = vec![
            format!("Found {} members of {}", handles.len(), self.org)
                .green()
                .to_string(),
        ];
        lines.extend(handles.iter().map(|h| format!("{} {}", "•".blue(), h)));
        Ok(lines.join("\n"))
    }
}

#[async_trait]
impl Command for MembersCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let members = context
            .client
            .org_members(&self.org)
            .await
            .with_context(|| format!("Failed to list members of '{}'", self.org))?;

        if members.is_empty() && !self.json {
            println!(
                "{}",
                format!("No public members found for {}", self.org).yellow()
            );
            return Ok(());
        }

        println!("{}", self.render(&members)?);
        Ok(())
    }
}
