//! Rate limit command

use super::{Command, CommandContext};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use ghfetch_github::RateLimitStatus;

/// Show the rate limit for the configured token
pub struct RateLimitCommand {
    /// Print only the remaining request count
    pub remaining: bool,
    pub json: bool,
}

impl RateLimitCommand {
    pub fn render(&self, status: &RateLimitStatus, authenticated: bool) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(status)?);
        }
        if self.remaining {
            return Ok(status.remaining.to_string());
        }

        let who = if authenticated {
            "authenticated"
        } else {
            "unauthenticated"
        };
        let remaining = if status.remaining == 0 {
            status.remaining.to_string().red()
        } else {
            status.remaining.to_string().green()
        };
        Ok(format!(
            "Rate limit ({}): {} of {} requests remaining",
            who, remaining, status.limit
        ))
    }
}

#[async_trait]
impl Command for RateLimitCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let output = if self.remaining && !self.json {
            let remaining = context
                .client
                .rate_limit_remaining()
                .await
                .context("Failed to read remaining rate limit")?;
            remaining.to_string()
        } else {
            let status = context
                .client
                .rate_limit_status()
                .await
                .context("Failed to read rate limit")?;
            self.render(&status, context.client.is_authenticated())?
        };

        println!("{}", output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: RateLimitStatus = RateLimitStatus {
        limit: 5000,
        remaining: 4321,
        reset: 0,
    };

    #[test]
    fn test_render_summary() {
        colored::control::set_override(false);
        let command = RateLimitCommand {
            remaining: false,
            json: false,
        };
        assert_eq!(
            command.render(&STATUS, true).unwrap(),
            "Rate limit (authenticated): 4321 of 5000 requests remaining"
        );
    }

    #[test]
    fn test_render_remaining_only() {
        let command = RateLimitCommand {
            remaining: true,
            json: false,
        };
        assert_eq!(command.render(&STATUS, false).unwrap(), "4321");
    }

    #[test]
    fn test_render_json() {
        let command = RateLimitCommand {
            remaining: false,
            json: true,
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&command.render(&STATUS, true).unwrap()).unwrap();
        assert_eq!(parsed["limit"], 5000);
        assert_eq!(parsed["remaining"], 4321);
    }
}
