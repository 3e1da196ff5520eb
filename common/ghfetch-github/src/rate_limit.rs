//! Rate limit lookups
//!
//! Authenticated tokens currently get 5000 requests per hour; anonymous
//! callers get 60 per source IP.

use crate::client::GitHubClient;
use crate::error::Result;
use crate::paginate::Item;
use crate::util::{first_item, nested_object, u64_field};
use serde::Serialize;

const RATE_LIMIT_QUERY: &str = "rate_limit";

/// Core rate limit figures from `GET /rate_limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitStatus {
    pub limit: u64,
    pub remaining: u64,
    /// Epoch seconds when the window resets, 0 when the API omits it
    pub reset: u64,
}

impl RateLimitStatus {
    /// Project the `rate` object out of a rate limit response item
    pub fn from_item(item: &Item) -> Result<Self> {
        let rate = nested_object(item, "rate")?;
        Ok(Self {
            limit: u64_field(rate, "limit")?,
            remaining: u64_field(rate, "remaining")?,
            reset: rate.get("reset").and_then(|v| v.as_u64()).unwrap_or(0),
        })
    }
}

impl GitHubClient {
    /// Read the full rate limit status in a single request
    pub async fn rate_limit_status(&self) -> Result<RateLimitStatus> {
        let item = self.rate_limit_item().await?;
        RateLimitStatus::from_item(&item)
    }

    /// Read the rate limit for the configured token
    pub async fn rate_limit(&self) -> Result<u64> {
        let item = self.rate_limit_item().await?;
        u64_field(nested_object(&item, "rate")?, "limit")
    }

    /// Remaining requests for the token; anonymous clients get the
    /// remaining allowance for their IP
    pub async fn rate_limit_remaining(&self) -> Result<u64> {
        let item = self.rate_limit_item().await?;
        u64_field(nested_object(&item, "rate")?, "remaining")
    }

    async fn rate_limit_item(&self) -> Result<Item> {
        let items = self.get_all(RATE_LIMIT_QUERY).await?;
        first_item(RATE_LIMIT_QUERY, items)
    }
}
