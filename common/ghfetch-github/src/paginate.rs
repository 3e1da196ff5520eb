//! Paginated fetch loop
//!
//! GitHub list endpoints return a JSON array per page while single-resource
//! endpoints return one JSON object. Both shapes are folded into one ordered
//! `Vec<Item>` so callers never have to care which kind of endpoint they hit.

use crate::client::GitHubClient;
use crate::error::{GitHubError, Result};
use crate::request::Request;
use crate::DEFAULT_USER_AGENT;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// One untyped JSON object from a response
pub type Item = Map<String, Value>;

/// The two body shapes the API returns
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PageBody {
    Many(Vec<Item>),
    One(Item),
}

impl PageBody {
    pub(crate) fn into_items(self) -> Vec<Item> {
        match self {
            PageBody::Many(items) => items,
            PageBody::One(item) => vec![item],
        }
    }
}

/// Decode a response body into the items it carries
pub(crate) fn decode_page(url: &str, body: &[u8]) -> Result<Vec<Item>> {
    serde_json::from_slice::<PageBody>(body)
        .map(PageBody::into_items)
        .map_err(|source| GitHubError::Decode {
            url: url.to_string(),
            source,
        })
}

impl GitHubClient {
    /// Fetch every page of `request` and return the items in the order received
    ///
    /// Pages are requested one after another starting at `request.page`. The
    /// loop stops on the first page holding fewer than `per_page` items, so a
    /// total that is an exact multiple of `per_page` costs one extra, empty
    /// page. Any failure aborts the whole call and drops the pages gathered so
    /// far.
    pub async fn api_request(&self, request: &mut Request) -> Result<Vec<Item>> {
        request.validate()?;

        let mut items = Vec::new();
        loop {
            let url = request.to_string();
            let page = self.fetch_page(&url).await?;
            let count = page.len();
            debug!(%url, count, "fetched page");

            items.extend(page);
            request.page += 1;

            if count < request.per_page as usize {
                break;
            }
        }

        Ok(items)
    }

    /// Convenience wrapper building a fresh descriptor for `query`
    pub async fn get_all(&self, query: &str) -> Result<Vec<Item>> {
        let mut request = self.request(query);
        self.api_request(&mut request).await
    }

    async fn fetch_page(&self, url: &str) -> Result<Vec<Item>> {
        let mut request = self
            .client
            .get(url)
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .header(ACCEPT, "application/vnd.github.v3+json");

        if let Some(value) = self.token.header_value() {
            request = request.header(AUTHORIZATION, value);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GitHubError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let body = response.bytes().await?;
        decode_page(url, &body)
    }
}
