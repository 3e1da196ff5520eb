//! GitHub client implementation
//!
//! Endpoint modules (`orgs`, `users`, `repositories`, `rate_limit`) extend
//! [`GitHubClient`] with `impl` blocks that build a [`Request`] and hand it to
//! the paginated fetch loop in `paginate`.

use crate::auth::OAuthToken;
use crate::error::Result;
use crate::request::Request;
use crate::{DEFAULT_PER_PAGE, GITHUB_API_BASE, REQUEST_TIMEOUT};
use std::time::Duration;

/// GitHub API client for making optionally authenticated requests
#[derive(Clone, Debug)]
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: OAuthToken,
    pub(crate) base_uri: String,
    pub(crate) per_page: u32,
}

impl GitHubClient {
    /// Create a new GitHub client with the fixed per-request timeout
    ///
    /// An empty token gives unauthenticated access.
    pub fn new(token: OAuthToken) -> Result<Self> {
        Self::with_timeout(token, REQUEST_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout
    pub fn with_timeout(token: OAuthToken, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            token,
            base_uri: GITHUB_API_BASE.to_string(),
            per_page: DEFAULT_PER_PAGE,
        })
    }

    /// Point the client at a different API root (GitHub Enterprise, test servers)
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Page size used by requests built through [`GitHubClient::request`]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Build a fresh request descriptor for `query` using this client's settings
    pub fn request(&self, query: impl Into<String>) -> Request {
        Request::new(query)
            .with_base_uri(self.base_uri.clone())
            .with_per_page(self.per_page)
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}
