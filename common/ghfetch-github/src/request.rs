//! Request descriptor used to construct paginated query URLs

use crate::error::{GitHubError, Result};
use crate::{DEFAULT_PER_PAGE, GITHUB_API_BASE};
use std::fmt;

/// A single logical API query
///
/// Only `page` changes over the lifetime of a request; the fetch loop bumps it
/// after every page it retrieves. Create a fresh descriptor per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub base_uri: String,
    /// API path with no leading or trailing slash, eg `users/octocat/repos`
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            base_uri: GITHUB_API_BASE.to_string(),
            query: query.into(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Events endpoints only allow 30 per page, everything else up to 100
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Check the descriptor before any I/O is attempted
    pub fn validate(&self) -> Result<()> {
        if self.query.is_empty() {
            return Err(GitHubError::InvalidRequest(
                "query cannot be empty".to_string(),
            ));
        }
        if self.query.starts_with('/') || self.query.ends_with('/') {
            return Err(GitHubError::InvalidRequest(format!(
                "query '{}' must not have leading or trailing slashes",
                self.query
            )));
        }
        if self.per_page == 0 {
            return Err(GitHubError::InvalidRequest(
                "per_page must be greater than zero".to_string(),
            ));
        }
        if self.page == 0 {
            return Err(GitHubError::InvalidRequest(
                "page numbers start at 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}?page={}&per_page={}",
            self.base_uri.trim_end_matches('/'),
            self.query,
            self.page,
            self.per_page
        )
    }
}
