//! Error types for GitHub API calls

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Response from {url} is neither a JSON object nor an array of objects: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Empty response for query '{0}'")]
    EmptyResponse(String),

    #[error("Missing field '{0}' in response item")]
    MissingField(String),

    #[error("Field '{field}' is not {expected}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },
}

impl GitHubError {
    /// HTTP status code, when the error came from a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Status { status, .. } => Some(*status),
            GitHubError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the request timed out before a response arrived
    pub fn is_timeout(&self) -> bool {
        matches!(self, GitHubError::Transport(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;
