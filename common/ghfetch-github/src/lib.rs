//! GitHub API client library
//!
//! This library wraps a handful of GitHub REST endpoints as typed calls on top
//! of a single paginated fetch routine. Every response, whether the endpoint
//! returns a list or a single resource, comes back as an ordered `Vec<Item>`.
//!
//! ## Modules
//!
//! - [`auth`]: OAuth token handling
//! - [`client`]: Core GitHub client implementation
//! - [`request`]: Request descriptor used to build page URLs
//! - [`paginate`]: The paginated fetch loop and page decoding
//! - [`orgs`]: Organization and member lookups
//! - [`users`]: User and user repository lookups
//! - [`repositories`]: Repository and language lookups
//! - [`rate_limit`]: Rate limit lookups
//! - [`util`]: Typed projections over untyped JSON items

pub mod auth;
pub mod client;
pub mod error;
pub mod orgs;
pub mod paginate;
pub mod rate_limit;
pub mod repositories;
pub mod request;
pub mod users;
pub mod util;

// Re-export public API
pub use auth::OAuthToken;
pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use paginate::Item;
pub use rate_limit::RateLimitStatus;
pub use request::Request;
pub use util::{first_item, nested_object, stringify_values, u64_field, values_for_key};

/// GitHub API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Default number of items requested per page (the API maximum)
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Upper bound GitHub accepts for `per_page`
pub const MAX_PER_PAGE: u32 = 100;

/// Fixed timeout applied to every page request
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("ghfetch/", env!("CARGO_PKG_VERSION"));
