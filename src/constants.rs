//! Central constants for the ghfetch application

/// Default values for GitHub API access
pub mod github {
    pub use ghfetch_github::{
        DEFAULT_PER_PAGE, DEFAULT_USER_AGENT, GITHUB_API_BASE as API_BASE, MAX_PER_PAGE,
        REQUEST_TIMEOUT,
    };

    /// Environment variable consulted for a token when no flag is given
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

    /// Token file looked up in the home directory when nothing else is configured
    pub const DEFAULT_TOKEN_FILE: &str = ".github_api_key";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "ghfetch.yaml";
}

/// Default values for the test-data capture command
pub mod capture {
    /// Default output file
    pub const DEFAULT_OUTPUT_FILE: &str = "testdata.json";

    pub const DEFAULT_USER: &str = "odysseus";

    pub const DEFAULT_REPO: &str = "go_git";

    pub const DEFAULT_ORG: &str = "recursecenter";
}
