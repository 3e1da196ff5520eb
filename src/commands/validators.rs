//! Command argument validation utilities
//!
//! This module provides validation logic for command arguments after clap
//! parsing, covering the GitHub-specific rules clap cannot express.

use crate::constants::github::MAX_PER_PAGE;
use anyhow::{Result, anyhow};
use regex::Regex;
use std::sync::LazyLock;

/// GitHub logins: alphanumeric or single hyphens, at most 39 characters,
/// not starting with a hyphen
static LOGIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,38})$").expect("login pattern is valid")
});

/// Repository names: letters, digits, `-`, `_` and `.`
static REPO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]{1,100}$").expect("repo pattern is valid"));

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required argument was empty
    EmptyValue { argument: String },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::EmptyValue { argument } => {
                write!(f, "{} cannot be empty", argument)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate a GitHub user or organization login
pub fn validate_login(argument: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyValue {
                argument: argument.to_string(),
            },
        ));
    }

    if !LOGIN_PATTERN.is_match(value) || value.contains("--") || value.ends_with('-') {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: argument.to_string(),
                value: value.to_string(),
                reason: "must be a GitHub login (letters, digits and single hyphens)".to_string(),
            },
        ));
    }

    Ok(())
}

/// Validate a repository name
pub fn validate_repo_name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyValue {
                argument: "repository".to_string(),
            },
        ));
    }

    if !REPO_PATTERN.is_match(value) || value == "." || value == ".." {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "repository".to_string(),
                value: value.to_string(),
                reason: "contains characters GitHub does not allow".to_string(),
            },
        ));
    }

    Ok(())
}

/// Validate a raw API query path
pub fn validate_query(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyValue {
                argument: "query".to_string(),
            },
        ));
    }

    if value.starts_with('/') || value.ends_with('/') {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "query".to_string(),
                value: value.to_string(),
                reason: "must not have leading or trailing slashes".to_string(),
            },
        ));
    }

    if value.contains('?') || value.contains(char::is_whitespace) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "query".to_string(),
                value: value.to_string(),
                reason: "must be a plain path without query string or whitespace".to_string(),
            },
        ));
    }

    Ok(())
}

/// Validate the `--per-page` flag when given
pub fn validate_per_page(per_page: &Option<u32>) -> Result<()> {
    if let Some(per_page) = per_page
        && (*per_page == 0 || *per_page > MAX_PER_PAGE)
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--per-page".to_string(),
                value: per_page.to_string(),
                reason: format!("must be between 1 and {}", MAX_PER_PAGE),
            },
        ));
    }
    Ok(())
}
