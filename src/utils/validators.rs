//! Configuration validation utilities
//!
//! Centralized validation of loaded configuration values. Every rule that
//! fails is reported, not just the first one.

use crate::config::Config;
use crate::constants::github::MAX_PER_PAGE;
use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Base URI is empty
    EmptyBaseUri,
    /// Base URI does not use http or https
    InvalidBaseUri(String),
    /// Page size is zero or above the API maximum
    PerPageOutOfRange(u32),
    /// Token file path is present but blank
    EmptyTokenFile,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyBaseUri => {
                write!(f, "base_uri cannot be empty")
            }
            ValidationError::InvalidBaseUri(uri) => {
                write!(f, "base_uri must start with http:// or https://: '{}'", uri)
            }
            ValidationError::PerPageOutOfRange(per_page) => {
                write!(
                    f,
                    "per_page must be between 1 and {}, got {}",
                    MAX_PER_PAGE, per_page
                )
            }
            ValidationError::EmptyTokenFile => {
                write!(f, "token_file cannot be blank")
            }
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_base_uri(&config.base_uri) {
        errors.push(e);
    }

    if let Err(e) = validate_per_page(config.per_page) {
        errors.push(e);
    }

    if let Some(token_file) = &config.token_file
        && token_file.trim().is_empty()
    {
        errors.push(ValidationError::EmptyTokenFile);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an API base URI
pub fn validate_base_uri(uri: &str) -> Result<(), ValidationError> {
    if uri.trim().is_empty() {
        return Err(ValidationError::EmptyBaseUri);
    }
    if !uri.starts_with("https://") && !uri.starts_with("http://") {
        return Err(ValidationError::InvalidBaseUri(uri.to_string()));
    }
    Ok(())
}

/// Validates a page size against the API limit
pub fn validate_per_page(per_page: u32) -> Result<(), ValidationError> {
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(ValidationError::PerPageOutOfRange(per_page));
    }
    Ok(())
}

/// Convert validation errors to anyhow::Error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
