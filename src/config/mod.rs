//! Configuration management module

pub mod loader;
pub mod token;

pub use loader::{Config, expand_home};
pub use token::{default_token_path, read_token_file, resolve_token};
