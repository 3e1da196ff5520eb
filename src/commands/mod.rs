//! Command implementations

pub mod base;
pub mod capture;
pub mod get;
pub mod members;
pub mod org;
pub mod rate_limit;
pub mod validators;

pub use base::{Command, CommandContext};
pub use capture::CaptureCommand;
pub use get::GetCommand;
pub use members::MembersCommand;
pub use org::OrgCommand;
pub use rate_limit::RateLimitCommand;
