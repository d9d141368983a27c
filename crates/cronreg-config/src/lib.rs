//! # cronreg Config
//!
//! Configuration for the job registration layer: naming prefixes, lock
//! strategy and group matching for bulk deletion.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigIssue, ConfigValidator, Severity, ValidationReport};
