//! Configuration for Sandtrail front-ends.
//!
//! Settings come from an optional `.env` file, an optional TOML or JSON file
//! and `SANDTRAIL_*` environment overrides, in that order of increasing
//! precedence. [`logging::init_tracing`] installs the shared subscriber.

#![allow(missing_docs)]

pub mod loader;
pub mod logging;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    Config, ConfigMetadata, ConfigSource, ContactConfig, DisplayConfig, StorefrontConfig,
};
pub use validation::{ConfigWarning, ConfigWarnings};
