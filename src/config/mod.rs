//! Configuration subsystem.
//!
//! Schema types live in `schema`, file loading in `loader`, and semantic
//! checks in `validation`. Loading runs validation before the config is
//! handed to the rest of the system.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ServiceConfig;
