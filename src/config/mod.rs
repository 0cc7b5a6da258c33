//! Configuration loading and validation
//!
//! The configuration file is optional: with no file the compiled-in
//! defaults point at the live documentation site. A file can override
//! the endpoints, the timeouts and the working directories.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, DirsConfig, NetworkConfig};
pub use validation::validate;
