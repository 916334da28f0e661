//! # Anagram Configuration
//!
//! Type-safe configuration for the anagram service.
//!
//! Values are resolved with the precedence `defaults < file < env < args`:
//!
//! ```rust,no_run
//! use anagram_config::{AppConfig, ConfigOverrides};
//!
//! # fn example() -> Result<(), anagram_config::ConfigError> {
//! let overrides = ConfigOverrides {
//!     port: Some(8080),
//!     ..Default::default()
//! };
//! let config = AppConfig::load(None, overrides)?;
//! println!("listening on {}", config.server.socket_addr());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod loader;

pub use config::*;
pub use error::{ConfigError, ConfigResult};
pub use loader::*;
