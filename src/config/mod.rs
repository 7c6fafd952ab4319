//! Application configuration.
//!
//! Settings are read from `config/default.toml`, then `config/{env}.toml`,
//! then `config/local.toml`, and finally `RH_*` environment variables
//! (`RH_DATABASE__URL`, `RH_JWT__SECRET`, ...). See [`ConfigLoader`].

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::{ConfigLoader, ConfigSource};
pub use settings::{ApplicationConfig, DatabaseConfig, JwtConfig, ServerConfig, Settings};
