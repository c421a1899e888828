mod env;
mod error;
mod manager;
mod project;

pub use env::expand_env;
pub use error::ConfigError;
pub use manager::{CONFIG_TEMPLATE, ConfigManager, ConfigValues, DEFAULT_CONFIG_FILE};
pub use project::{DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, ProjectConfig};
