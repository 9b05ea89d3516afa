//! Run configuration: settings file, command-line overrides, validation.
mod loader;
mod manager;
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    ExtractConfig,
    Settings,
    ValidationError,
};
