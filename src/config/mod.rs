//! Configuration module for tailwatch
//!
//! Settings are resolved in this order:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (TAILWATCH_*)
//! 3. Config file (`--config`, or ~/.config/tailwatch/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    default_config_path, load, load_or_default, with_env_overrides, with_env_overrides_from,
    ConfigWarning,
};
pub use types::Settings;
