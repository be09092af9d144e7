//! Configuration for stagehand
//!
//! Loads the TOML configuration controlling the dispatch namespace and the
//! extra hook names the gate accepts beyond the built-in set.

pub mod config;
pub mod dirs;

pub use config::{Config, HooksConfig};
pub use dirs::default_config_path;
