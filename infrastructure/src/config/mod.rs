//! Configuration file loading for route-assist
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ROUTE_ASSIST_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./route-assist.toml` or `./.route-assist.toml`
//! 4. Global: `$XDG_CONFIG_HOME/route-assist/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ChatProvider, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_BIND, DEFAULT_TIMEOUT_SECS,
    FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig,
    FileRouterConfig, FileServerConfig,
};
pub use loader::ConfigLoader;

use route_domain::ConfigIssue;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {}", summarize(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
