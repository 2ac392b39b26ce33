//! Chat-completion configuration from TOML (`[chat]` section)

use route_domain::Model;
use serde::{Deserialize, Serialize};

/// Hugging Face router, OpenAI-compatible
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_API_KEY_ENV: &str = "HF_TOKEN";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which [`ChatGateway`](route_application::ChatGateway) adapter to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatProvider {
    /// Remote model when a key is available, offline stand-in otherwise
    Auto,
    OpenAi,
    Offline,
}

impl ChatProvider {
    pub const VALID: [&'static str; 3] = ["auto", "openai", "offline"];
}

impl std::str::FromStr for ChatProvider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ChatProvider::Auto),
            "openai" | "huggingface" | "hf" => Ok(ChatProvider::OpenAi),
            "offline" | "mock" => Ok(ChatProvider::Offline),
            _ => Err(()),
        }
    }
}

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// "auto", "openai" or "offline"
    pub provider: String,
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    /// Model id sent with every request
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable)
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            provider: "auto".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: Model::DEFAULT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FileChatConfig {
    /// Unknown values fall back to [`ChatProvider::Auto`].
    pub fn parse_provider(&self) -> ChatProvider {
        self.provider.parse().unwrap_or(ChatProvider::Auto)
    }

    pub fn parse_model(&self) -> Model {
        let trimmed = self.model.trim();
        if trimmed.is_empty() {
            Model::default()
        } else {
            Model::new(trimmed)
        }
    }

    /// Configured key, else the key from `api_key_env`. Blank keys count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}
