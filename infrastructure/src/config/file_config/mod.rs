//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod chat;
mod logging;
mod output;
mod repl;
mod router;
mod server;

pub use chat::{
    ChatProvider, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FileChatConfig,
};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use router::FileRouterConfig;
pub use server::{DEFAULT_BIND, FileServerConfig};

use route_domain::{ConfigIssue, ConfigIssueCode, Severity, Variant};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat-completion gateway settings
    pub chat: FileChatConfig,
    /// Variant selection
    pub router: FileRouterConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// HTTP document service settings
    pub server: FileServerConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks the variant and provider names, the model name and the
    /// request timeout.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.router.parse_variant().is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidEnumValue {
                    field: "router.variant".to_string(),
                    value: self.router.variant.clone(),
                    valid_values: Variant::ALL.iter().map(|v| v.as_str().to_string()).collect(),
                },
                message: format!("router.variant: unknown variant '{}'", self.router.variant),
            });
        }

        if self.chat.provider.parse::<ChatProvider>().is_err() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidEnumValue {
                    field: "chat.provider".to_string(),
                    value: self.chat.provider.clone(),
                    valid_values: ChatProvider::VALID.iter().map(|p| p.to_string()).collect(),
                },
                message: format!(
                    "chat.provider: unknown value '{}', falling back to 'auto'",
                    self.chat.provider
                ),
            });
        }

        if self.chat.model.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyModelName {
                    field: "chat.model".to_string(),
                },
                message: "chat.model: model name cannot be empty, using the default model"
                    .to_string(),
            });
        }

        if self.chat.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "chat.timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                message: "chat.timeout_secs: must be at least 1 second".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[chat]
provider = "openai"
base_url = "http://localhost:8080/v1"
model = "gpt-4o-mini"
api_key_env = "OPENAI_API_KEY"
timeout_secs = 10

[router]
variant = "tiered"

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/route-assist/history.txt"

[server]
bind = "0.0.0.0:9000"

[logging]
conversation_log = "runs.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.parse_provider(), ChatProvider::OpenAi);
        assert_eq!(config.chat.parse_model().as_str(), "gpt-4o-mini");
        assert_eq!(config.chat.timeout_secs, 10);
        assert_eq!(config.router.parse_variant(), Some(Variant::Tiered));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("runs.jsonl")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[router]
variant = "organizer"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.router.parse_variant(), Some(Variant::Organizer));
        // Defaults should apply
        assert_eq!(config.chat, FileChatConfig::default());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.router.variant = "galaxy".to_string();
        config.chat.provider = "bedrock".to_string();
        config.chat.model = " ".to_string();
        config.chat.timeout_secs = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 2);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidEnumValue { field, .. } if field == "router.variant"
        ));
    }
}
