//! Chat-completion gateway adapters and the factory that picks one from
//! the `[chat]` configuration.

mod offline;
mod openai;

pub use offline::OfflineGateway;
pub use openai::OpenAiCompatibleGateway;

use crate::config::{ChatProvider, FileChatConfig};
use route_application::ports::chat_gateway::{ChatGateway, GatewayError};
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Build the gateway described by `config`.
///
/// `auto` uses the remote endpoint when an API key is available and the
/// offline gateway otherwise.
pub fn build_chat_gateway(config: &FileChatConfig) -> Result<Arc<dyn ChatGateway>, GatewayError> {
    let api_key = config.resolve_api_key();

    match config.parse_provider() {
        ChatProvider::Offline => {
            info!("Using offline chat gateway");
            Ok(Arc::new(OfflineGateway))
        }
        ChatProvider::Auto if api_key.is_none() => {
            info!(
                "No API key in ${}; using offline chat gateway",
                config.api_key_env
            );
            Ok(Arc::new(OfflineGateway))
        }
        ChatProvider::Auto | ChatProvider::OpenAi => {
            if api_key.is_none() {
                warn!(
                    "chat.provider is 'openai' but ${} is not set; requests will be unauthenticated",
                    config.api_key_env
                );
            }
            let gateway = OpenAiCompatibleGateway::new(
                &config.base_url,
                api_key.map(SecretString::new),
                Duration::from_secs(config.timeout_secs.max(1)),
            )?;
            Ok(Arc::new(gateway))
        }
    }
}
