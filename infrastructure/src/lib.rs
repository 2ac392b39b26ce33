//! Infrastructure layer for route-assist
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod chat;
pub mod config;
pub mod logging;
pub mod nlp;
pub mod storage;

// Re-export commonly used types
pub use chat::{OfflineGateway, OpenAiCompatibleGateway, build_chat_gateway};
pub use config::{
    ChatProvider, ConfigError, ConfigLoader, FileChatConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig, FileRouterConfig, FileServerConfig,
};
pub use logging::JsonlConversationLogger;
pub use nlp::{PlainTextDecoder, RuleBasedEntityExtractor};
pub use storage::InMemoryDocumentRepository;
