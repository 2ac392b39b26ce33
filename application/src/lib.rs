//! Application layer for route-assist
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    DocumentError,
    chat_gateway::{ChatGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    document_repository::DocumentRepository,
    entity_extractor::EntityExtractor,
    progress::{NoProgress, WorkflowProgress},
    upload_decoder::{UploadDecoder, UploadedFile},
};
pub use use_cases::document_service::DocumentService;
pub use use_cases::remote_handlers::RemoteHandler;
pub use use_cases::run_workflow::{RunWorkflowUseCase, WorkflowOutcome};
