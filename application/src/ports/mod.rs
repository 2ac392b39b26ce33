//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chat_gateway;
pub mod conversation_logger;
pub mod document_repository;
pub mod entity_extractor;
pub mod progress;
pub mod upload_decoder;

use thiserror::Error;

/// Errors raised by the document ports and the document service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Could not decode file as text")]
    Undecodable,

    #[error("Document not found")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
