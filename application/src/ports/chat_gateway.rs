//! Chat Gateway port
//!
//! Defines the interface for the hosted chat-completion collaborator.

use async_trait::async_trait;
use route_domain::ChatRequest;
use thiserror::Error;

/// Errors that can occur during chat gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for chat completions
///
/// One call sends one request and yields the completion text of the first
/// choice. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Short provider name, used in logs
    fn provider(&self) -> &str;

    /// Send a request and wait for the completion text
    async fn complete(&self, request: &ChatRequest) -> Result<String, GatewayError>;
}
