//! Document storage port

use super::DocumentError;
use async_trait::async_trait;
use route_domain::{Document, DocumentId};

/// Storage for uploaded documents
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn save(&self, document: Document) -> Result<(), DocumentError>;

    async fn find(&self, id: &DocumentId) -> Result<Option<Document>, DocumentError>;

    async fn count(&self) -> Result<usize, DocumentError>;
}
