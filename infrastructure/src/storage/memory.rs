//! Process-local document store. Contents are lost on restart.

use async_trait::async_trait;
use route_application::ports::DocumentError;
use route_application::ports::document_repository::DocumentRepository;
use route_domain::{Document, DocumentId};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<DocumentId, Document>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn save(&self, document: Document) -> Result<(), DocumentError> {
        self.documents.write().await.insert(document.id, document);
        Ok(())
    }

    async fn find(&self, id: &DocumentId) -> Result<Option<Document>, DocumentError> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn count(&self) -> Result<usize, DocumentError> {
        Ok(self.documents.read().await.len())
    }
}
