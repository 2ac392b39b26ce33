//! Document service use case.
//!
//! Upload stores decoded text under a fresh id. Extract annotates a stored
//! document, derives co-mention relations and records everything into the
//! shared knowledge graph. Re-extracting a document records its edges again
//! (the graph is a multigraph).

use crate::ports::DocumentError;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::document_repository::DocumentRepository;
use crate::ports::entity_extractor::EntityExtractor;
use crate::ports::upload_decoder::{UploadDecoder, UploadedFile};
use route_domain::document::{EdgeAttributes, NodeAttributes};
use route_domain::{Document, DocumentId, ExtractionResult, KnowledgeGraph};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

const UNTITLED: &str = "untitled";

/// Upload, extraction and graph queries over one shared graph
pub struct DocumentService {
    repository: Arc<dyn DocumentRepository>,
    extractor: Arc<dyn EntityExtractor>,
    decoder: Arc<dyn UploadDecoder>,
    graph: RwLock<KnowledgeGraph>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DocumentService {
    pub fn new(
        repository: Arc<dyn DocumentRepository>,
        extractor: Arc<dyn EntityExtractor>,
        decoder: Arc<dyn UploadDecoder>,
    ) -> Self {
        Self {
            repository,
            extractor,
            decoder,
            graph: RwLock::new(KnowledgeGraph::new()),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Decode and store an uploaded file.
    ///
    /// A blank `title` falls back to the file name.
    pub async fn upload(&self, title: &str, file: UploadedFile) -> Result<Document, DocumentError> {
        let text = self.decoder.decode(&file)?;
        let title = resolve_title(title, file.filename.as_deref());
        let document = Document::new(title, text).map_err(|_| DocumentError::Undecodable)?;

        info!(
            "Stored document {} ({:?}, {} chars)",
            document.id,
            document.title,
            document.text.chars().count()
        );
        self.repository.save(document.clone()).await?;
        Ok(document)
    }

    /// Extract entities and relations from a stored document and record
    /// them into the graph. Malformed and unknown ids are both "not found".
    pub async fn extract(&self, doc_id: &str) -> Result<ExtractionResult, DocumentError> {
        let id: DocumentId = doc_id
            .parse()
            .map_err(|_| DocumentError::NotFound(doc_id.to_string()))?;
        let document = self
            .repository
            .find(&id)
            .await?
            .ok_or_else(|| DocumentError::NotFound(doc_id.to_string()))?;

        let sentences = self.extractor.annotate(&document.text);
        let extraction = ExtractionResult::from_sentences(&sentences);

        {
            let mut graph = self.graph.write().await;
            graph.record_extraction(id, &extraction);
            info!(
                "Extracted {} entities, {} relations from {} (graph: {} nodes, {} edges)",
                extraction.entities.len(),
                extraction.relations.len(),
                id,
                graph.node_count(),
                graph.edge_count()
            );
        }

        self.conversation_logger.log(ConversationEvent::new(
            "document_extracted",
            json!({
                "doc_id": id.to_string(),
                "entities": extraction.entities.len(),
                "relations": extraction.relations.len(),
            }),
        ));

        Ok(extraction)
    }

    /// Every graph node as `(id, attributes)`, in insertion order
    pub async fn graph_nodes(&self) -> Vec<(String, NodeAttributes)> {
        let graph = self.graph.read().await;
        graph
            .nodes()
            .iter()
            .map(|n| (n.id.clone(), n.attributes.clone()))
            .collect()
    }

    /// Every graph edge as `(source, target, attributes)`, parallel edges included
    pub async fn graph_edges(&self) -> Vec<(String, String, EdgeAttributes)> {
        let graph = self.graph.read().await;
        graph
            .edges()
            .iter()
            .map(|e| (e.source.clone(), e.target.clone(), e.attributes.clone()))
            .collect()
    }

    pub async fn document_count(&self) -> Result<usize, DocumentError> {
        self.repository.count().await
    }
}

fn resolve_title(title: &str, filename: Option<&str>) -> String {
    let title = title.trim();
    if !title.is_empty() {
        return title.to_string();
    }
    filename
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}
