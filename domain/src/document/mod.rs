//! Uploaded documents, extracted entities and the knowledge graph they feed.

pub mod entities;
pub mod extraction;
pub mod graph;

pub use entities::{Document, DocumentId};
pub use extraction::{AnnotatedSentence, Entity, ExtractionResult, Relation, CO_MENTION};
pub use graph::{
    EdgeAttributes, GraphEdge, GraphNode, KnowledgeGraph, MENTIONED_IN, NodeAttributes, Provenance,
};
