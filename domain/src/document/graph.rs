//! In-memory directed multigraph of entities and documents.
//!
//! Node ids are `ent:<text>` for entities and `doc:<id>` for documents.
//! Parallel edges between the same pair are kept; nothing is ever merged.

use super::entities::DocumentId;
use super::extraction::{ExtractionResult, entity_node_id};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Relation stored on entity → document edges
pub const MENTIONED_IN: &str = "MENTIONED_IN";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub doc_id: DocumentId,
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAttributes {
    pub relation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub attributes: NodeAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub attributes: EdgeAttributes,
}

/// Insertion-ordered directed multigraph
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
    edges: Vec<GraphEdge>,
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Insert a node unless one with the same id exists; the first
    /// writer's attributes are kept.
    pub fn add_node(&mut self, id: impl Into<String>, attributes: NodeAttributes) {
        let id = id.into();
        if self.index.contains_key(&id) {
            return;
        }
        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(GraphNode { id, attributes });
    }

    /// Append an edge. Missing endpoints are created without attributes.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        attributes: EdgeAttributes,
    ) {
        let source = source.into();
        let target = target.into();
        self.add_node(source.clone(), NodeAttributes::default());
        self.add_node(target.clone(), NodeAttributes::default());
        self.edges.push(GraphEdge {
            source,
            target,
            attributes,
        });
    }

    /// Record one document's extraction: a `MENTIONED_IN` edge per entity
    /// occurrence and a co-mention edge per relation.
    pub fn record_extraction(&mut self, doc_id: DocumentId, extraction: &ExtractionResult) {
        let doc_node = format!("doc:{}", doc_id);

        for entity in &extraction.entities {
            self.add_node(entity.node_id(), entity_attributes(&entity.label, &entity.text));
            self.add_edge(
                entity.node_id(),
                doc_node.clone(),
                EdgeAttributes {
                    relation: MENTIONED_IN.to_string(),
                    provenance: None,
                },
            );
        }

        for relation in &extraction.relations {
            let subject = entity_node_id(&relation.subject);
            let object = entity_node_id(&relation.object);
            self.add_node(
                subject.clone(),
                entity_attributes(&relation.subject_type, &relation.subject),
            );
            self.add_node(
                object.clone(),
                entity_attributes(&relation.object_type, &relation.object),
            );
            self.add_edge(
                subject,
                object,
                EdgeAttributes {
                    relation: relation.predicate.clone(),
                    provenance: Some(Provenance {
                        doc_id,
                        sentence: relation.sentence.clone(),
                    }),
                },
            );
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `(id, attributes)` pairs, serializing as `[id, {...}]`
    pub fn node_tuples(&self) -> Vec<(&str, &NodeAttributes)> {
        self.nodes
            .iter()
            .map(|n| (n.id.as_str(), &n.attributes))
            .collect()
    }

    /// `(source, target, attributes)` triples, serializing as `[s, t, {...}]`
    pub fn edge_tuples(&self) -> Vec<(&str, &str, &EdgeAttributes)> {
        self.edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str(), &e.attributes))
            .collect()
    }
}

fn entity_attributes(label: &str, text: &str) -> NodeAttributes {
    NodeAttributes {
        label: Some(label.to_string()),
        text: Some(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::extraction::{AnnotatedSentence, Entity};

    fn extraction() -> ExtractionResult {
        ExtractionResult::from_sentences(&[AnnotatedSentence {
            text: "Ada met Charles.".to_string(),
            entities: vec![
                Entity::new("Ada", "PERSON", 0, 3),
                Entity::new("Charles", "PERSON", 8, 15),
            ],
        }])
    }

    #[test]
    fn test_record_extraction_builds_nodes_and_edges() {
        let mut graph = KnowledgeGraph::new();
        let doc = DocumentId::new();
        graph.record_extraction(doc, &extraction());

        // ent:Ada, doc:<id>, ent:Charles
        assert_eq!(graph.node_count(), 3);
        // 2 MENTIONED_IN + 1 co-mention
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_node(&format!("doc:{}", doc)));

        let co = &graph.edges()[2];
        assert_eq!(co.source, "ent:Ada");
        assert_eq!(co.target, "ent:Charles");
        assert_eq!(co.attributes.relation, "co-mention");
        assert_eq!(
            co.attributes.provenance.as_ref().map(|p| p.sentence.as_str()),
            Some("Ada met Charles.")
        );
    }

    #[test]
    fn test_multi_edges_are_preserved() {
        let mut graph = KnowledgeGraph::new();
        let doc = DocumentId::new();
        graph.record_extraction(doc, &extraction());
        graph.record_extraction(doc, &extraction());
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_first_writer_keeps_attributes() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node("ent:Apple", entity_attributes("ORG", "Apple"));
        graph.add_node("ent:Apple", entity_attributes("PERSON", "Apple"));
        assert_eq!(
            graph.node("ent:Apple").and_then(|n| n.attributes.label.as_deref()),
            Some("ORG")
        );
    }

    #[test]
    fn test_document_node_has_no_attributes() {
        let mut graph = KnowledgeGraph::new();
        let doc = DocumentId::new();
        graph.record_extraction(doc, &extraction());

        let json = serde_json::to_value(graph.node_tuples()).unwrap();
        assert_eq!(json[0][0], "ent:Ada");
        assert_eq!(json[0][1]["label"], "PERSON");
        assert_eq!(json[1][1], serde_json::json!({}));
    }

    #[test]
    fn test_edge_tuples_serialize_as_triples() {
        let mut graph = KnowledgeGraph::new();
        graph.record_extraction(DocumentId::new(), &extraction());
        let json = serde_json::to_value(graph.edge_tuples()).unwrap();
        assert_eq!(json[0][0], "ent:Ada");
        assert_eq!(json[0][2]["relation"], "MENTIONED_IN");
        assert!(json[0][2].get("provenance").is_none());
    }
}
