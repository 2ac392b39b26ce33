//! Entity Extractor port
//!
//! Named-entity recognition is an external concern; the application only
//! needs sentences annotated with the entities they contain.

use route_domain::AnnotatedSentence;

/// Splits text into sentences and finds named entities in each.
pub trait EntityExtractor: Send + Sync {
    /// Sentences in document order. Entity offsets are character offsets
    /// into the whole `text`.
    fn annotate(&self, text: &str) -> Vec<AnnotatedSentence>;
}
