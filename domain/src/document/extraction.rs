//! Named entities and co-mention relations

use serde::{Deserialize, Serialize};

/// Predicate of the naive adjacent-entity relation
pub const CO_MENTION: &str = "co-mention";

/// A named-entity span. Offsets count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub start_char: usize,
    pub end_char: usize,
}

impl Entity {
    pub fn new(
        text: impl Into<String>,
        label: impl Into<String>,
        start_char: usize,
        end_char: usize,
    ) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            start_char,
            end_char,
        }
    }

    /// Graph node id for this entity
    pub fn node_id(&self) -> String {
        entity_node_id(&self.text)
    }
}

pub(crate) fn entity_node_id(text: &str) -> String {
    format!("ent:{}", text)
}

/// Two entities mentioned next to each other in one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub subject: String,
    pub subject_type: String,
    pub predicate: String,
    pub object: String,
    pub object_type: String,
    pub sentence: String,
}

/// One sentence with the entities found inside it, as produced by an
/// entity extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSentence {
    pub text: String,
    pub entities: Vec<Entity>,
}

/// Entities in document order plus adjacent-pair relations per sentence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub entities: Vec<Entity>,
    pub relations: Vec<Relation>,
}

impl ExtractionResult {
    /// Flatten entities and link each entity to the next one in the same
    /// sentence. Sentences with fewer than two entities add no relation.
    pub fn from_sentences(sentences: &[AnnotatedSentence]) -> Self {
        let mut entities = Vec::new();
        let mut relations = Vec::new();

        for sentence in sentences {
            entities.extend(sentence.entities.iter().cloned());
            for pair in sentence.entities.windows(2) {
                let (subj, obj) = (&pair[0], &pair[1]);
                relations.push(Relation {
                    subject: subj.text.clone(),
                    subject_type: subj.label.clone(),
                    predicate: CO_MENTION.to_string(),
                    object: obj.text.clone(),
                    object_type: obj.label.clone(),
                    sentence: sentence.text.clone(),
                });
            }
        }

        Self {
            entities,
            relations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, entities: Vec<Entity>) -> AnnotatedSentence {
        AnnotatedSentence {
            text: text.to_string(),
            entities,
        }
    }

    #[test]
    fn test_adjacent_pairs_only() {
        let s = sentence(
            "Ada met Charles in London.",
            vec![
                Entity::new("Ada", "PERSON", 0, 3),
                Entity::new("Charles", "PERSON", 8, 15),
                Entity::new("London", "GPE", 19, 25),
            ],
        );
        let result = ExtractionResult::from_sentences(&[s]);

        assert_eq!(result.entities.len(), 3);
        assert_eq!(result.relations.len(), 2);
        assert_eq!(result.relations[0].subject, "Ada");
        assert_eq!(result.relations[0].object, "Charles");
        assert_eq!(result.relations[1].subject, "Charles");
        assert_eq!(result.relations[1].object, "London");
        assert_eq!(result.relations[1].object_type, "GPE");
        assert!(result.relations.iter().all(|r| r.predicate == CO_MENTION));
    }

    #[test]
    fn test_no_relations_across_sentences() {
        let result = ExtractionResult::from_sentences(&[
            sentence("Ada wrote.", vec![Entity::new("Ada", "PERSON", 0, 3)]),
            sentence("Paris is big.", vec![Entity::new("Paris", "GPE", 11, 16)]),
        ]);
        assert_eq!(result.entities.len(), 2);
        assert!(result.relations.is_empty());
    }

    #[test]
    fn test_entity_node_id() {
        assert_eq!(Entity::new("Paris", "GPE", 0, 5).node_id(), "ent:Paris");
    }
}
