//! Text processing adapters for the document service: upload decoding and
//! named-entity extraction.

mod decoder;
mod html;
mod rule_based;

pub use decoder::PlainTextDecoder;
pub use html::html_to_text;
pub use rule_based::{CARDINAL, DATE, GPE, ORG, PERSON, RuleBasedEntityExtractor};
