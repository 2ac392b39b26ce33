//! Domain layer for route-assist
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! Every query runs through a tiny decision graph:
//!
//! - **decide**: a keyword classifier picks one [`Route`] from an ordered,
//!   per-[`Variant`] table (first match wins, fallback otherwise)
//! - **leaf**: exactly one handler turns the query into a result string
//!
//! The `tiered` variant adds an AI sub-router that picks an [`AiTask`].
//!
//! ## Sessions
//!
//! [`SessionState`] owns the result history and the to-do list of one
//! session. It is passed explicitly into every run.
//!
//! ## Documents
//!
//! Uploaded [`Document`]s are mined for entities and co-mentions, which are
//! recorded into a [`KnowledgeGraph`].

pub mod chat;
pub mod config;
pub mod core;
pub mod document;
pub mod handlers;
pub mod prompt;
pub mod routing;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use chat::{ChatRequest, Message, Model, Role};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, query::Query};
pub use document::{
    AnnotatedSentence, Document, DocumentId, Entity, ExtractionResult, KnowledgeGraph, Relation,
};
pub use prompt::{ChatProfile, PromptTemplate};
pub use routing::{
    AiTask, FlowGraph, HandlerKind, KeywordTable, Route, Variant, WorkflowTrace, classify_ai_task,
};
pub use session::{History, HistoryEntry, SessionState, TodoList};
