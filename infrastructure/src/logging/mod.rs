//! Conversation logging adapters.
//!
//! [`JsonlConversationLogger`] appends every
//! [`ConversationEvent`](route_application::ConversationEvent) to a JSONL file.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
