//! Prompt construction for the remote-model handlers.

pub mod template;

pub use template::{ChatProfile, PromptTemplate};
