//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod document_service;
pub mod remote_handlers;
pub mod run_workflow;
