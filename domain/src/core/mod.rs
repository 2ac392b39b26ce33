//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: a validated user query, the unit of work for one run
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod query;
