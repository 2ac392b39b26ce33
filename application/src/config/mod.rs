//! Application-level configuration.
//!
//! - [`ExecutionParams`]: model and timeout used by the remote handlers

pub mod execution_params;

pub use execution_params::ExecutionParams;
