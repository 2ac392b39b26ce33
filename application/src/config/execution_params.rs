//! Execution parameters: per-run settings for the workflow use case.
//!
//! These are application-layer concerns (which model to call and how long
//! to wait for it), not domain policy.

use route_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings shared by every remote-model handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Model sent with every chat request.
    pub model: Model,
    /// Upper bound on one chat-completion round trip.
    pub request_timeout: Duration,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ExecutionParams::default();
        assert_eq!(params.model, Model::default());
        assert_eq!(params.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_chain() {
        let params = ExecutionParams::default()
            .with_model(Model::new("gpt-4o-mini"))
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(params.model.as_str(), "gpt-4o-mini");
        assert_eq!(params.request_timeout, Duration::from_secs(5));
    }
}
