//! Record of the decision-graph nodes a run traversed

use serde::{Deserialize, Serialize};

/// Entry node of every workflow
pub const DECIDE_NODE: &str = "decide";
/// Second decision node of the `tiered` variant
pub const AI_ROUTER_NODE: &str = "ai_router";

/// Ordered path through the decision graph for one run.
///
/// Always starts at [`DECIDE_NODE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTrace {
    nodes: Vec<String>,
}

impl WorkflowTrace {
    pub fn new() -> Self {
        Self {
            nodes: vec![DECIDE_NODE.to_string()],
        }
    }

    pub fn visit(&mut self, node: impl Into<String>) {
        self.nodes.push(node.into());
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.iter().any(|n| n == node)
    }

    /// True if `from` was immediately followed by `to`
    pub fn traversed(&self, from: &str, to: &str) -> bool {
        self.nodes.windows(2).any(|w| w[0] == from && w[1] == to)
    }

    /// Last node visited (the leaf once the run has finished)
    pub fn last(&self) -> &str {
        self.nodes.last().map(String::as_str).unwrap_or(DECIDE_NODE)
    }
}

impl Default for WorkflowTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WorkflowTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}
