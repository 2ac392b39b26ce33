//! Request routing: the decision graph every assistant variant runs.
//!
//! A run is exactly one classify transition (`decide`) followed by one
//! handler transition. The `tiered` variant inserts a second decision
//! (`ai_router`) before its remote-model leaves.

pub mod classifier;
pub mod flow_graph;
pub mod route;
pub mod trace;
pub mod variant;

pub use classifier::{KeywordRule, KeywordTable, classify_ai_task};
pub use flow_graph::{FlowEdge, FlowGraph, FlowNode};
pub use route::{AiTask, HandlerKind, Route};
pub use trace::{AI_ROUTER_NODE, DECIDE_NODE, WorkflowTrace};
pub use variant::Variant;
