//! Route and handler labels

use serde::{Deserialize, Serialize};

/// Category chosen by the first decision node.
///
/// The set is closed; each variant uses a subset of it (see
/// [`Variant::routes`](super::Variant::routes)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Sandboxed arithmetic
    Calculator,
    /// Static fact table
    FactLookup,
    /// Echo the input back
    EchoReply,
    /// Per-session to-do list
    Manager,
    /// Single remote Q&A call
    Qa,
    /// Remote-model cluster, resolved by the AI sub-router
    Ai,
}

impl Route {
    /// Node identifier in the decision graph
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Calculator => "calculator",
            Route::FactLookup => "fact_lookup",
            Route::EchoReply => "echo_reply",
            Route::Manager => "manager",
            Route::Qa => "qa",
            Route::Ai => "ai",
        }
    }

    /// Whether reaching this route requires a call to the chat-completion gateway
    pub fn is_remote(&self) -> bool {
        matches!(self, Route::Qa | Route::Ai)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task chosen by the AI sub-router of the `tiered` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiTask {
    Qa,
    Conversation,
    Summary,
    Translate,
    Sentiment,
}

impl AiTask {
    pub const ALL: [AiTask; 5] = [
        AiTask::Qa,
        AiTask::Conversation,
        AiTask::Summary,
        AiTask::Translate,
        AiTask::Sentiment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AiTask::Qa => "qa",
            AiTask::Conversation => "conversation",
            AiTask::Summary => "summary",
            AiTask::Translate => "translate",
            AiTask::Sentiment => "sentiment",
        }
    }
}

impl std::fmt::Display for AiTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The leaf that actually produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "task")]
pub enum HandlerKind {
    Calculator,
    FactLookup,
    EchoReply,
    Manager,
    Remote(AiTask),
}

impl HandlerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerKind::Calculator => "calculator",
            HandlerKind::FactLookup => "fact_lookup",
            HandlerKind::EchoReply => "echo_reply",
            HandlerKind::Manager => "manager",
            HandlerKind::Remote(task) => task.as_str(),
        }
    }
}

impl std::fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
