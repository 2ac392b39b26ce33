//! Port for structured conversation logging.
//!
//! Where `tracing` carries diagnostics, this port records each finished
//! workflow run (query, route, handler, result) as one machine-readable
//! record, typically a JSONL line.

use route_domain::{HandlerKind, Route, Variant, WorkflowTrace};
use serde_json::{Value, json};

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "workflow_run", "document_extracted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// One classify-and-dispatch cycle
    pub fn workflow_run(
        variant: Variant,
        query: &str,
        route: Route,
        handler: HandlerKind,
        trace: &WorkflowTrace,
        result: &str,
    ) -> Self {
        Self::new(
            "workflow_run",
            json!({
                "variant": variant.as_str(),
                "query": query,
                "route": route.as_str(),
                "handler": handler.as_str(),
                "path": trace.nodes(),
                "result": result,
            }),
        )
    }
}

/// Sink for conversation events.
///
/// `log` is synchronous and infallible; sinks swallow their own I/O errors
/// so a broken log never fails a run.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_run_payload() {
        let mut trace = WorkflowTrace::new();
        trace.visit("calculator");
        let event = ConversationEvent::workflow_run(
            Variant::Basic,
            "calculate 2*3",
            Route::Calculator,
            HandlerKind::Calculator,
            &trace,
            "🧮 Result: 6",
        );

        assert_eq!(event.event_type, "workflow_run");
        assert_eq!(event.payload["route"], "calculator");
        assert_eq!(event.payload["path"], json!(["decide", "calculator"]));
        assert_eq!(event.payload["variant"], "basic");
    }
}
