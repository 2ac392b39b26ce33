//! Run Workflow use case.
//!
//! One run is `decide → leaf`: the variant's keyword table picks a
//! [`Route`], exactly one handler produces the result string, and the result
//! is appended to the session history. The `tiered` variant inserts a
//! second decision (`ai → ai_router → task`) before the remote handler.

use crate::config::ExecutionParams;
use crate::ports::chat_gateway::ChatGateway;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{NoProgress, WorkflowProgress};
use crate::use_cases::remote_handlers::RemoteHandler;
use route_domain::handlers::{calculate, echo_reply, lookup_fact, manage_todo};
use route_domain::routing::AI_ROUTER_NODE;
use route_domain::util::truncate_str;
use route_domain::{
    AiTask, HandlerKind, KeywordTable, Query, Route, SessionState, TodoList, Variant,
    WorkflowTrace, classify_ai_task,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowOutcome {
    /// Category picked by `decide`
    pub route: Route,
    /// Leaf that produced the result
    pub handler: HandlerKind,
    pub result: String,
    pub trace: WorkflowTrace,
    /// 1-based position of `result` in the session history
    pub ordinal: usize,
}

/// Use case for classifying and dispatching a single query.
#[derive(Clone)]
pub struct RunWorkflowUseCase {
    remote: RemoteHandler,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunWorkflowUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>, params: ExecutionParams) -> Self {
        Self {
            remote: RemoteHandler::new(gateway, params),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &ExecutionParams {
        self.remote.params()
    }

    /// The `decide` node: a pure function of the text and the variant's table.
    pub fn classify(variant: Variant, query: &Query) -> Route {
        KeywordTable::for_variant(variant).classify(query.text())
    }

    /// Execute the workflow without progress reporting.
    pub async fn execute(
        &self,
        variant: Variant,
        query: &Query,
        session: &mut SessionState,
    ) -> WorkflowOutcome {
        self.execute_with_progress(variant, query, session, &NoProgress)
            .await
    }

    /// Execute the workflow with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        variant: Variant,
        query: &Query,
        session: &mut SessionState,
        progress: &dyn WorkflowProgress,
    ) -> WorkflowOutcome {
        let route = Self::classify(variant, query);
        debug!("{} classified {:?} as {}", variant, truncate_str(query.text(), 60), route);
        progress.on_route_selected(route);

        let mut trace = WorkflowTrace::new();
        let (handler, result) = self
            .dispatch(route, query.text(), &mut session.todos, &mut trace, progress)
            .await;

        info!(variant = %variant, route = %route, handler = %handler, "Workflow finished");

        self.conversation_logger.log(ConversationEvent::workflow_run(
            variant,
            query.text(),
            route,
            handler,
            &trace,
            &result,
        ));

        let ordinal = session.record(&result, trace.clone());
        WorkflowOutcome {
            route,
            handler,
            result,
            trace,
            ordinal,
        }
    }

    /// Run the one handler that `route` names. Does not touch history.
    pub async fn dispatch(
        &self,
        route: Route,
        text: &str,
        todos: &mut TodoList,
        trace: &mut WorkflowTrace,
        progress: &dyn WorkflowProgress,
    ) -> (HandlerKind, String) {
        trace.visit(route.as_str());
        match route {
            Route::Calculator => (HandlerKind::Calculator, calculate(text)),
            Route::FactLookup => (HandlerKind::FactLookup, lookup_fact(text)),
            Route::EchoReply => (HandlerKind::EchoReply, echo_reply(text)),
            Route::Manager => (HandlerKind::Manager, manage_todo(text, todos)),
            Route::Qa => {
                let reply = self.remote.run(AiTask::Qa, text, progress).await;
                (HandlerKind::Remote(AiTask::Qa), reply)
            }
            Route::Ai => {
                trace.visit(AI_ROUTER_NODE);
                let task = classify_ai_task(text);
                trace.visit(task.as_str());
                let reply = self.remote.run(task, text, progress).await;
                (HandlerKind::Remote(task), reply)
            }
        }
    }
}
