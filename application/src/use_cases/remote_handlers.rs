//! Remote-model handlers.
//!
//! Every AI task shares one code path: build the task's single-turn prompt,
//! call the chat gateway under the configured timeout, and fold any failure
//! into the fixed error template. Nothing here ever returns an error.

use crate::config::ExecutionParams;
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use crate::ports::progress::WorkflowProgress;
use route_domain::util::truncate_str;
use route_domain::{AiTask, ChatRequest, PromptTemplate};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs AI tasks against the chat gateway
#[derive(Clone)]
pub struct RemoteHandler {
    gateway: Arc<dyn ChatGateway>,
    params: ExecutionParams,
}

impl RemoteHandler {
    pub fn new(gateway: Arc<dyn ChatGateway>, params: ExecutionParams) -> Self {
        Self { gateway, params }
    }

    pub fn params(&self) -> &ExecutionParams {
        &self.params
    }

    /// Run `task` on `text`; failures come back as the error template.
    pub async fn run(&self, task: AiTask, text: &str, progress: &dyn WorkflowProgress) -> String {
        let request = PromptTemplate::profile(task).request(self.params.model.clone(), text);

        progress.on_remote_start(task);
        let outcome = self.call(&request).await;
        progress.on_remote_end(task, outcome.is_ok());

        match outcome {
            Ok(reply) => {
                debug!(
                    "{} via {}: {}",
                    task,
                    self.gateway.provider(),
                    truncate_str(&reply, 80)
                );
                reply
            }
            Err(e) => {
                warn!("{} via {} failed: {}", task, self.gateway.provider(), e);
                PromptTemplate::remote_error(&e.to_string())
            }
        }
    }

    async fn call(&self, request: &ChatRequest) -> Result<String, GatewayError> {
        let limit = self.params.request_timeout;
        let reply = tokio::time::timeout(limit, self.gateway.complete(request))
            .await
            .map_err(|_| GatewayError::Timeout(limit.as_secs()))??;

        if reply.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    struct RecordingGateway {
        reply: String,
        last: Mutex<Option<ChatRequest>>,
    }

    #[async_trait]
    impl ChatGateway for RecordingGateway {
        fn provider(&self) -> &str {
            "recording"
        }

        async fn complete(&self, request: &ChatRequest) -> Result<String, GatewayError> {
            *self.last.lock().unwrap() = Some(request.clone());
            Ok(self.reply.clone())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl ChatGateway for FailingGateway {
        fn provider(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _request: &ChatRequest) -> Result<String, GatewayError> {
            Err(GatewayError::ConnectionError("connection refused".to_string()))
        }
    }

    struct HangingGateway;

    #[async_trait]
    impl ChatGateway for HangingGateway {
        fn provider(&self) -> &str {
            "hanging"
        }

        async fn complete(&self, _request: &ChatRequest) -> Result<String, GatewayError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    fn recording(reply: &str) -> Arc<RecordingGateway> {
        Arc::new(RecordingGateway {
            reply: reply.to_string(),
            last: Mutex::new(None),
        })
    }

    #[tokio::test]
    async fn test_summary_sends_prefixed_prompt() {
        let gateway = recording("short version");
        let handler = RemoteHandler::new(gateway.clone(), ExecutionParams::default());

        let reply = handler.run(AiTask::Summary, "long text", &NoProgress).await;
        assert_eq!(reply, "short version");

        let sent = gateway.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.prompt(), "Summarize this:\nlong text");
        assert_eq!(sent.temperature, 0.3);
        assert_eq!(sent.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_becomes_error_template() {
        let handler = RemoteHandler::new(Arc::new(FailingGateway), ExecutionParams::default());
        for task in AiTask::ALL {
            let reply = handler.run(task, "anything", &NoProgress).await;
            assert_eq!(
                reply,
                "❌ Chatbot error: Connection error: connection refused"
            );
        }
    }

    #[tokio::test]
    async fn test_empty_reply_is_an_error() {
        let handler = RemoteHandler::new(recording("   "), ExecutionParams::default());
        let reply = handler.run(AiTask::Qa, "who is ada", &NoProgress).await;
        assert_eq!(reply, "❌ Chatbot error: Empty response from model");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_gateway_times_out() {
        let params = ExecutionParams::default().with_request_timeout(Duration::from_secs(2));
        let handler = RemoteHandler::new(Arc::new(HangingGateway), params);
        let reply = handler.run(AiTask::Conversation, "hello", &NoProgress).await;
        assert_eq!(reply, "❌ Chatbot error: Request timed out after 2s");
    }
}
