//! Canned-reply gateway used when no API key is available

use async_trait::async_trait;
use route_application::ports::chat_gateway::{ChatGateway, GatewayError};
use route_domain::ChatRequest;

/// Answers locally with a handful of canned replies. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGateway;

impl OfflineGateway {
    pub fn reply_to(message: &str) -> String {
        let lowered = message.to_lowercase();
        if lowered.contains("hello") {
            "Hi there! How can I help you?".to_string()
        } else if lowered.contains("bye") {
            "Goodbye! Have a great day!".to_string()
        } else {
            format!("I received your message: '{}'", message)
        }
    }
}

#[async_trait]
impl ChatGateway for OfflineGateway {
    fn provider(&self) -> &str {
        "offline"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, GatewayError> {
        Ok(Self::reply_to(request.prompt()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_domain::{AiTask, Model, PromptTemplate};

    #[test]
    fn test_canned_replies() {
        assert_eq!(OfflineGateway::reply_to("Hello!"), "Hi there! How can I help you?");
        assert_eq!(OfflineGateway::reply_to("ok BYE"), "Goodbye! Have a great day!");
        assert_eq!(
            OfflineGateway::reply_to("what is love"),
            "I received your message: 'what is love'"
        );
    }

    #[tokio::test]
    async fn test_complete_sees_prefixed_prompt() {
        let request = PromptTemplate::profile(AiTask::Translate).request(Model::default(), "hola");
        let reply = OfflineGateway.complete(&request).await.unwrap();
        assert_eq!(
            reply,
            "I received your message: 'Translate this to English:\nhola'"
        );
    }
}
