//! OpenAI-compatible chat-completion gateway
//!
//! Works against any `/chat/completions` endpoint that speaks the OpenAI
//! wire format, including the Hugging Face router.

use async_trait::async_trait;
use reqwest::StatusCode;
use route_application::ports::chat_gateway::{ChatGateway, GatewayError};
use route_domain::ChatRequest;
use route_domain::util::truncate_str;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat gateway speaking the OpenAI `chat/completions` protocol over HTTPS
pub struct OpenAiCompatibleGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl OpenAiCompatibleGateway {
    /// `base_url` is the API root, e.g. `https://router.huggingface.co/v1`.
    pub fn new(
        base_url: &str,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        info!("OpenAiCompatibleGateway initialized for {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_key,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(self.timeout.as_secs())
        } else if e.is_connect() {
            GatewayError::ConnectionError(e.to_string())
        } else {
            GatewayError::RequestFailed(e.to_string())
        }
    }
}

fn map_status(status: StatusCode, body: &str, model: &str) -> GatewayError {
    let detail = format!("{} {}", status.as_u16(), truncate_str(body.trim(), 200));
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::AuthenticationFailed(detail)
        }
        StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(model.to_string()),
        _ => GatewayError::RequestFailed(detail),
    }
}

#[async_trait]
impl ChatGateway for OpenAiCompatibleGateway {
    fn provider(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<String, GatewayError> {
        debug!(
            "POST {} model={} max_tokens={}",
            self.endpoint, request.model, request.max_tokens
        );

        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, &body, request.model.as_str()));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Invalid response body: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(GatewayError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::HeaderMap;
    use axum::routing::post;
    use axum::{Json, Router};
    use route_domain::{AiTask, Model, PromptTemplate};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Seen {
        body: Arc<Mutex<Option<Value>>>,
        auth: Arc<Mutex<Option<String>>>,
    }

    async fn spawn_server(reply: Value, status: StatusCode) -> (String, Seen) {
        let seen = Seen::default();
        let app = Router::new()
            .route(
                "/v1/chat/completions",
                post(
                    move |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            *seen.body.lock().unwrap() = Some(body);
                            *seen.auth.lock().unwrap() = headers
                                .get("authorization")
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(seen.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/v1", addr), seen)
    }

    fn request() -> ChatRequest {
        PromptTemplate::profile(AiTask::Sentiment).request(Model::new("test-model"), "I love it")
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let (base, seen) = spawn_server(
            json!({"choices": [{"message": {"role": "assistant", "content": " positive \n"}}]}),
            StatusCode::OK,
        )
        .await;
        let gateway = OpenAiCompatibleGateway::new(
            &base,
            Some(SecretString::new("hf_test".to_string())),
            Duration::from_secs(5),
        )
        .unwrap();

        let reply = gateway.complete(&request()).await.unwrap();
        assert_eq!(reply, "positive");

        let body = seen.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["max_tokens"], 60);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(
            seen.auth.lock().unwrap().as_deref(),
            Some("Bearer hf_test")
        );
    }

    #[tokio::test]
    async fn test_empty_choices_is_error() {
        let (base, _) = spawn_server(json!({"choices": []}), StatusCode::OK).await;
        let gateway = OpenAiCompatibleGateway::new(&base, None, Duration::from_secs(5)).unwrap();
        assert_eq!(
            gateway.complete(&request()).await,
            Err(GatewayError::EmptyResponse)
        );
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_auth_error() {
        let (base, seen) =
            spawn_server(json!({"error": "bad token"}), StatusCode::UNAUTHORIZED).await;
        let gateway = OpenAiCompatibleGateway::new(&base, None, Duration::from_secs(5)).unwrap();

        let err = gateway.complete(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::AuthenticationFailed(_)));
        assert!(seen.auth.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = OpenAiCompatibleGateway::new(
            &format!("http://{}/v1", addr),
            None,
            Duration::from_secs(5),
        )
        .unwrap();
        let err = gateway.complete(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = OpenAiCompatibleGateway::new(
            "https://router.huggingface.co/v1/",
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            gateway.endpoint(),
            "https://router.huggingface.co/v1/chat/completions"
        );
    }
}
