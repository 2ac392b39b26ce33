//! End-to-end runs through the wired layers with the offline gateway.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use route_application::{ChatGateway, DocumentService, ExecutionParams, RunWorkflowUseCase};
use route_domain::{AiTask, HandlerKind, Query, Route, SessionState, Variant};
use route_infrastructure::{
    ConfigLoader, InMemoryDocumentRepository, OfflineGateway, PlainTextDecoder,
    RuleBasedEntityExtractor, build_chat_gateway,
};
use std::sync::Arc;
use tower::ServiceExt;

fn offline_use_case() -> RunWorkflowUseCase {
    RunWorkflowUseCase::new(Arc::new(OfflineGateway), ExecutionParams::default())
}

async fn ask(
    use_case: &RunWorkflowUseCase,
    variant: Variant,
    session: &mut SessionState,
    text: &str,
) -> (Route, HandlerKind, String) {
    let query = Query::try_new(text).unwrap();
    let outcome = use_case.execute(variant, &query, session).await;
    (outcome.route, outcome.handler, outcome.result)
}

#[tokio::test]
async fn basic_variant_uses_local_handlers_only() {
    let use_case = offline_use_case();
    let mut session = SessionState::new();

    let (route, _, result) = ask(&use_case, Variant::Basic, &mut session, "calculate 25 * 4").await;
    assert_eq!(route, Route::Calculator);
    assert_eq!(result, "🧮 Result: 100");

    let (route, _, result) = ask(&use_case, Variant::Basic, &mut session, "who is elon musk").await;
    assert_eq!(route, Route::FactLookup);
    assert_eq!(result, "📚 Elon Musk is the CEO of Tesla and SpaceX.");

    let (route, _, result) = ask(&use_case, Variant::Basic, &mut session, "hello there").await;
    assert_eq!(route, Route::EchoReply);
    assert_eq!(result, "🗣️ You said: 'hello there'");

    assert_eq!(session.history().len(), 3);
}

#[tokio::test]
async fn chatbot_questions_reach_the_gateway() {
    let use_case = offline_use_case();
    let mut session = SessionState::new();

    let (route, handler, result) =
        ask(&use_case, Variant::Chatbot, &mut session, "what is love").await;
    assert_eq!(route, Route::Qa);
    assert_eq!(handler, HandlerKind::Remote(AiTask::Qa));
    assert!(result.starts_with("I received your message:"));
    assert!(result.contains("what is love"));
}

#[tokio::test]
async fn organizer_keeps_todos_per_session() {
    let use_case = offline_use_case();
    let mut first = SessionState::new();
    let mut second = SessionState::new();

    ask(&use_case, Variant::Organizer, &mut first, "todo add buy milk").await;
    let (route, _, shown) = ask(&use_case, Variant::Organizer, &mut first, "todo show").await;
    assert_eq!(route, Route::Manager);
    assert_eq!(shown, "📝 Your tasks:\n- buy milk");

    let (_, _, other) = ask(&use_case, Variant::Organizer, &mut second, "todo show").await;
    assert_eq!(other, "📭 Your to-do list is empty.");
}

#[tokio::test]
async fn tiered_falls_through_to_conversation() {
    let use_case = offline_use_case();
    let mut session = SessionState::new();
    let query = Query::try_new("tell me a joke").unwrap();

    let outcome = use_case.execute(Variant::Tiered, &query, &mut session).await;
    assert_eq!(outcome.route, Route::Ai);
    assert_eq!(
        outcome.trace.to_string(),
        "decide -> ai -> ai_router -> conversation"
    );
    assert_eq!(
        session.last_trace().map(ToString::to_string).as_deref(),
        Some("decide -> ai -> ai_router -> conversation")
    );
}

#[tokio::test]
async fn default_config_builds_a_working_gateway() {
    let mut config = ConfigLoader::load_defaults();
    config.chat.provider = "offline".to_string();

    let gateway = build_chat_gateway(&config.chat).unwrap();
    assert_eq!(gateway.provider(), "offline");

    let use_case = RunWorkflowUseCase::new(gateway, ExecutionParams::default());
    let mut session = SessionState::new();
    let (_, _, result) = ask(&use_case, Variant::Chatbot, &mut session, "2 + 2").await;
    assert_eq!(result, "🧮 Result: 4");
}

#[tokio::test]
async fn document_service_over_http() {
    let service = DocumentService::new(
        Arc::new(InMemoryDocumentRepository::new()),
        Arc::new(RuleBasedEntityExtractor::new()),
        Arc::new(PlainTextDecoder),
    );
    let app = route_presentation::router(Arc::new(service));

    let boundary = "e2e-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"grace.txt\"\r\n\
         Content-Type: text/plain\r\n\r\nGrace Hopper joined the Navy in 1943.\r\n--{b}--\r\n",
        b = boundary
    );
    let upload = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(upload).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let uploaded: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(uploaded["title"], "grace.txt");

    let extract = Request::builder()
        .method("POST")
        .uri(format!("/extract/{}", uploaded["doc_id"].as_str().unwrap()))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(extract).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let extracted: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(extracted["entities"][0]["text"], "Grace Hopper");

    let nodes = Request::builder()
        .uri("/graph/nodes")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(nodes).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let nodes: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(nodes[0][0], "ent:Grace Hopper");
}
