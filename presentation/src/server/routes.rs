//! Route table of the document service

use super::handlers::{self, SharedService};
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/upload", post(handlers::upload))
        .route("/extract/:doc_id", post(handlers::extract))
        .route("/graph/nodes", get(handlers::graph_nodes))
        .route("/graph/edges", get(handlers::graph_edges))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
