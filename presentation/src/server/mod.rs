//! HTTP document service: upload, entity extraction and knowledge-graph dumps.

mod dto;
mod handlers;
mod routes;

pub use dto::{ApiError, ErrorBody, UploadResponse};
pub use routes::router;

use route_application::DocumentService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(addr: &str, service: Arc<DocumentService>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Document service listening on {}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down document service");
        })
        .await
}
