//! Axum handlers for the document service

use super::dto::{ApiError, UploadResponse};
use axum::Json;
use axum::extract::{Multipart, Path, State};
use route_application::{DocumentService, UploadedFile};
use route_domain::ExtractionResult;
use route_domain::document::{EdgeAttributes, NodeAttributes};
use std::sync::Arc;
use tracing::debug;

pub type SharedService = Arc<DocumentService>;

/// `POST /upload`: multipart `file` plus optional `title`
pub async fn upload(
    State(service): State<SharedService>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut title = String::new();
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request("invalid_multipart", e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request("invalid_multipart", e.to_string()))?;
                file = Some(UploadedFile {
                    bytes: bytes.to_vec(),
                    filename,
                    content_type,
                });
            }
            Some("title") => {
                title = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request("invalid_multipart", e.to_string()))?;
            }
            other => debug!("Ignoring multipart field {:?}", other),
        }
    }

    let file = file.ok_or_else(|| ApiError::bad_request("missing_file", "Missing 'file' field"))?;
    let document = service.upload(&title, file).await?;

    Ok(Json(UploadResponse {
        doc_id: document.id.to_string(),
        title: document.title,
    }))
}

/// `POST /extract/:doc_id`
pub async fn extract(
    State(service): State<SharedService>,
    Path(doc_id): Path<String>,
) -> Result<Json<ExtractionResult>, ApiError> {
    Ok(Json(service.extract(&doc_id).await?))
}

/// `GET /graph/nodes`: `[[id, {attrs}], ...]`
pub async fn graph_nodes(
    State(service): State<SharedService>,
) -> Json<Vec<(String, NodeAttributes)>> {
    Json(service.graph_nodes().await)
}

/// `GET /graph/edges`: `[[source, target, {attrs}], ...]`
pub async fn graph_edges(
    State(service): State<SharedService>,
) -> Json<Vec<(String, String, EdgeAttributes)>> {
    Json(service.graph_edges().await)
}

pub async fn health() -> &'static str {
    "ok"
}
