//! Upload decoder: UTF-8 text, with HTML reduced to its visible text

use super::html::html_to_text;
use route_application::ports::DocumentError;
use route_application::ports::upload_decoder::{UploadDecoder, UploadedFile};
use tracing::debug;

/// Accepts UTF-8 text files; HTML (by content type or extension) is
/// stripped of markup first. Anything else, or nothing left, is undecodable.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextDecoder;

impl PlainTextDecoder {
    fn is_html(file: &UploadedFile) -> bool {
        let by_type = file
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("text/html"));
        let by_name = file.filename.as_deref().is_some_and(|name| {
            let lower = name.to_ascii_lowercase();
            lower.ends_with(".html") || lower.ends_with(".htm")
        });
        by_type || by_name
    }
}

impl UploadDecoder for PlainTextDecoder {
    fn decode(&self, file: &UploadedFile) -> Result<String, DocumentError> {
        let text = std::str::from_utf8(&file.bytes).map_err(|e| {
            debug!("Upload {:?} is not UTF-8: {}", file.filename, e);
            DocumentError::Undecodable
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let text = if Self::is_html(file) {
            html_to_text(text)
        } else {
            text.to_string()
        };

        if text.trim().is_empty() {
            return Err(DocumentError::Undecodable);
        }
        Ok(text)
    }
}
