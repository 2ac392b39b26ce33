//! Upload decoding port

use super::DocumentError;

/// Raw file received by the upload endpoint
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

/// Turns uploaded bytes into plain text.
pub trait UploadDecoder: Send + Sync {
    /// Fails with [`DocumentError::Undecodable`] when no usable text comes out.
    fn decode(&self, file: &UploadedFile) -> Result<String, DocumentError>;
}
