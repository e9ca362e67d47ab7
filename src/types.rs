// src/types.rs
use serde::{Deserialize, Serialize};

/// The only media type the résumé slot accepts.
pub const PDF_MIME: &str = "application/pdf";

/// A résumé selected by the user: raw bytes plus the metadata the picker
/// reported for them.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Accepts only a declared type of exactly `application/pdf`.
    pub fn is_pdf(&self) -> bool {
        self.content_type == PDF_MIME
    }
}

/// Parsed body of a successful `/match` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_percent: f64,
    pub found: Vec<String>,
    pub missing: Vec<String>,
}
