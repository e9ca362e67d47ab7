//! HTTP client for the remote matching service.
//!
//! The wire shape is a single multipart POST: `resume` (binary PDF) plus
//! `job_desc` (UTF-8 text), answered with JSON
//! `{ match_percent, found, missing }`.

use crate::config::ClientConfig;
use crate::types::{MatchResult, ResumeUpload, PDF_MIME};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{error, info, trace};

const MATCH_ENDPOINT: &str = "/match";

/// Seam between the orchestrator and the wire, so workflow logic can run
/// against an in-memory fake in tests.
#[async_trait]
pub trait MatchBackend: Send + Sync {
    async fn match_resume(&self, resume: &ResumeUpload, job_desc: &str) -> Result<MatchResult>;
}

pub struct MatchClient {
    client: reqwest::Client,
    base_url: String,
}

impl MatchClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn match_url(&self) -> String {
        format!("{}{}", self.base_url, MATCH_ENDPOINT)
    }
}

#[async_trait]
impl MatchBackend for MatchClient {
    async fn match_resume(&self, resume: &ResumeUpload, job_desc: &str) -> Result<MatchResult> {
        let url = self.match_url();

        let form = Form::new()
            .part(
                "resume",
                Part::bytes(resume.bytes.clone())
                    .file_name(resume.file_name.clone())
                    .mime_str(PDF_MIME)
                    .context("Failed to create multipart")?,
            )
            .text("job_desc", job_desc.to_string());

        info!("Calling matching service: {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            let response_text = response
                .text()
                .await
                .context("Failed to read response text")?;

            let result: MatchResult = serde_json::from_str(&response_text).with_context(|| {
                format!(
                    "Failed to parse match response. Raw response: {}",
                    response_text
                )
            })?;

            Ok(result)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Matching service error response: {}", error_text);
            anyhow::bail!("Service returned error status {}: {}", status, error_text)
        }
    }
}
