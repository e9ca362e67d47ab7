// src/error.rs
use thiserror::Error;

/// Everything that can stop an analysis submission, from synchronous input
/// validation through the remote call. Each variant carries the message shown
/// to the user; validation variants never reach the network layer.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("no resume uploaded")]
    MissingResume,

    #[error("job requirements are empty")]
    EmptyRequirements,

    #[error("selected file is not a PDF: {0}")]
    NotPdf(String),

    #[error("a submission is already in flight")]
    AlreadyRunning,

    #[error("backend request failed: {0}")]
    Backend(String),
}

impl WorkflowError {
    /// The toast text for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingResume => "Please upload a resume first",
            Self::EmptyRequirements => "Please enter job requirements",
            Self::NotPdf(_) => "Please select a PDF file",
            Self::AlreadyRunning => "Analysis already in progress",
            Self::Backend(_) => "Backend connection error. Make sure the server is running.",
        }
    }
}
