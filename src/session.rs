// src/session.rs
use crate::error::WorkflowError;
use crate::toast::ToastNotifier;
use crate::types::ResumeUpload;
use tracing::{info, warn};

/// The two mutually exclusive ways of capturing job requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequirementMode {
    #[default]
    Description,
    Keyword,
}

/// In-memory capture of everything the user has entered for an analysis run.
///
/// Switching mode keeps the other mode's fields; a successful analysis does
/// not clear anything, so the same inputs can be resubmitted. Only `reset`
/// empties the session.
#[derive(Clone)]
pub struct InputSession {
    mode: RequirementMode,
    job_description: String,
    target_role: String,
    required_skills: String,
    resume: Option<ResumeUpload>,
    toasts: ToastNotifier,
}

impl InputSession {
    pub fn new(toasts: ToastNotifier) -> Self {
        Self {
            mode: RequirementMode::default(),
            job_description: String::new(),
            target_role: String::new(),
            required_skills: String::new(),
            resume: None,
            toasts,
        }
    }

    pub fn mode(&self) -> RequirementMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RequirementMode) {
        self.mode = mode;
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn set_target_role(&mut self, text: impl Into<String>) {
        self.target_role = text.into();
    }

    pub fn set_required_skills(&mut self, text: impl Into<String>) {
        self.required_skills = text.into();
    }

    pub fn resume(&self) -> Option<&ResumeUpload> {
        self.resume.as_ref()
    }

    pub fn has_resume(&self) -> bool {
        self.resume.is_some()
    }

    /// Accept a résumé selection.
    ///
    /// Anything not declared as `application/pdf` is rejected: the slot is
    /// left as it was, an error toast is raised, and the `Err` tells the
    /// caller to reset its picker control so the invalid file is not treated
    /// as still selected.
    pub fn select_resume(&mut self, upload: ResumeUpload) -> Result<(), WorkflowError> {
        if !upload.is_pdf() {
            warn!(
                file_name = %upload.file_name,
                content_type = %upload.content_type,
                "rejected non-PDF resume selection"
            );
            let err = WorkflowError::NotPdf(upload.content_type);
            self.toasts.error(err.user_message());
            return Err(err);
        }

        info!(file_name = %upload.file_name, size = upload.bytes.len(), "resume selected");
        self.resume = Some(upload);
        self.toasts.success("Resume uploaded successfully!");
        Ok(())
    }

    /// The single requirement string derived from the active mode.
    ///
    /// Keyword mode joins the trimmed role and skills with one space no
    /// matter which parts are empty, so two blank fields still yield a lone
    /// space; the orchestrator trims again before its emptiness check.
    pub fn normalized_requirement(&self) -> String {
        match self.mode {
            RequirementMode::Description => self.job_description.trim().to_string(),
            RequirementMode::Keyword => format!(
                "{} {}",
                self.target_role.trim(),
                self.required_skills.trim()
            ),
        }
    }

    /// Clear every field, including the résumé slot.
    pub fn reset(&mut self) {
        self.mode = RequirementMode::default();
        self.job_description.clear();
        self.target_role.clear();
        self.required_skills.clear();
        self.resume = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PDF_MIME;

    fn session() -> InputSession {
        InputSession::new(ToastNotifier::new())
    }

    fn pdf() -> ResumeUpload {
        ResumeUpload::new("resume.pdf", PDF_MIME, b"%PDF-1.7".to_vec())
    }

    #[test]
    fn test_mode_switch_retains_fields() {
        let mut session = session();
        session.set_job_description("backend engineer with rust");
        session.set_mode(RequirementMode::Keyword);
        session.set_target_role("Data Engineer");
        session.set_mode(RequirementMode::Description);
        assert_eq!(
            session.normalized_requirement(),
            "backend engineer with rust"
        );
        session.set_mode(RequirementMode::Keyword);
        assert_eq!(session.normalized_requirement(), "Data Engineer ");
    }

    #[test]
    fn test_description_mode_trims() {
        let mut session = session();
        session.set_job_description("  senior rust developer \n");
        assert_eq!(session.normalized_requirement(), "senior rust developer");
    }

    #[test]
    fn test_keyword_mode_single_space_join() {
        let mut session = session();
        session.set_mode(RequirementMode::Keyword);
        session.set_target_role(" Senior Software Engineer ");
        session.set_required_skills(" Python, AWS ");
        assert_eq!(
            session.normalized_requirement(),
            "Senior Software Engineer Python, AWS"
        );
    }

    #[test]
    fn test_blank_keyword_fields_join_to_lone_space() {
        let mut session = session();
        session.set_mode(RequirementMode::Keyword);
        assert_eq!(session.normalized_requirement(), " ");
    }

    #[tokio::test]
    async fn test_non_pdf_rejected_and_slot_unchanged() {
        let toasts = ToastNotifier::new();
        let mut session = InputSession::new(toasts.clone());

        let err = session
            .select_resume(ResumeUpload::new("resume.txt", "text/plain", vec![]))
            .expect_err("non-PDF must be rejected");
        assert!(matches!(err, WorkflowError::NotPdf(_)));
        assert!(!session.has_resume());
        assert_eq!(
            toasts.current().map(|t| t.message),
            Some("Please select a PDF file".into())
        );

        // A bad pick after a good one keeps the earlier file.
        session.select_resume(pdf()).unwrap();
        let _ = session.select_resume(ResumeUpload::new("resume.txt", "text/plain", vec![]));
        assert_eq!(session.resume().map(|r| r.file_name.as_str()), Some("resume.pdf"));
    }

    #[tokio::test]
    async fn test_valid_pdf_stored_with_success_toast() {
        let toasts = ToastNotifier::new();
        let mut session = InputSession::new(toasts.clone());
        session.select_resume(pdf()).unwrap();
        assert!(session.has_resume());
        assert_eq!(
            toasts.current().map(|t| t.message),
            Some("Resume uploaded successfully!".into())
        );
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let mut session = session();
        session.set_mode(RequirementMode::Keyword);
        session.set_target_role("SRE");
        session.select_resume(pdf()).unwrap();
        session.reset();
        assert_eq!(session.mode(), RequirementMode::Description);
        assert!(!session.has_resume());
        assert_eq!(session.normalized_requirement(), "");
    }
}
