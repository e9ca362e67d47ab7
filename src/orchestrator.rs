// src/orchestrator.rs
use crate::client::MatchBackend;
use crate::error::WorkflowError;
use crate::session::InputSession;
use crate::toast::ToastNotifier;
use crate::types::MatchResult;
use crate::view::WorkflowView;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{error, info};

/// Releases the loading flag on every exit path out of `submit`.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Drives one analysis submission end to end: validates the session, clears
/// stale state, calls the backend, and routes every outcome through toasts.
pub struct AnalysisOrchestrator {
    backend: Arc<dyn MatchBackend>,
    toasts: ToastNotifier,
    loading: AtomicBool,
    result: Mutex<Option<MatchResult>>,
}

impl AnalysisOrchestrator {
    pub fn new(backend: Arc<dyn MatchBackend>, toasts: ToastNotifier) -> Self {
        Self {
            backend,
            toasts,
            loading: AtomicBool::new(false),
            result: Mutex::new(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// The last successful analysis, if one is on display.
    pub fn result(&self) -> Option<MatchResult> {
        self.result.lock().unwrap().clone()
    }

    /// Immutable snapshot for the rendering layer.
    pub fn view(&self) -> WorkflowView {
        WorkflowView::of(self.is_loading(), self.result.lock().unwrap().as_ref())
    }

    /// Run one analysis for the current session state.
    ///
    /// Preconditions are checked in order and the first failure wins, with no
    /// partial side effects: résumé present, then non-empty requirements
    /// (trimmed, so blank keyword fields are rejected too). At most one
    /// submission is in flight at a time; a second call while one is
    /// outstanding is rejected without touching any state. The previous
    /// result is cleared before the request is dispatched so it can never
    /// co-display with the loading indicator.
    pub async fn submit(&self, session: &InputSession) -> Result<(), WorkflowError> {
        let resume = match session.resume() {
            Some(resume) => resume.clone(),
            None => {
                let err = WorkflowError::MissingResume;
                self.toasts.error(err.user_message());
                return Err(err);
            }
        };

        let requirement = session.normalized_requirement();
        let job_desc = requirement.trim();
        if job_desc.is_empty() {
            let err = WorkflowError::EmptyRequirements;
            self.toasts.error(err.user_message());
            return Err(err);
        }

        if self
            .loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(WorkflowError::AlreadyRunning);
        }
        let _guard = LoadingGuard(&self.loading);

        *self.result.lock().unwrap() = None;

        info!(
            file_name = %resume.file_name,
            requirement_len = job_desc.len(),
            "submitting resume for analysis"
        );

        match self.backend.match_resume(&resume, job_desc).await {
            Ok(result) => {
                info!(match_percent = result.match_percent, "analysis completed");
                *self.result.lock().unwrap() = Some(result);
                self.toasts.success("Analysis completed successfully!");
                Ok(())
            }
            Err(err) => {
                error!("analysis request failed: {err:#}");
                let err = WorkflowError::Backend(format!("{err:#}"));
                self.toasts.error(err.user_message());
                Err(err)
            }
        }
    }
}
