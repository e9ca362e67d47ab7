//! Client-side workflow for a résumé/job-requirement matching service.
//!
//! The crate models the whole analysis flow as explicit state plus pure view
//! derivation: [`InputSession`] captures and validates user input,
//! [`AnalysisOrchestrator`] submits it to a [`MatchBackend`] (the shipped
//! [`MatchClient`] speaks the service's multipart wire format), and
//! [`view::ResultsView`] renders the outcome. Transient feedback goes through
//! [`ToastNotifier`]; [`identity::SessionGate`] switches between auth forms
//! and the workflow over an injected identity provider.

pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod orchestrator;
pub mod session;
pub mod toast;
pub mod types;
pub mod view;

pub use client::{MatchBackend, MatchClient};
pub use config::ClientConfig;
pub use error::WorkflowError;
pub use identity::{AuthUser, GateView, IdentityProvider, SessionGate};
pub use orchestrator::AnalysisOrchestrator;
pub use session::{InputSession, RequirementMode};
pub use toast::{Toast, ToastKind, ToastNotifier};
pub use types::{MatchResult, ResumeUpload, PDF_MIME};
pub use view::{ResultsView, ScoreClass, WorkflowView};
