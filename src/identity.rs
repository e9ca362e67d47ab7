// src/identity.rs
use crate::toast::ToastNotifier;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

/// External identity collaborator. The workflow never talks to the provider's
/// wire protocol; it is injected here so the gate stays testable with an
/// in-memory fake. Error strings are surfaced verbatim on the auth forms.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), String>;
    async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<(), String>;
    async fn sign_out(&self);
    async fn reset_password(&self, email: &str) -> Result<(), String>;
    fn current_user(&self) -> Option<AuthUser>;
}

/// Which screen the application shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GateView {
    SignedOut,
    SignedIn { email: String },
}

/// Authenticated/unauthenticated switch over the analysis workflow.
///
/// Blank-field checks live here so the provider is only called with filled-in
/// forms; provider failures pass through unchanged for inline display.
pub struct SessionGate {
    provider: Arc<dyn IdentityProvider>,
    toasts: ToastNotifier,
}

impl SessionGate {
    pub fn new(provider: Arc<dyn IdentityProvider>, toasts: ToastNotifier) -> Self {
        Self { provider, toasts }
    }

    pub fn is_authenticated(&self) -> bool {
        self.provider.current_user().is_some()
    }

    pub fn view(&self) -> GateView {
        match self.provider.current_user() {
            Some(user) => GateView::SignedIn { email: user.email },
            None => GateView::SignedOut,
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), String> {
        if email.is_empty() || password.is_empty() {
            return Err("Please fill in all fields".to_string());
        }
        self.provider.sign_in(email, password).await?;
        info!(%email, "user signed in");
        Ok(())
    }

    pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<(), String> {
        if email.is_empty() || password.is_empty() || full_name.is_empty() {
            return Err("Please fill in all fields".to_string());
        }
        self.provider.sign_up(email, password, full_name).await
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), String> {
        if email.is_empty() {
            return Err("Please enter your email address".to_string());
        }
        self.provider.reset_password(email).await
    }

    pub async fn sign_out(&self) {
        self.provider.sign_out().await;
        info!("user signed out");
        self.toasts.success("Signed out successfully");
    }
}
