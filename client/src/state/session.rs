//! Session gate: decides between the login form and the product console.
//!
//! SYSTEM CONTEXT
//! ==============
//! On page load the stored token is checked once against the backend. A
//! successful sign-in is trusted as-is: the token is persisted and adopted
//! without a second check. There is no refresh or retry, and an expired
//! token is treated exactly like an invalid one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{SigninRequest, SigninResponse};
use crate::util::cookie::TokenStore;

/// Authentication state shared through context as `RwSignal<SessionState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Token attached to every authenticated call while signed in.
    pub token: Option<String>,
    pub authenticated: bool,
    /// True only while the startup token check is in flight.
    pub loading: bool,
}

impl SessionState {
    /// State before the startup check has run.
    pub fn starting() -> Self {
        Self { token: None, authenticated: false, loading: true }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(token: String) -> Self {
        Self { token: Some(token), authenticated: true, loading: false }
    }

    /// Flip the authenticated flag. Dropping to `false` also forgets the token.
    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
        if !authenticated {
            self.token = None;
        }
    }

    /// Token to send, present only while authenticated.
    pub fn credential(&self) -> Option<&str> {
        if self.authenticated { self.token.as_deref() } else { None }
    }
}

/// Rebuild the session from the stored cookie with a single verification call.
///
/// No stored token means no network call at all.
pub async fn restore_session<S, A>(store: &S, auth: &A) -> SessionState
where
    S: TokenStore + ?Sized,
    A: AuthApi + ?Sized,
{
    let Some(token) = store.load() else {
        return SessionState::signed_out();
    };
    match auth.check(&token).await {
        Ok(()) => SessionState::signed_in(token),
        Err(e) => {
            log::error!("stored token rejected: {e}");
            SessionState::signed_out()
        }
    }
}

/// Persist a fresh sign-in and adopt its token immediately.
pub fn adopt_login<S>(store: &S, response: &SigninResponse) -> SessionState
where
    S: TokenStore + ?Sized,
{
    store.save(&response.token, response.expired);
    SessionState::signed_in(response.token.clone())
}

/// Sign in and, on success, persist and adopt the token.
///
/// # Errors
///
/// Returns the backend error unchanged after logging it; the caller keeps
/// showing the login form.
pub async fn sign_in<S, A>(store: &S, auth: &A, request: &SigninRequest) -> Result<SessionState, ApiError>
where
    S: TokenStore + ?Sized,
    A: AuthApi + ?Sized,
{
    match auth.sign_in(request).await {
        Ok(response) => Ok(adopt_login(store, &response)),
        Err(e) => {
            log::error!("sign in failed: {e}");
            Err(e)
        }
    }
}
