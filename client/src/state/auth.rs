//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` by the app root. Pages read the
//! [`Session`] from here and pass it explicitly into every save/remove.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use saves::{Session, SessionToken};

use crate::net::types::User;

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while the stored token is being checked.
    #[must_use]
    pub fn resolving() -> Self {
        Self { session: Session::Anonymous, loading: true }
    }

    /// Signed-in state for `user` holding `token`.
    #[must_use]
    pub fn signed_in(user: User, token: impl Into<String>) -> Self {
        Self {
            session: Session::authenticated(user.id, user.username, SessionToken::new(token)),
            loading: false,
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { session: Session::Anonymous, loading: false }
    }

    #[must_use]
    pub fn logged_in(&self) -> bool {
        self.session.logged_in()
    }

    /// Whether a page guard should send the user to `/login`.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        !self.loading && !self.logged_in()
    }
}
