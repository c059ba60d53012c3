//! Session context shared by the contract layer and the UI.
//!
//! Holds the CSRF token issued at login and the authenticated user. One context exists per
//! application session: it is created empty, handed to the [`crate::ApiClient`] at
//! construction, and written only after login, profile fetches and logout.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::user::UserDto;

#[derive(Debug, Default)]
struct SessionState {
    csrf_token: String,
    current_user: Option<UserDto>,
}

/// Cheap-to-clone handle to the session state.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current CSRF token, empty until one has been issued.
    pub fn token(&self) -> String {
        self.inner.read().csrf_token.clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.inner.write().csrf_token = token.into();
    }

    pub fn current_user(&self) -> Option<UserDto> {
        self.inner.read().current_user.clone()
    }

    pub fn set_current_user(&self, user: Option<UserDto>) {
        self.inner.write().current_user = user;
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().current_user.is_some()
    }

    /// Forget the token and user, as a page reload after logout would.
    pub fn clear(&self) {
        let mut state = self.inner.write();
        state.csrf_token.clear();
        state.current_user = None;
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
