use crate::{error::ApiError, http::Outcome, model::user::UserDto};

/// Profile of the logged-in user as shown by the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Whether the profile request has completed, successfully or not.
    pub fetched: bool,
}

/// Follow-up the UI owes once a profile request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFetch {
    Loaded,
    /// The session is gone; the login page must be shown.
    SignedOut,
    Failed(String),
}

impl UserState {
    /// Record the result of a profile request.
    ///
    /// The state always ends up `fetched`, so no outcome leaves a skeleton behind.
    pub fn apply_profile(&mut self, result: Result<Outcome<UserDto>, ApiError>) -> ProfileFetch {
        self.fetched = true;

        match result {
            Ok(Outcome::Success(user)) => {
                self.user = Some(user);
                ProfileFetch::Loaded
            }
            Ok(Outcome::AuthRedirect) => {
                self.user = None;
                ProfileFetch::SignedOut
            }
            Err(e) => ProfileFetch::Failed(e.message().to_string()),
        }
    }
}
