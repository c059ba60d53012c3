//! Mock endpoints for common backend flows.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{constant::TEST_CSRF_TOKEN, fixtures::data, TestSetup};

impl TestSetup {
    pub fn api<'a>(&'a mut self) -> ApiFixtures<'a> {
        ApiFixtures { setup: self }
    }
}

pub struct ApiFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl<'a> ApiFixtures<'a> {
    /// Create a `POST /login` endpoint that logs in `user` and issues [`TEST_CSRF_TOKEN`].
    pub fn create_login_endpoint(&mut self, user: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(data::mock_login_success(user).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET /api/perfil` endpoint that only answers requests carrying
    /// [`TEST_CSRF_TOKEN`].
    pub fn create_perfil_endpoint(&mut self, user: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/api/perfil")
            .match_header("x-csrftoken", TEST_CSRF_TOKEN)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(user.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `POST /logout` endpoint.
    pub fn create_logout_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/logout")
            .match_body(Matcher::Json(serde_json::json!({})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true}"#)
            .expect(expected_requests)
            .create()
    }
}
