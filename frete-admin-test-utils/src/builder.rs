//! Declarative setup of the mock backend.
//!
//! Endpoints are queued on the builder and registered with the mockito server during
//! `build()`. Every endpoint asserts how often it is called when
//! [`crate::TestSetup::assert_mocks`] runs.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

use crate::{constant::TEST_LOGIN_PAGE, error::TestError, TestSetup};

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

/// Builder for a [`TestSetup`] with mocked backend endpoints.
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
        }
    }

    /// Respond to `method path` with a JSON body and status.
    pub fn with_json_endpoint(
        self,
        method: &'static str,
        path: &'static str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_mock_endpoint(move |server| {
            server
                .mock(method, path)
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body(body.to_string())
                .expect(expected_requests)
                .create()
        })
    }

    /// Respond to `method path` with the backend's HTML login page.
    pub fn with_html_endpoint(
        self,
        method: &'static str,
        path: &'static str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with_mock_endpoint(move |server| {
            server
                .mock(method, path)
                .with_status(status)
                .with_header("content-type", "text/html; charset=utf-8")
                .with_body(TEST_LOGIN_PAGE)
                .expect(expected_requests)
                .create()
        })
    }

    /// Respond to `method path` with a plain-text body.
    pub fn with_text_endpoint(
        self,
        method: &'static str,
        path: &'static str,
        status: usize,
        body: &'static str,
        expected_requests: usize,
    ) -> Self {
        self.with_mock_endpoint(move |server| {
            server
                .mock(method, path)
                .with_status(status)
                .with_header("content-type", "text/plain")
                .with_body(body)
                .expect(expected_requests)
                .create()
        })
    }

    /// Respond with JSON only when the request carries the given header value and body.
    pub fn with_json_endpoint_matching(
        self,
        method: &'static str,
        path: &'static str,
        header: (&'static str, &'static str),
        request_body: Value,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_mock_endpoint(move |server| {
            server
                .mock(method, path)
                .match_header(header.0, header.1)
                .match_body(Matcher::Json(request_body))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(response.to_string())
                .expect(expected_requests)
                .create()
        })
    }

    /// Register any mock on the server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        for builder in self.mock_builders {
            let mock = builder(&mut setup.server);
            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}
