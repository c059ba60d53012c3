use serde_json::Value;

use crate::error::ApiError;

/// Response as received from a transport, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Declared `Content-Type`, if any.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn content_type_contains(&self, needle: &str) -> bool {
        self.content_type
            .as_deref()
            .map(|content_type| content_type.to_ascii_lowercase().contains(needle))
            .unwrap_or(false)
    }
}

/// How a response must be interpreted, decided from status and content type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Failed with an HTML page: the backend's way of asking for a login.
    AuthRedirect,
    /// Body is not JSON, whatever the status.
    UnexpectedShape,
    /// JSON body; `ok` tells whether the status was 2xx.
    Json { ok: bool },
}

/// Classify a response without touching its body.
///
/// The HTML-and-failed check runs before the generic content type check, so an HTML error
/// page is a login redirect while an HTML success page is an unexpected shape.
pub fn classify(response: &RawResponse) -> Classification {
    let ok = response.is_success();

    if !ok && response.content_type_contains("text/html") {
        return Classification::AuthRedirect;
    }

    if !response.content_type_contains("application/json") {
        return Classification::UnexpectedShape;
    }

    Classification::Json { ok }
}

/// Message carried by a JSON error body: its `error` field, then its `message` field.
/// Empty strings count as absent.
pub(crate) fn error_message(body: &Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|message| !message.is_empty())
        .map(str::to_string)
}

/// Result of a request that reached the server.
///
/// Together with `Result<_, ApiError>` this gives the three outcomes of a call: data, a
/// login redirect already under way, or a classified failure.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    /// The page is being sent to the login screen; there is no data.
    AuthRedirect,
}

impl<T> Outcome<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::AuthRedirect)
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::AuthRedirect => None,
        }
    }

    /// Treat a redirect as an error of kind `AuthRedirect`.
    pub fn into_success(self) -> Result<T, ApiError> {
        self.success().ok_or_else(ApiError::auth_redirect)
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::AuthRedirect => Outcome::AuthRedirect,
        }
    }
}
