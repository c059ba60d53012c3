use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Config,
    error::ApiError,
    http::routes::{Endpoint, RouteParam},
    session::SessionContext,
};

/// HTTP method of a request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

/// Where a request goes: a route table entry or a literal path used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Endpoint(Endpoint),
    Literal(String),
}

impl From<Endpoint> for Target {
    fn from(endpoint: Endpoint) -> Self {
        Self::Endpoint(endpoint)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Endpoint(endpoint) => fmt::Display::fmt(endpoint, f),
            Self::Literal(path) => f.write_str(path),
        }
    }
}

impl From<&str> for Target {
    fn from(path: &str) -> Self {
        Self::Literal(path.to_string())
    }
}

impl From<String> for Target {
    fn from(path: String) -> Self {
        Self::Literal(path)
    }
}

/// Caller intent for a single request.
///
/// Defaults: `GET`, no body, no extra headers, no route parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// Payload serialized as JSON. Not allowed on `GET`.
    pub body: Option<Value>,
    /// Headers merged over the defaults; the caller wins on a name collision.
    pub headers: Vec<(String, String)>,
    /// Identifier for templated routes.
    pub params: Option<RouteParam>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self::new().method(Method::Post).body(body)
    }

    pub fn put(body: Value) -> Self {
        Self::new().method(Method::Put).body(body)
    }

    pub fn delete() -> Self {
        Self::new().method(Method::Delete)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` into the request payload.
    pub fn json<T: Serialize>(self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| {
            ApiError::invalid_request(format!("Falha ao serializar o corpo da requisição: {}", e))
        })?;

        Ok(self.body(value))
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn params(mut self, params: impl Into<RouteParam>) -> Self {
        self.params = Some(params.into());
        self
    }
}

/// How cookies are sent with a request. The backend is cookie-session based, so there is
/// no mode without them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Include,
}

/// Fully resolved request, built per call and never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Resolved path, without the base URL.
    pub path: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON text of the payload.
    pub body: Option<String>,
    pub credentials: Credentials,
}

impl RequestDescriptor {
    /// Build the request from caller intent and the ambient session.
    ///
    /// The default headers declare a JSON body and carry the session's CSRF token (empty when
    /// none was issued yet). Caller headers replace defaults with the same name, compared
    /// case-insensitively.
    ///
    /// # Errors
    /// - [`ApiError`] of kind `InvalidRequest` when a `GET` carries a body, or a header name
    ///   or value could not be put on the wire
    pub fn build(
        config: &Config,
        session: &SessionContext,
        target: Target,
        options: RequestOptions,
    ) -> Result<Self, ApiError> {
        if options.method == Method::Get && options.body.is_some() {
            return Err(ApiError::invalid_request("Requisições GET não podem ter corpo"));
        }

        let path = match target {
            Target::Endpoint(endpoint) => endpoint.resolve(options.params.as_ref()),
            Target::Literal(path) => path,
        };

        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            (config.csrf_header.clone(), session.token()),
        ];

        for (name, value) in options.headers {
            match headers
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
            {
                Some(header) => *header = (name, value),
                None => headers.push((name, value)),
            }
        }

        for (name, value) in &headers {
            check_header(name, value)?;
        }

        let body = options.body.map(|body| body.to_string());

        Ok(Self {
            method: options.method,
            url: config.url_for(&path),
            path,
            headers,
            body,
            credentials: Credentials::Include,
        })
    }

    /// Value of a header, looked up case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// `tchar` from RFC 7230 section 3.2.6.
fn is_token_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&byte)
}

fn check_header(name: &str, value: &str) -> Result<(), ApiError> {
    if name.is_empty() || !name.bytes().all(is_token_byte) {
        return Err(ApiError::invalid_request(format!(
            "Nome de cabeçalho inválido: {:?}",
            name
        )));
    }

    // Control characters other than tab never make it onto the wire
    if value.bytes().any(|b| (b < b' ' && b != b'\t') || b == 0x7f) {
        return Err(ApiError::invalid_request(format!(
            "Valor inválido para o cabeçalho {}",
            name
        )));
    }

    Ok(())
}
