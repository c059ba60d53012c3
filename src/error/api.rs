use std::fmt;

use thiserror::Error;

/// Message used for every response whose body is not JSON.
pub const UNEXPECTED_SHAPE_MESSAGE: &str = "Resposta inesperada da API (não é JSON)";

/// Message used when no response was received at all.
pub const TRANSPORT_MESSAGE: &str = "Erro de conexão com o servidor";

/// Classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Connection failure before any response was received.
    Transport,
    /// Response body was not JSON, or JSON of the wrong shape.
    UnexpectedShape,
    /// Non-2xx response with a JSON body.
    Application,
    /// Request rejected at the boundary before it was sent.
    InvalidRequest,
    /// The server asked for a login; only produced by [`crate::Outcome::into_success`].
    AuthRedirect,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Transport => "transport",
            Self::UnexpectedShape => "unexpected shape",
            Self::Application => "application",
            Self::InvalidRequest => "invalid request",
            Self::AuthRedirect => "auth redirect",
        };
        f.write_str(kind)
    }
}

/// A classified request failure carrying the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status: Option<u16>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
        }
    }

    pub fn transport() -> Self {
        Self::new(ApiErrorKind::Transport, TRANSPORT_MESSAGE, None)
    }

    pub fn unexpected_shape(status: u16) -> Self {
        Self::new(
            ApiErrorKind::UnexpectedShape,
            UNEXPECTED_SHAPE_MESSAGE,
            Some(status),
        )
    }

    /// Error for a non-2xx JSON response.
    ///
    /// Falls back to `Erro na requisição: {code}` when the server sent no message.
    pub fn application(status: u16, message: Option<String>) -> Self {
        let message =
            message.unwrap_or_else(|| format!("Erro na requisição: {}", status));

        Self::new(ApiErrorKind::Application, message, Some(status))
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidRequest, message, None)
    }

    pub fn auth_redirect() -> Self {
        Self::new(
            ApiErrorKind::AuthRedirect,
            "Sessão expirada, redirecionando para o login",
            None,
        )
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

/// Failure raised by a [`crate::http::Transport`] before any response arrived.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(pub String);
