//! Error types for the admin panel client.
//!
//! [`ApiError`] is the classified failure every request through the contract layer can
//! produce. Configuration and form validation have their own domain errors, and [`Error`]
//! aggregates them for flows that validate input before talking to the server.

pub mod api;
pub mod config;
pub mod validation;

use thiserror::Error;

pub use api::{ApiError, ApiErrorKind, TransportError};
pub use config::ConfigError;
pub use validation::ValidationError;

/// Main error type for client flows that combine validation and API calls.
///
/// Uses `thiserror`'s `#[from]` so `?` converts domain errors automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Classified failure returned by the request contract layer.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Missing or invalid configuration value.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Form input rejected before any request was sent.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
}

impl Error {
    /// Message suitable for a toast notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError(err) => err.message().to_string(),
            err => err.to_string(),
        }
    }
}
