//! Browser-side client for the freight admin panel.
//!
//! The crate is centered on the HTTP contract layer in [`http`]: every screen issues its
//! requests through [`http::ApiClient`], which resolves logical endpoints through the route
//! table, attaches the CSRF token held by the [`session::SessionContext`], and classifies each
//! response into data, a login redirect, or a classified [`error::ApiError`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod session;

pub use config::Config;
pub use error::{ApiError, ApiErrorKind, Error};
pub use http::{ApiClient, Endpoint, Method, Outcome, RequestOptions};
pub use session::SessionContext;
