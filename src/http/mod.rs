//! Request contract layer.
//!
//! Every call to the backend goes through [`ApiClient::send`]: the target is resolved through
//! the [`routes`] table, default headers carry the JSON content type and the CSRF token, the
//! request runs on a [`Transport`], and the response is classified by [`response::classify`].

pub mod client;
pub mod navigator;
pub mod request;
pub mod response;
pub mod routes;
pub mod transport;

pub use client::ApiClient;
pub use navigator::{HeadlessNavigator, Navigator};
pub use request::{Credentials, Method, RequestDescriptor, RequestOptions, Target};
pub use response::{classify, Classification, Outcome, RawResponse};
pub use routes::{Endpoint, RouteDescriptor, RouteParam};
pub use transport::Transport;

#[cfg(target_arch = "wasm32")]
pub use navigator::BrowserNavigator;
#[cfg(target_arch = "wasm32")]
pub use transport::ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
