//! Network backends executing a [`RequestDescriptor`].
//!
//! The browser build talks through `reqwasm` with credentials included; native builds use a
//! `reqwest` client with a cookie store so the session cookie survives between calls. Neither
//! applies a timeout or retries.

use async_trait::async_trait;

use crate::{
    error::TransportError,
    http::{request::RequestDescriptor, response::RawResponse},
};

#[async_trait(?Send)]
pub trait Transport {
    /// Send the request and read the whole response.
    ///
    /// # Errors
    /// - [`TransportError`] when no response could be obtained
    async fn execute(&self, request: &RequestDescriptor) -> Result<RawResponse, TransportError>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::ReqwasmTransport;

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use async_trait::async_trait;
    use reqwasm::http::{Method as HttpMethod, Request, RequestCredentials};

    use super::Transport;
    use crate::{
        error::TransportError,
        http::{
            request::{Credentials, Method, RequestDescriptor},
            response::RawResponse,
        },
    };

    /// Transport over the browser's `fetch`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct ReqwasmTransport;

    fn http_method(method: Method) -> HttpMethod {
        match method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
            Method::Patch => HttpMethod::PATCH,
        }
    }

    fn credentials(credentials: Credentials) -> RequestCredentials {
        match credentials {
            Credentials::Include => RequestCredentials::Include,
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwasmTransport {
        async fn execute(
            &self,
            request: &RequestDescriptor,
        ) -> Result<RawResponse, TransportError> {
            let mut builder = Request::new(&request.url)
                .method(http_method(request.method))
                .credentials(credentials(request.credentials));

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            if let Some(body) = &request.body {
                builder = builder.body(body.clone());
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

            let status = response.status();
            let content_type = response.headers().get("content-type");
            let body = response
                .binary()
                .await
                .map_err(|e| TransportError(format!("Failed to read response body: {}", e)))?;

            Ok(RawResponse {
                status,
                content_type,
                body,
            })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use async_trait::async_trait;
    use reqwest::header::CONTENT_TYPE;

    use super::Transport;
    use crate::{
        error::TransportError,
        http::{
            request::{Method, RequestDescriptor},
            response::RawResponse,
        },
    };

    /// Transport over `reqwest`, keeping cookies between calls.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Result<Self, TransportError> {
            let client = reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .map_err(|e| TransportError(format!("Failed to build HTTP client: {}", e)))?;

            Ok(Self { client })
        }

        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    fn http_method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn execute(
            &self,
            request: &RequestDescriptor,
        ) -> Result<RawResponse, TransportError> {
            let mut builder = self
                .client
                .request(http_method(request.method), &request.url);

            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            if let Some(body) = &request.body {
                builder = builder.body(body.clone());
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError(format!("Failed to read response body: {}", e)))?
                .to_vec();

            Ok(RawResponse {
                status,
                content_type,
                body,
            })
        }
    }
}
