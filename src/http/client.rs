use std::{fmt, sync::Arc};

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::Config,
    error::ApiError,
    http::{
        navigator::Navigator,
        request::{RequestDescriptor, RequestOptions, Target},
        response::{classify, error_message, Classification, Outcome},
        transport::Transport,
    },
    session::SessionContext,
};

/// Single entry point for backend calls.
///
/// Cloning is cheap and every clone shares the same session, transport and navigator.
/// Calls are independent of each other: there is no de-duplication, cancellation, timeout or
/// retry, and overlapping calls complete in whatever order the network decides.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<Config>,
    session: SessionContext,
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: Config,
        session: SessionContext,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            session,
            transport,
            navigator,
        }
    }

    /// Client backed by the browser's `fetch` and window location.
    #[cfg(target_arch = "wasm32")]
    pub fn browser(config: Config, session: SessionContext) -> Self {
        use crate::http::{navigator::BrowserNavigator, transport::ReqwasmTransport};

        Self::new(
            config,
            session,
            Arc::new(ReqwasmTransport),
            Arc::new(BrowserNavigator),
        )
    }

    /// Client backed by `reqwest` with a cookie store and a headless navigator.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn native(config: Config, session: SessionContext) -> Result<Self, ApiError> {
        use crate::http::{navigator::HeadlessNavigator, transport::ReqwestTransport};

        let transport = ReqwestTransport::new().map_err(|e| {
            tracing::error!("{}", e);
            ApiError::transport()
        })?;

        Ok(Self::new(
            config,
            session,
            Arc::new(transport),
            Arc::new(HeadlessNavigator::new()),
        ))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Send a request and interpret the response.
    ///
    /// A failed response with an HTML body is the backend asking for a login: the navigator
    /// is sent to the login page and `Outcome::AuthRedirect` is returned without reading the
    /// body. Any other non-JSON body is an error, and a failed JSON response becomes an error
    /// carrying the server's message.
    ///
    /// # Errors
    /// - `InvalidRequest` - The options were rejected before sending
    /// - `Transport` - No response was received
    /// - `UnexpectedShape` - The body was not JSON, or not the JSON `T` expects
    /// - `Application` - Non-2xx status with a JSON body
    pub async fn send<T>(
        &self,
        target: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Outcome<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let target: Target = target.into();
        let operation = target.to_string();
        let request = RequestDescriptor::build(&self.config, &self.session, target, options)
            .map_err(|e| {
                tracing::warn!(operation = %operation, "{}", e);
                e
            })?;

        tracing::debug!(
            operation = %operation,
            method = request.method.as_str(),
            path = %request.path,
            "Sending API request"
        );

        let response = self.transport.execute(&request).await.map_err(|e| {
            tracing::error!(
                method = request.method.as_str(),
                path = %request.path,
                "{}",
                e
            );

            ApiError::transport()
        })?;

        let status = response.status;

        match classify(&response) {
            Classification::AuthRedirect => {
                tracing::warn!(
                    status = %status,
                    path = %request.path,
                    "Unexpected HTML response, redirecting to login"
                );

                self.navigator.redirect(&self.config.login_path);

                Ok(Outcome::AuthRedirect)
            }
            Classification::UnexpectedShape => {
                tracing::debug!(
                    status = %status,
                    path = %request.path,
                    content_type = ?response.content_type,
                    "Response is not JSON"
                );

                Err(ApiError::unexpected_shape(status))
            }
            Classification::Json { ok: true } => serde_json::from_slice::<T>(&response.body)
                .map(Outcome::Success)
                .map_err(|e| {
                    tracing::debug!(
                        status = %status,
                        path = %request.path,
                        "Failed to decode response body: {}",
                        e
                    );

                    ApiError::unexpected_shape(status)
                }),
            Classification::Json { ok: false } => {
                let body: Value = serde_json::from_slice(&response.body)
                    .map_err(|_| ApiError::unexpected_shape(status))?;

                let err = ApiError::application(status, error_message(&body));

                tracing::debug!(
                    status = %status,
                    path = %request.path,
                    "Request failed: {}",
                    err
                );

                Err(err)
            }
        }
    }

    /// [`ApiClient::send`] returning the raw JSON value.
    pub async fn send_json(
        &self,
        target: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Outcome<Value>, ApiError> {
        self.send::<Value>(target, options).await
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config) && self.session == other.session
    }
}
