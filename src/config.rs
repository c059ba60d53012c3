use std::time::Duration;

use dioxus_logger::tracing;

use crate::error::ConfigError;

/// Default lifetime of a toast notification.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);
/// Page the client navigates to when the server answers with an HTML error page.
pub const DEFAULT_LOGIN_PATH: &str = "/login";
/// Header the backend reads the CSRF token from.
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

/// Client configuration.
///
/// In the browser the defaults are used and requests go to the page's own origin. Native
/// builds read the values from the environment with [`Config::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix prepended to every resolved path. Empty means same-origin.
    pub base_url: String,
    pub login_path: String,
    pub csrf_header: String,
    pub toast_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join the base URL with an absolute path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Load the configuration for the current target.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(target_arch = "wasm32")]
        return Ok(Self::default());

        #[cfg(not(target_arch = "wasm32"))]
        Self::from_env()
    }

    /// Read configuration from environment variables, loading `.env` first.
    ///
    /// `FRETE_API_URL` is required; `FRETE_LOGIN_PATH`, `FRETE_CSRF_HEADER` and
    /// `FRETE_TOAST_MS` fall back to their defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`Config::load`], falling back to the defaults when the environment is invalid.
    pub fn load_or_default() -> Self {
        Self::or_default(Self::load())
    }

    fn or_default(loaded: Result<Self, ConfigError>) -> Self {
        loaded.unwrap_or_else(|e| {
            tracing::error!("Invalid configuration, using defaults: {}", e);
            Self::default()
        })
    }

    /// Build a configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("FRETE_API_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("FRETE_API_URL".to_string()))?;

        let toast_duration = match lookup("FRETE_TOAST_MS") {
            Some(value) => value
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "FRETE_TOAST_MS".to_string(),
                    reason: e.to_string(),
                })?,
            None => defaults.toast_duration,
        };

        let login_path = lookup("FRETE_LOGIN_PATH").unwrap_or(defaults.login_path);
        if !login_path.starts_with('/') {
            return Err(ConfigError::InvalidEnvValue {
                var: "FRETE_LOGIN_PATH".to_string(),
                reason: "must be an absolute path".to_string(),
            });
        }

        Ok(Self {
            base_url,
            login_path,
            csrf_header: lookup("FRETE_CSRF_HEADER").unwrap_or(defaults.csrf_header),
            toast_duration,
        })
    }
}
