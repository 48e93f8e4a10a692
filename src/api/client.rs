//! HTTP client wrapper with base origin, timeout, and error interception.
//!
//! # Responsibilities
//! - Build one `reqwest::Client` with the configured request timeout
//! - Join relative request paths onto the base origin
//! - Run the response interceptor on every dispatched request
//!
//! # Design Decisions
//! - Non-2xx statuses are failures, so the interceptor sees them
//! - The interceptor logs once and re-fails with the original error; the
//!   underlying `reqwest::Error` stays reachable through the source chain

use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::config::ApiConfig;

/// Error type for API calls.
///
/// Request failures are a single class: network errors, timeouts, and
/// non-2xx responses as surfaced by `reqwest`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid base origin '{origin}': {source}")]
    BaseOrigin {
        origin: String,
        source: url::ParseError,
    },

    #[error("invalid request path '{path}': {source}")]
    RelativePath {
        path: String,
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// True if the failure was the request timeout firing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Request(e) if e.is_timeout())
    }

    /// HTTP status of the failed response, when the failure was a non-2xx.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Request(e) => e.status(),
            _ => None,
        }
    }
}

/// Preconfigured HTTP client shared by the whole application.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_origin: Url,
    timeout: Duration,
}

impl ApiClient {
    /// Build a client from configuration. Called once at startup.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_origin = Url::parse(&config.base_origin).map_err(|source| ApiError::BaseOrigin {
            origin: config.base_origin.clone(),
            source,
        })?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_origin,
            timeout,
        })
    }

    /// The configured base origin.
    pub fn base_origin(&self) -> &Url {
        &self.base_origin
    }

    /// The configured per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for a relative request path.
    pub(crate) fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        self.base_origin
            .join(path)
            .map_err(|source| ApiError::RelativePath {
                path: path.to_string(),
                source,
            })
    }

    /// Send a request and run the response interceptor.
    ///
    /// Success passes the response through unchanged. Any failure emits
    /// exactly one diagnostic event and re-fails with the original error.
    pub(crate) async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        match request.send().await.and_then(|r| r.error_for_status()) {
            Ok(response) => Ok(response),
            Err(error) => {
                tracing::error!(error = %error, "request failed");
                Err(ApiError::Request(error))
            }
        }
    }

    /// GET a relative path through the interceptor.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let url = self.url_for(path)?;
        self.dispatch(self.http.get(url)).await
    }

    /// POST a JSON body to a relative path through the interceptor.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url_for(path)?;
        self.dispatch(self.http.post(url).json(body)).await
    }

    /// POST a multipart form to a relative path through the interceptor.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url_for(path)?;
        self.dispatch(self.http.post(url).multipart(form)).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_origin", &self.base_origin.as_str())
            .field("timeout_ms", &self.timeout.as_millis())
            .finish()
    }
}

static SHARED: OnceLock<ApiClient> = OnceLock::new();

/// Install the process-wide client. The first successful call wins; later
/// calls return the already-installed instance.
pub fn init(config: &ApiConfig) -> Result<&'static ApiClient, ApiError> {
    if let Some(client) = SHARED.get() {
        return Ok(client);
    }
    let client = ApiClient::new(config)?;
    Ok(SHARED.get_or_init(|| client))
}

/// The process-wide client, if [`init`] has run.
pub fn shared() -> Option<&'static ApiClient> {
    SHARED.get()
}
