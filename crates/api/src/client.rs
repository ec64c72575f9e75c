//! HTTP client for the remote widget API.
//!
//! [`WidgetApi`] wraps a `reqwest::Client` and exposes the five remote
//! operations: list all, create, update, delete, and search by name. All
//! payloads are JSON against `{base_url}/v1/widgets[...]`.
//!
//! All methods return `Result<T, ClientError>` where `T` is the expected
//! response type. Transport failures and non-2xx responses both surface as
//! [`ClientError`]; nothing is retried automatically.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let api = WidgetApi::new(&ApiConfig::default());
//! let widgets = api.list_all().await?;
//! let created = api.create(&widget).await?;
//! ```

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use widget_core::{ApiConfig, Widget};

// ============================================================================
// Error Type
// ============================================================================

/// Errors that can occur when making API requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned an error response (4xx or 5xx).
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable error message from the response body.
        message: String,
    },

    /// Failed to deserialise the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Whether this is a "not found" (404) error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Whether this is a conflict error (409).
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Api { status: 409, .. })
    }

    /// Get the user-facing error message.
    ///
    /// Prefers the server-provided message; transport and parse failures map
    /// to generic wording.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(e) => {
                if e.is_timeout() {
                    "Request timed out. Please try again.".to_string()
                } else if e.is_connect() {
                    "Unable to connect to the server. Please check your connection.".to_string()
                } else {
                    "An unexpected network error occurred.".to_string()
                }
            }
            Self::Api { message, .. } => message.clone(),
            Self::Parse(_) => "Received an unexpected response from the server.".to_string(),
        }
    }
}

/// Error body shape the API uses for 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: String,
}

// ============================================================================
// Search result normalization
// ============================================================================

/// The search endpoint is not consistent about its response shape: it may
/// return a single widget object or an array. Callers always get a vec.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Widget),
    Many(Vec<Widget>),
}

impl From<OneOrMany> for Vec<Widget> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(widget) => vec![widget],
            OneOrMany::Many(widgets) => widgets,
        }
    }
}

// ============================================================================
// WidgetApi
// ============================================================================

/// HTTP client for the remote widget API.
#[derive(Debug, Clone)]
pub struct WidgetApi {
    /// The underlying reqwest HTTP client.
    client: Client,
    /// Base URL of the API (e.g. `http://localhost:9000`).
    base_url: String,
}

impl WidgetApi {
    /// Create a new API client for the configured endpoint.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("failed to create HTTP client"),
            base_url: config.base_url.clone(),
        }
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the full URL for an API endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Path for the collection endpoint.
    fn collection_path() -> &'static str {
        "/v1/widgets"
    }

    /// Path for a single widget, with the name path-escaped.
    fn widget_path(name: &str) -> String {
        format!("/v1/widgets/{}", urlencoding::encode(name))
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    /// Send a GET request and deserialise the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Send a POST request with a JSON body and deserialise the response.
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Widget,
    ) -> Result<T, ClientError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Send a PUT request with a JSON body and deserialise the response.
    async fn put<T: DeserializeOwned>(&self, path: &str, body: &Widget) -> Result<T, ClientError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Send a DELETE request. Returns `Ok(())` on success.
    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.client.delete(self.url(path)).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Handle a response: check for errors and deserialise on success.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Turn a non-2xx response into an `Api` error, keeping the server's
    /// message when the body carries one.
    async fn error_from_response(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.json::<ApiMessage>().await.unwrap_or(ApiMessage {
            message: String::new(),
        });
        let message = if body.message.is_empty() {
            format!("Server returned status {}", status)
        } else {
            body.message
        };
        ClientError::Api { status, message }
    }

    // ========================================================================
    // Widget operations
    // ========================================================================

    /// Fetch the full widget collection.
    ///
    /// GET /v1/widgets
    pub async fn list_all(&self) -> Result<Vec<Widget>, ClientError> {
        tracing::debug!("Fetching widget collection");
        self.get(Self::collection_path()).await
    }

    /// Submit a new widget; returns the server-confirmed representation.
    ///
    /// POST /v1/widgets
    pub async fn create(&self, widget: &Widget) -> Result<Widget, ClientError> {
        tracing::debug!("Creating widget '{}'", widget.name);
        self.post(Self::collection_path(), widget).await
    }

    /// Submit a full replacement for the widget identified by `name`.
    ///
    /// PUT /v1/widgets/{name}
    pub async fn update(&self, name: &str, widget: &Widget) -> Result<Widget, ClientError> {
        tracing::debug!("Updating widget '{}'", name);
        self.put(&Self::widget_path(name), widget).await
    }

    /// Delete the widget identified by `name`.
    ///
    /// DELETE /v1/widgets/{name}
    pub async fn remove(&self, name: &str) -> Result<(), ClientError> {
        tracing::debug!("Deleting widget '{}'", name);
        self.delete(&Self::widget_path(name)).await
    }

    /// Search widgets by name. The server may answer with a single object or
    /// an array; the result is always normalized to a vec.
    ///
    /// GET /v1/widgets/{query}
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Widget>, ClientError> {
        tracing::debug!("Searching widgets for '{}'", query);
        let found: OneOrMany = self.get(&Self::widget_path(query)).await?;
        Ok(found.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
