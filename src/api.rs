//! REST client for the restaurant endpoints.
//!
//! DESIGN
//! ======
//! `RestaurantApi` is the seam the screen talks to; `HttpRestaurantApi` is
//! the reqwest-backed implementation. Response parsing lives in free
//! functions so it can be tested without a server.
//!
//! Every call takes the bearer token explicitly. The caller decides whether
//! a credential exists; this module never reads session state.

use std::time::Duration;

use reqwest::{Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::types::{Restaurant, RestaurantFields, RestaurantListResponse, is_addressable_id};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by restaurant API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL cannot host API paths.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The identifier cannot name a single record; nothing was sent.
    #[error("invalid restaurant id {0:?}")]
    InvalidId(String),

    /// The request did not complete (connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// A success response body could not be decoded.
    #[error("response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// API TRAIT
// =============================================================================

/// The four calls the restaurant screen needs. Enables mocking in tests.
#[async_trait::async_trait]
pub trait RestaurantApi: Send + Sync {
    /// `GET /api/restaurant/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is malformed.
    async fn list(&self, token: &str) -> Result<Vec<Restaurant>, ApiError>;

    /// `POST /api/restaurant/create`. Returns the server's created resource.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn create(&self, token: &str, fields: &RestaurantFields) -> Result<Value, ApiError>;

    /// `PUT /api/restaurant/update/{id}`. Returns the server's updated resource.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn update(&self, token: &str, id: &str, fields: &RestaurantFields) -> Result<Value, ApiError>;

    /// `DELETE /api/restaurant/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is rejected.
    async fn delete(&self, token: &str, id: &str) -> Result<(), ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpRestaurantApi {
    http: reqwest::Client,
    base: Url,
}

impl HttpRestaurantApi {
    /// Build a client for `config.api_url` with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unusable or the HTTP client fails
    /// to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.api_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", config.api_url)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.api_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base })
    }

    /// Resolve API path segments against the base URL. Each segment is
    /// percent-encoded, so identifiers can never escape their slot.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Like [`Self::endpoint`] with `id` as the last segment. Ids that would
    /// collapse into another route are rejected before any I/O.
    fn record_endpoint(&self, prefix: &[&str], id: &str) -> Result<Url, ApiError> {
        if !is_addressable_id(id) {
            return Err(ApiError::InvalidId(id.to_owned()));
        }
        let mut segments = prefix.to_vec();
        segments.push(id);
        Ok(self.endpoint(&segments))
    }

    async fn send(&self, method: Method, url: Url, token: &str, body: Option<&RestaurantFields>) -> Result<String, ApiError> {
        debug!(%method, %url, "restaurant api request");
        let request = self.http.request(method, url).bearer_auth(token);
        let request = if let Some(fields) = body { request.json(fields) } else { request };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl RestaurantApi for HttpRestaurantApi {
    async fn list(&self, token: &str) -> Result<Vec<Restaurant>, ApiError> {
        let url = self.endpoint(&["api", "restaurant", ""]);
        let text = self.send(Method::GET, url, token, None).await?;
        parse_list_response(&text)
    }

    async fn create(&self, token: &str, fields: &RestaurantFields) -> Result<Value, ApiError> {
        let url = self.endpoint(&["api", "restaurant", "create"]);
        let text = self.send(Method::POST, url, token, Some(fields)).await?;
        Ok(parse_write_response(&text))
    }

    async fn update(&self, token: &str, id: &str, fields: &RestaurantFields) -> Result<Value, ApiError> {
        let url = self.record_endpoint(&["api", "restaurant", "update"], id)?;
        let text = self.send(Method::PUT, url, token, Some(fields)).await?;
        Ok(parse_write_response(&text))
    }

    async fn delete(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let url = self.record_endpoint(&["api", "restaurant"], id)?;
        self.send(Method::DELETE, url, token, None).await?;
        Ok(())
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Decode a list body. An empty or non-JSON body, a non-object body, or an
/// object without a `restaurant` array all mean "no rows". Only rows that
/// are present but malformed fail.
fn parse_list_response(text: &str) -> Result<Vec<Restaurant>, ApiError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let Ok(value) = serde_json::from_str::<Value>(text) else {
        debug!(len = text.len(), "list body is not JSON; treating as empty");
        return Ok(Vec::new());
    };
    if !value.is_object() {
        return Ok(Vec::new());
    }
    let body: RestaurantListResponse = serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(body.into_restaurants())
}

/// Write responses are informational only; a body that is not JSON is kept
/// as a string rather than failing an otherwise successful write.
fn parse_write_response(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
