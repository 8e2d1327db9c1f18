//! Club platform API client
//!
//! Provides the HTTP plumbing shared by every gateway operation: endpoint
//! construction, bearer authentication, per-request timeouts, and the
//! interpretation of error bodies into [`GatewayError`] values.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clubdocs_api::client::ApiClient;
//! use reqwest::Method;
//!
//! # async fn example() -> Result<(), clubdocs_core::ports::GatewayError> {
//! let client = ApiClient::new("https://club.example.com/api", Some("token".to_string()));
//! let response = client.send(client.request(Method::GET, "/folders/root")).await?;
//! println!("root listing: {}", response.status());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use clubdocs_core::ports::{ErrorCode, GatewayError, ValidationErrors};

/// Per-request timeout applied when the caller does not override it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest payload excerpt carried by `GatewayError::UnexpectedPayload`
const SNIPPET_MAX_CHARS: usize = 200;

// ============================================================================
// ApiClient
// ============================================================================

/// HTTP client for the club platform API
///
/// Wraps `reqwest::Client` with bearer authentication and base URL
/// construction. One instance is shared by all gateway operations.
pub struct ApiClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL for API requests, stored without a trailing slash
    base_url: String,
    /// Bearer token attached to every request, when configured
    token: Option<String>,
    /// Per-request timeout
    timeout: Duration,
}

impl ApiClient {
    /// Creates a new ApiClient for the given service
    ///
    /// # Arguments
    /// * `base_url` - Root of the API, e.g. `https://club.example.com/api`
    /// * `token` - Bearer token; `None` sends unauthenticated requests
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            token,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout (builder style)
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request for the given endpoint path
    ///
    /// The path must start with `/`. The bearer token is attached when one
    /// is configured, and the client timeout applies to the whole request.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, &url).timeout(self.timeout);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Sends a request, mapping connection-level failures to `Transport`
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, GatewayError> {
        builder
            .send()
            .await
            .map_err(|error| GatewayError::Transport(error.to_string()))
    }
}

// ============================================================================
// Response interpretation
// ============================================================================

/// Deserializes a success body, or interprets the failure
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    let body = read_body(response).await?;
    if !status.is_success() {
        return Err(interpret_error_body(status, &body));
    }
    serde_json::from_str(&body).map_err(|error| {
        debug!(%status, %error, "response body did not match the expected shape");
        GatewayError::UnexpectedPayload(snippet(&body))
    })
}

/// Checks for success on operations whose body carries nothing of interest
pub(crate) async fn expect_success(response: Response) -> Result<(), GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = read_body(response).await?;
    Err(interpret_error_body(status, &body))
}

async fn read_body(response: Response) -> Result<String, GatewayError> {
    response
        .text()
        .await
        .map_err(|error| GatewayError::Transport(error.to_string()))
}

/// Maps an error body onto the structured gateway errors
///
/// Two JSON shapes are understood: an object with a `detail` string becomes
/// [`GatewayError::Rejected`] (the `code` field selects the [`ErrorCode`],
/// falling back to the HTTP status), and an object mapping field names to
/// message lists becomes [`GatewayError::Validation`]. Anything else is
/// reported verbatim as [`GatewayError::UnexpectedPayload`], truncated.
pub(crate) fn interpret_error_body(status: StatusCode, body: &str) -> GatewayError {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(object)) => interpret_error_object(status, &object)
            .unwrap_or_else(|| GatewayError::UnexpectedPayload(snippet(body))),
        _ => GatewayError::UnexpectedPayload(snippet(body)),
    }
}

fn interpret_error_object(status: StatusCode, object: &Map<String, Value>) -> Option<GatewayError> {
    if let Some(detail) = object.get("detail").and_then(Value::as_str) {
        let code = match object.get("code").and_then(Value::as_str) {
            Some(code) => ErrorCode::from_wire(code),
            None => ErrorCode::Other(format!("http_{}", status.as_u16())),
        };
        return Some(GatewayError::Rejected {
            code,
            message: detail.to_string(),
        });
    }

    let mut errors = ValidationErrors::new();
    for (field, value) in object {
        for message in messages_of(value)? {
            if field == "non_field_errors" {
                errors.add_non_field(message);
            } else {
                errors.add_field(field, message);
            }
        }
    }
    if errors.is_empty() {
        None
    } else {
        Some(GatewayError::Validation(errors))
    }
}

/// Extracts the message list of one validation entry
///
/// Accepts a bare string or an array of strings; any other shape disqualifies
/// the whole object as a validation map.
fn messages_of(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(message) => Some(vec![message.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => None,
    }
}

/// Truncates a payload for inclusion in an error message
fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= SNIPPET_MAX_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("{cut}...")
}

// ============================================================================
// Tests
// ============================================================================
