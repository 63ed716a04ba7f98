use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// Unreserved characters (RFC 3986) stay as-is inside a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let builder = self.client.request(method, format!("{}{}", base_url, path));
        with_session_credentials(builder)
    }

    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|err| {
            log::warn!("API request failed before a response arrived: {}", err);
            ApiError::request_failed(format!("Request failed: {}", err))
        })
    }

    pub(super) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    pub(super) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    async fn map_error_response(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = error_from_body(status, &body);
        log::debug!(
            "API responded with {} ({}): {}",
            status.as_u16(),
            error.code,
            error.error
        );
        error
    }
}

/// Percent-encodes a single path segment such as a record id.
pub(super) fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

pub(super) fn error_from_body(status: StatusCode, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<ApiError>(body)
        .ok()
        .filter(|error| !error.error.trim().is_empty());
    let mut error = parsed.unwrap_or_else(|| ApiError {
        error: format!("Request failed with status {}", status.as_u16()),
        code: format!("HTTP_{}", status.as_u16()),
        details: None,
    });
    if status == StatusCode::UNAUTHORIZED {
        error.code = "UNAUTHORIZED".to_string();
    } else if error.code.is_empty() {
        error.code = format!("HTTP_{}", status.as_u16());
    }
    error
}

#[cfg(target_arch = "wasm32")]
fn with_session_credentials(builder: RequestBuilder) -> RequestBuilder {
    // The session cookie is HTTP-only and scoped to the API origin.
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_session_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}
