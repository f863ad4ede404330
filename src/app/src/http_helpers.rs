//! HTTP helper functions for Crux Core
//!
//! Every failure, whether the server rejected the request or no response
//! arrived at all, is normalized into an [`ApiError`] here before it reaches
//! the feedback state.

use crux_http::{HttpError, Response};

use crate::types::ApiError;

/// Base URL for API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`.
pub const BASE_URL: &str = "https://relative";

/// List, wake and forget devices
pub const WAKE_ENDPOINT: &str = "/api/v1/wake";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wakeup_ui_core::http_helpers::build_url;
/// let url = build_url("/api/v1/wake");
/// assert_eq!(url, "https://relative/api/v1/wake");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Builds an [`ApiError`] from a status code and an optional error body.
///
/// The server answers with `{"status": .., "message": ..}`; plain text bodies
/// are used verbatim and an empty body falls back to a generic message.
pub fn error_from_body(action: &str, status: u16, body: Option<Vec<u8>>) -> ApiError {
    let body = body.unwrap_or_default();

    if let Ok(error) = serde_json::from_slice::<ApiError>(&body) {
        if !error.message.is_empty() {
            return ApiError::new(error.message, status);
        }
    }

    match String::from_utf8(body) {
        Ok(text) if !text.trim().is_empty() => ApiError::new(text.trim(), status),
        _ => ApiError::new(format!("{action} failed"), status),
    }
}

/// Extracts the error of a non-success HTTP response.
pub fn extract_api_error(action: &str, response: &mut Response<Vec<u8>>) -> ApiError {
    let status = u16::from(response.status());
    error_from_body(action, status, response.take_body())
}

/// Maps an error raised by `crux_http` itself.
///
/// Status errors keep their code, everything else means no usable response
/// arrived and is reported as a transport failure.
pub fn map_http_error(action: &str, error: HttpError) -> ApiError {
    match error {
        HttpError::Http { code, body, .. } => error_from_body(action, u16::from(code), body),
        other => ApiError::transport(format!("{action} failed: {other}")),
    }
}

/// Check response status only (no body parsing).
pub fn check_response_status(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<(), ApiError> {
    if is_response_success(response) {
        Ok(())
    } else {
        Err(extract_api_error(action, response))
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, ApiError> {
    if !is_response_success(response) {
        return Err(extract_api_error(action, response));
    }

    let status = u16::from(response.status());
    match response.take_body() {
        Some(body) => serde_json::from_slice(&body)
            .map_err(|e| ApiError::new(format!("{action}: JSON parse error: {e}"), status)),
        None => Err(ApiError::new(format!("{action}: Empty response body"), status)),
    }
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), ApiError> {
    match result {
        Ok(mut response) => check_response_status(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, ApiError> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}
