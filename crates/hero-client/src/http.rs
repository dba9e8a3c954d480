//! Shared HTTP response helpers for the REST store.
//!
//! Centralizes status-code checks (404 → [`ClientError::NotFound`],
//! other non-success → [`ClientError::Api`]) so request code stays focused
//! on building URLs and decoding bodies.

use crate::error::ClientError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(resp.url().path().to_string()));
    }
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: error_message(resp.text().await.unwrap_or_default()),
        });
    }
    Ok(resp)
}

/// Prefer the `error` field of a JSON error body, else the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or(body)
}
