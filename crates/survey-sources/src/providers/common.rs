//! Common utilities shared across listing sources.

use crate::error::{Result, SourceError};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use survey_core::HttpConfig;

/// Build the HTTP client every source uses.
///
/// # Errors
/// Returns error if the HTTP client cannot be created.
pub fn build_http_client(http: &HttpConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(http.timeout_secs))
        .user_agent(http.user_agent.clone())
        .build()
        .map_err(|e| SourceError::Internal(format!("failed to create HTTP client: {e}")))
}

/// Check the status of a response and decode its JSON body.
///
/// # Errors
/// Returns `ApiError` for a non-success status and `ParseError` when the body
/// does not match `T`.
pub async fn read_json<T>(source_id: &str, response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(SourceError::ApiError {
            source_id: source_id.to_string(),
            status: status.as_u16(),
            message: error_text,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| SourceError::ParseError {
        source_id: source_id.to_string(),
        message: format!("Failed to parse response: {e}"),
    })
}

/// Trim a trailing slash so paths can be appended with `format!`.
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
