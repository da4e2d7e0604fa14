//! Read-only HTTP client for the aggregate-statistics backend.
//!
//! Two GET endpoints, each called once per dashboard view. There is no retry,
//! timeout, or caching; a failure is reported once and the user reloads.

use std::fmt;

use dioxus::logger::tracing::debug;
use serde::de::DeserializeOwned;

use super::stats::CategoryData;
use super::summary::BoxplotData;

/// Origin of the statistics backend when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Backend origin, honoring `SURESCREEN_API_URL` on native targets.
pub fn base_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("SURESCREEN_API_URL") {
        let trimmed = url.trim_end_matches('/');
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    DEFAULT_BASE_URL.to_string()
}

/// Why a fetch produced no data. A variable missing from an otherwise
/// successful payload is not represented here; that degrades to an empty
/// series upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never completed (connection refused, DNS, aborted).
    Transport(String),
    /// The backend answered with a non-success status.
    Status(u16),
    /// The body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(message) => write!(f, "{message}"),
            FetchError::Status(code) => write!(f, "server responded with status {code}"),
            FetchError::Decode(message) => write!(f, "unexpected response body: {message}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// `GET /data`: categorical counts keyed by canonical column name.
pub async fn fetch_category_data(base: &str) -> Result<CategoryData, FetchError> {
    get_json(&format!("{base}/data")).await
}

/// `GET /boxplot-data`: five-number summaries keyed by canonical column name.
pub async fn fetch_boxplot_data(base: &str) -> Result<BoxplotData, FetchError> {
    get_json(&format!("{base}/boxplot-data")).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    debug!(%url, "requesting aggregate data");
    let response = reqwest::get(url)
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_carry_the_code() {
        let err = FetchError::Status(500);
        assert_eq!(err.to_string(), "server responded with status 500");
    }

    #[test]
    fn transport_errors_surface_the_underlying_message() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn default_base_url_points_at_the_local_backend() {
        assert_eq!(DEFAULT_BASE_URL, "http://localhost:5000");
        assert!(!base_url().ends_with('/'));
    }
}
