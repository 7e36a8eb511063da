//! Error Types
//!
//! A fetch can fail in several ways, but every failure is treated the same:
//! the caller logs it and shows nothing.

use thiserror::Error;

/// Why a request to the backend produced no data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure, request never got a response
    #[error("Network error: {0}")]
    Transport(String),

    /// Backend answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type alias for backend requests
pub type FetchResult<T> = Result<T, FetchError>;

/// Outcome of a fetch as held by a view.
///
/// `Failed` renders exactly like "no data"; the reason is kept for logging
/// and tests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Ok(T),
    Failed(FetchError),
}

impl<T> FetchOutcome<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            FetchOutcome::Ok(value) => Some(value),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

impl<T> From<FetchResult<T>> for FetchOutcome<T> {
    fn from(result: FetchResult<T>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Ok(value),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FetchError::Status(500).to_string(), "Unexpected status: 500");
        assert_eq!(
            FetchError::Transport("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: FetchOutcome<u32> = Ok(3).into();
        assert_eq!(ok.clone().ok(), Some(3));
        assert!(!ok.is_failed());

        let failed: FetchOutcome<u32> = Err(FetchError::Status(404)).into();
        assert!(failed.is_failed());
        assert_eq!(failed.ok(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
