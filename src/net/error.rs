use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Failure talking to the account API. Messages are safe to log and never
/// carry tokens or passwords.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Builds an HTTP error from a status and a raw response body.
    pub fn http(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: sanitize_body(body),
        }
    }
}

/// Trims and truncates an error body for display.
pub(crate) fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_owned()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_body_replaces_blank_bodies() {
        assert_eq!(sanitize_body("  \n "), "Request failed.");
    }

    #[test]
    fn sanitize_body_truncates_long_bodies() {
        let body = "x".repeat(500);
        assert_eq!(sanitize_body(&body).chars().count(), MAX_ERROR_CHARS);
    }

    #[test]
    fn http_error_display_includes_status() {
        let err = ApiError::http(500, " boom ");
        assert_eq!(err.to_string(), "Request failed (500): boom");
    }
}
