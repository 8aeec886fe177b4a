use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by BoxDice client operations.
///
/// [`BoxDiceError::Authentication`] and [`BoxDiceError::RateLimit`] are
/// specialized API failures; everything else the server rejects with a
/// non-2xx status surfaces as [`BoxDiceError::Api`]. Use [`Self::status`] and
/// [`Self::retry_after_secs`] for uniform handling across the three kinds.
#[derive(Debug, Error)]
pub enum BoxDiceError {
    /// The API rejected the configured key (HTTP 401).
    #[error("Authentication failed")]
    Authentication,

    /// The API throttled the request (HTTP 429).
    #[error("Rate limit exceeded. Retry after {retry_after_secs} seconds")]
    RateLimit {
        /// Seconds to wait before retrying, from the `Retry-After` header.
        /// Defaults to 60 when the header is absent or not an integer.
        retry_after_secs: u64,
    },

    /// Any other non-success HTTP status.
    #[error("API request failed: {status_text}")]
    Api {
        status: StatusCode,
        /// Canonical reason phrase for the status (for example
        /// `Internal Server Error`).
        status_text: String,
        /// Raw response payload, when the server sent one.
        body: Option<String>,
    },

    /// Domain does not form a valid base URL.
    #[error("invalid BoxDice domain '{0}'")]
    InvalidDomain(String),

    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Endpoint path could not be joined to the base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidEndpoint(String),

    /// API key contains characters that cannot appear in a header value.
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body could not be parsed as JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoxDiceError {
    /// HTTP status associated with this error, when it came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Authentication => Some(StatusCode::UNAUTHORIZED),
            Self::RateLimit { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Seconds the server asked to wait, for rate-limit errors only.
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::RateLimit { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoxDiceError;
    use reqwest::StatusCode;

    #[test]
    fn specialized_errors_expose_their_status() {
        assert_eq!(
            BoxDiceError::Authentication.status(),
            Some(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(
            BoxDiceError::RateLimit {
                retry_after_secs: 5
            }
            .status(),
            Some(StatusCode::TOO_MANY_REQUESTS)
        );
    }

    #[test]
    fn retry_after_is_only_set_for_rate_limits() {
        let rate_limited = BoxDiceError::RateLimit {
            retry_after_secs: 30,
        };
        assert_eq!(rate_limited.retry_after_secs(), Some(30));
        assert_eq!(BoxDiceError::Authentication.retry_after_secs(), None);
    }

    #[test]
    fn api_error_message_includes_status_text() {
        let error = BoxDiceError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            status_text: "Internal Server Error".to_owned(),
            body: None,
        };
        assert_eq!(
            error.to_string(),
            "API request failed: Internal Server Error"
        );
        assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
