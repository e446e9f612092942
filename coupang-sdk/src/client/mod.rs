//! Signing and dispatch of vendor requests.
//!
//! Gated behind the `client` cargo feature so crates that only need the
//! descriptors and the signer do not pull in `reqwest`.

mod dispatcher;
mod transport;

pub use dispatcher::{
    CONTENT_TYPE_JSON, CoupangClient, EXTENDED_TIMEOUT_HEADER, EXTENDED_TIMEOUT_MS, RETRY_DELAY,
    decode_json,
};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

use reqwest::StatusCode;

use crate::config::ConfigError;
use crate::request::Method;

/// The request never produced an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// DNS, TLS, connect, timeout or body read failure inside `reqwest`.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a non-`reqwest` transport.
    #[error("connection error: {0}")]
    Connection(String),
}

/// A 2xx response whose body could not be turned into JSON.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported response charset: {0}")]
    UnsupportedCharset(String),

    #[error("response body is not valid {charset}")]
    Malformed { charset: &'static str },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by [`CoupangClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The client could not be configured.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The gateway answered with a non-2xx status code.
    #[error("api error: {method} {url} returned {status}, body: {body}")]
    Api {
        method: Method,
        status: StatusCode,
        url: String,
        body: String,
    },

    /// A successful response could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The gateway URL could not be joined with the request path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The path has a `.` or `..` segment that URL normalization would drop.
    #[error("path contains a dot segment: {0}")]
    DotSegment(String),

    /// The authorization value is not a valid header value.
    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(err))
    }
}

impl ClientError {
    /// Whether the one-shot retry applies.
    ///
    /// Transport failures and every 4xx/5xx status are retried alike.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Api { .. })
    }

    /// The HTTP status, for API errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(ClientError::Transport(TransportError::Connection("refused".into())).is_retryable());
        assert!(
            ClientError::Api {
                method: Method::Get,
                status: StatusCode::BAD_REQUEST,
                url: "https://api-gateway.coupang.com/x".into(),
                body: String::new(),
            }
            .is_retryable()
        );
        assert!(!ClientError::Decode(DecodeError::UnsupportedCharset("euc-kr".into())).is_retryable());
        assert!(!ClientError::Config(ConfigError::MissingCredential("vendor id")).is_retryable());
        assert!(!ClientError::DotSegment("/rg/order/..".into()).is_retryable());
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::Api {
            method: Method::Put,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://api-gateway.coupang.com/x".into(),
            body: "{\"code\":\"ERROR\"}".into(),
        };
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            err.to_string(),
            "api error: PUT https://api-gateway.coupang.com/x returned 500 Internal Server Error, body: {\"code\":\"ERROR\"}"
        );
    }
}
