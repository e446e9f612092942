//! Sign, send, retry once, decode.
//!
//! Each call walks `signed -> sent -> {success, failed once}`. A first failure
//! (transport error or non-2xx status) waits [`RETRY_DELAY`], signs again with
//! a fresh timestamp and re-sends the same descriptor once. Decode failures on
//! a 2xx response are never retried.

use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, error, warn};
use url::Url;

use super::transport::{HttpRequest, ReqwestTransport, Transport};
use super::{ClientError, DecodeError};
use crate::config::{ClientConfig, Credentials};
use crate::request::{Request, has_dot_segment};
use crate::signature::Signer;

/// Pause before the single retry.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// `Content-Type` sent with every request, body or not.
pub const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";

/// Gateway hint that raises its upstream timeout.
pub const EXTENDED_TIMEOUT_HEADER: HeaderName = HeaderName::from_static("x-extended-timeout");

/// Value of [`EXTENDED_TIMEOUT_HEADER`], in milliseconds.
pub const EXTENDED_TIMEOUT_MS: &str = "90000";

/// Typed entry point for the Coupang Open API.
///
/// Build a [`Request`] with one of the functions in [`crate::endpoints`] and
/// hand it to [`send`](Self::send) or [`call`](Self::call). The client holds
/// only immutable state and can be cloned and shared across tasks.
#[derive(Debug, Clone)]
pub struct CoupangClient<T = ReqwestTransport> {
    transport: T,
    signer: Signer,
    base_url: Url,
    vendor_id: String,
}

impl CoupangClient<ReqwestTransport> {
    /// Create a client that talks to the gateway through `reqwest`.
    pub fn new(credentials: &Credentials, config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(credentials, config, transport))
    }
}

impl<T: Transport> CoupangClient<T> {
    /// Create a client over any [`Transport`].
    pub fn with_transport(credentials: &Credentials, config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            signer: Signer::from_credentials(credentials),
            base_url: config.base_url,
            vendor_id: credentials.vendor_id().to_owned(),
        }
    }

    /// Replace the signer (e.g. one with a pinned clock).
    pub fn with_signer(mut self, signer: Signer) -> Self {
        self.signer = signer;
        self
    }

    /// The vendor id from the loaded credentials.
    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    /// Dispatch `request`, surfacing the final failure.
    ///
    /// Returns the parsed JSON of the first successful attempt. When both
    /// attempts fail the second failure is returned.
    pub async fn send(&self, request: &Request) -> Result<Value, ClientError> {
        match self.attempt(request).await {
            Err(err) if err.is_retryable() => {
                warn!(
                    method = %request.method(),
                    path = request.path(),
                    error = %err,
                    "request failed, retrying in {}s",
                    RETRY_DELAY.as_secs()
                );
                tokio::time::sleep(RETRY_DELAY).await;
                self.attempt(request).await
            }
            result => result,
        }
    }

    /// Dispatch `request`, turning a twice-failed exchange into `Ok(None)`.
    ///
    /// This mirrors callers that must never stop on a vendor outage. Note that
    /// `None` does not tell "both attempts failed" apart from anything else the
    /// caller might treat as empty; use [`send`](Self::send) when the cause
    /// matters. Decode and setup errors are still returned as `Err`.
    pub async fn call(&self, request: &Request) -> Result<Option<Value>, ClientError> {
        match self.send(request).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_retryable() => {
                error!(
                    method = %request.method(),
                    path = request.path(),
                    error = %err,
                    "request failed after retry, returning no response"
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn attempt(&self, request: &Request) -> Result<Value, ClientError> {
        let http_request = self.prepare(request)?;
        let method = request.method();
        let url = http_request.url.clone();
        debug!(%method, %url, "sending request");

        let response = match self.transport.execute(http_request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(%method, %url, error = %err, "transport error");
                return Err(err.into());
            }
        };

        if !response.status.is_success() {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            warn!(
                %method,
                status = response.status.as_u16(),
                reason = response.status.canonical_reason().unwrap_or(""),
                %url,
                headers = ?response.headers,
                body = %body,
                "vendor returned an error status"
            );
            return Err(ClientError::Api {
                method,
                status: response.status,
                url: url.to_string(),
                body,
            });
        }

        decode_json(&response.headers, &response.body).map_err(|err| {
            error!(%method, %url, error = %err, "failed to decode response");
            ClientError::Decode(err)
        })
    }

    /// Sign `request` at the current instant and build the wire request.
    fn prepare(&self, request: &Request) -> Result<HttpRequest, ClientError> {
        if has_dot_segment(request.path()) {
            return Err(ClientError::DotSegment(request.path().to_owned()));
        }
        let url = self.base_url.join(&request.path_and_query())?;
        // The gateway recomputes the HMAC over the serialized URL, so sign
        // that rather than the caller's possibly unencoded strings.
        let authorization = self.signer.sign(request.method(), url.path(), url.query());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(authorization.header_value())?,
        );
        headers.insert(
            EXTENDED_TIMEOUT_HEADER,
            HeaderValue::from_static(EXTENDED_TIMEOUT_MS),
        );

        Ok(HttpRequest {
            method: request.method(),
            url,
            headers,
            body: request.body().cloned(),
        })
    }
}

/// Decode a response body as JSON using the charset from `Content-Type`.
///
/// A missing charset means UTF-8. Labels are resolved the way browsers do,
/// so `EUC-KR` and friends decode; an unknown label is an error.
pub fn decode_json(headers: &HeaderMap, body: &[u8]) -> Result<Value, DecodeError> {
    let encoding = match response_charset(headers) {
        Some(charset) => Encoding::for_label(charset.as_bytes())
            .ok_or(DecodeError::UnsupportedCharset(charset))?,
        None => UTF_8,
    };
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(DecodeError::Malformed {
            charset: encoding.name(),
        })?;
    Ok(serde_json::from_str(&text)?)
}

fn response_charset(headers: &HeaderMap) -> Option<String> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.trim().split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_owned())
    })
}
