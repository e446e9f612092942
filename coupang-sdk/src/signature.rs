//! CEA signature algorithm for the Coupang Open API.
//!
//! Every request carries an `Authorization` header of the form:
//!
//! ```text
//! CEA algorithm=HmacSHA256, access-key={access_key}, signed-date={signed_date}, signature={hex}
//! ```
//!
//! where `signed_date` is the UTC instant formatted as `yyMMdd'T'HHmmss'Z'` and
//! the signature is `HMAC-SHA256("{signed_date}{method}{path}{query}", secret_key)`
//! in lowercase hex. The fields of the message are concatenated without
//! separators; the query part is left out when the request has none.
//!
//! The signed date is part of the message, so a header is only valid for the
//! instant it was produced. Every transport attempt must be signed anew.

use time::{OffsetDateTime, UtcOffset};

use crate::config::Credentials;
use crate::request::Method;

/// Header name for the signed authorization value.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Literal scheme and algorithm prefix of every authorization value.
pub const AUTHORIZATION_SCHEME: &str = "CEA algorithm=HmacSHA256";

/// Source of the signing instant.
pub type Clock = fn() -> OffsetDateTime;

/// A computed authorization for one request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    /// `yyMMdd'T'HHmmss'Z'` instant embedded in the signed message.
    pub signed_date: String,
    /// Lowercase hex HMAC-SHA256 digest.
    pub signature: String,
    header: String,
}

impl Authorization {
    /// The full `Authorization` header value.
    pub fn header_value(&self) -> &str {
        &self.header
    }
}

/// Signs requests with a fixed access/secret key pair.
#[derive(Clone)]
pub struct Signer {
    access_key: String,
    key: ring::hmac::Key,
    clock: Clock,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("access_key", &self.access_key)
            .finish_non_exhaustive()
    }
}

impl Signer {
    /// Create a signer that reads the wall clock on every call.
    pub fn new(access_key: impl Into<String>, secret_key: impl AsRef<[u8]>) -> Self {
        Self {
            access_key: access_key.into(),
            key: ring::hmac::Key::new(ring::hmac::HMAC_SHA256, secret_key.as_ref()),
            clock: OffsetDateTime::now_utc,
        }
    }

    /// Create a signer from a loaded credential set.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(credentials.access_key(), credentials.secret_key())
    }

    /// Replace the time source (tests pin or step the clock with this).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Sign a request at the current instant.
    pub fn sign(&self, method: Method, path: &str, query: Option<&str>) -> Authorization {
        self.sign_at((self.clock)(), method, path, query)
    }

    /// Sign a request at the given instant.
    pub fn sign_at(
        &self,
        at: OffsetDateTime,
        method: Method,
        path: &str,
        query: Option<&str>,
    ) -> Authorization {
        let signed_date = format_signed_date(at);
        let message = canonical_message(&signed_date, method, path, query);
        let signature = hex::encode(ring::hmac::sign(&self.key, message.as_bytes()));
        let header = format_authorization(&self.access_key, &signed_date, &signature);
        Authorization {
            signed_date,
            signature,
            header,
        }
    }
}

/// Format an instant as `yyMMdd'T'HHmmss'Z'` in UTC.
pub fn format_signed_date(at: OffsetDateTime) -> String {
    let at = at.to_offset(UtcOffset::UTC);
    format!(
        "{:02}{:02}{:02}T{:02}{:02}{:02}Z",
        at.year().rem_euclid(100),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute(),
        at.second(),
    )
}

/// Build the string the signature is computed over.
///
/// An empty query is treated the same as no query.
pub fn canonical_message(
    signed_date: &str,
    method: Method,
    path: &str,
    query: Option<&str>,
) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{signed_date}{method}{path}{query}"),
        None => format!("{signed_date}{method}{path}"),
    }
}

/// `hex(HMAC-SHA256(message, secret_key))`.
pub fn compute_signature(secret_key: &[u8], message: &str) -> String {
    let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA256, secret_key);
    hex::encode(ring::hmac::sign(&key, message.as_bytes()))
}

/// Format the `Authorization` header value from its parts.
pub fn format_authorization(access_key: &str, signed_date: &str, signature: &str) -> String {
    format!(
        "{AUTHORIZATION_SCHEME}, access-key={access_key}, signed-date={signed_date}, signature={signature}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const BUDGETS_PATH: &str = "/v2/providers/fms/apis/api/v1/vendors/A00012345/budgets";

    #[test]
    fn test_signed_date_format() {
        assert_eq!(
            format_signed_date(datetime!(2024-01-05 03:04:05 UTC)),
            "240105T030405Z"
        );
        // Sub-second precision is dropped.
        assert_eq!(
            format_signed_date(datetime!(2031-12-31 23:59:59.999 UTC)),
            "311231T235959Z"
        );
    }

    #[test]
    fn test_signed_date_is_converted_to_utc() {
        assert_eq!(
            format_signed_date(datetime!(2024-01-05 12:04:05 +09:00)),
            "240105T030405Z"
        );
    }

    #[test]
    fn test_message_without_query() {
        let message = canonical_message("240105T030405Z", Method::Get, BUDGETS_PATH, None);
        assert_eq!(message, format!("240105T030405ZGET{BUDGETS_PATH}"));
    }

    #[test]
    fn test_message_with_query() {
        let message = canonical_message(
            "240105T030405Z",
            Method::Put,
            "/v2/providers/fms/apis/api/v1/vendors/A00012345/coupons/684245",
            Some("action=expire"),
        );
        assert_eq!(
            message,
            "240105T030405ZPUT/v2/providers/fms/apis/api/v1/vendors/A00012345/coupons/684245action=expire"
        );
    }

    #[test]
    fn test_empty_query_is_ignored() {
        assert_eq!(
            canonical_message("240105T030405Z", Method::Get, BUDGETS_PATH, Some("")),
            canonical_message("240105T030405Z", Method::Get, BUDGETS_PATH, None),
        );
    }

    #[test]
    fn test_hmac_sha256_rfc4231_vector() {
        assert_eq!(
            compute_signature(b"Jefe", "what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_sign_at_with_query() {
        let signer = Signer::new("access-123", "test-secret");
        let auth = signer.sign_at(
            datetime!(2024-01-05 03:04:05 UTC),
            Method::Get,
            BUDGETS_PATH,
            Some("contractId=10&targetMonth=2024-11"),
        );
        assert_eq!(auth.signed_date, "240105T030405Z");
        assert_eq!(
            auth.signature,
            "d582775c868a9a179d4d5290f0545a6a1a019874830021a6f8eb7048a4ed7a58"
        );
        assert_eq!(
            auth.header_value(),
            "CEA algorithm=HmacSHA256, access-key=access-123, signed-date=240105T030405Z, \
             signature=d582775c868a9a179d4d5290f0545a6a1a019874830021a6f8eb7048a4ed7a58"
        );
    }

    #[test]
    fn test_sign_at_without_query() {
        let signer = Signer::new("access-123", "test-secret");
        let auth = signer.sign_at(
            datetime!(2024-01-05 03:04:05 UTC),
            Method::Get,
            "/v2/providers/fms/apis/api/v1/vendors/A00012345/contracts",
            None,
        );
        assert_eq!(
            auth.signature,
            "64d1966f1ec868721f9487823c83a1435e50e2747e883f404a53ab5b6c8e85f5"
        );
    }

    #[test]
    fn test_header_has_four_fields_in_order() {
        let signer = Signer::new("ak", "sk");
        let auth = signer.sign(Method::Delete, "/x", None);
        let header = auth.header_value();
        assert!(header.starts_with("CEA algorithm=HmacSHA256, access-key="));

        let fields: Vec<&str> = header.split(", ").collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], "CEA algorithm=HmacSHA256");
        assert_eq!(fields[1], "access-key=ak");
        assert_eq!(fields[2], format!("signed-date={}", auth.signed_date));
        assert_eq!(fields[3], format!("signature={}", auth.signature));
        assert_eq!(auth.signature.len(), 64);
        assert!(auth.signature.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_same_instant_is_deterministic() {
        fn fixed() -> OffsetDateTime {
            datetime!(2024-06-01 00:00:00 UTC)
        }
        let signer = Signer::new("ak", "sk").with_clock(fixed);
        let a = signer.sign(Method::Post, "/coupons", None);
        let b = signer.sign(Method::Post, "/coupons", None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = Signer::new("visible-access", "hidden-secret");
        let debug = format!("{signer:?}");
        assert!(debug.contains("visible-access"));
        assert!(!debug.contains("hidden-secret"));
    }
}
