//! Vendor credential set.

use super::ConfigError;

/// Environment variable holding the HMAC secret key.
pub const SECRET_KEY_ENV: &str = "COUPANG_SECRET_KEY";
/// Environment variable holding the access key.
pub const ACCESS_KEY_ENV: &str = "COUPANG_ACCESS_KEY";
/// Environment variable holding the vendor id.
pub const VENDOR_ID_ENV: &str = "COUPANG_VENDOR_ID";

/// The three values every signed call needs.
///
/// Built once at startup and never mutated; clone or share it freely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    secret_key: String,
    access_key: String,
    vendor_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_key", &"<redacted>")
            .field("access_key", &self.access_key)
            .field("vendor_id", &self.vendor_id)
            .finish()
    }
}

impl Credentials {
    /// Validate and build a credential set.
    ///
    /// One pair of surrounding quote characters is stripped from every value.
    /// A value that is empty after stripping counts as missing.
    pub fn new(
        secret_key: impl AsRef<str>,
        access_key: impl AsRef<str>,
        vendor_id: impl AsRef<str>,
    ) -> Result<Self, ConfigError> {
        Self::from_parts(
            Some(secret_key.as_ref()),
            Some(access_key.as_ref()),
            Some(vendor_id.as_ref()),
        )
    }

    /// Build from optional values, reporting the first missing one.
    ///
    /// Values are checked in the order secret key, access key, vendor id.
    pub fn from_parts(
        secret_key: Option<&str>,
        access_key: Option<&str>,
        vendor_id: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let secret_key = required("secret key", secret_key)?;
        let access_key = required("access key", access_key)?;
        let vendor_id = required("vendor id", vendor_id)?;

        // Both end up inside an HTTP header or URL path.
        if !access_key.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(ConfigError::InvalidCredential {
                name: "access key",
                reason: "must be printable ASCII without spaces",
            });
        }
        if !vendor_id.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(ConfigError::InvalidCredential {
                name: "vendor id",
                reason: "must be printable ASCII without spaces",
            });
        }

        Ok(Self {
            secret_key,
            access_key,
            vendor_id,
        })
    }

    /// Read `COUPANG_SECRET_KEY`, `COUPANG_ACCESS_KEY` and `COUPANG_VENDOR_ID`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = std::env::var(SECRET_KEY_ENV).ok();
        let access_key = std::env::var(ACCESS_KEY_ENV).ok();
        let vendor_id = std::env::var(VENDOR_ID_ENV).ok();
        Self::from_parts(
            secret_key.as_deref(),
            access_key.as_deref(),
            vendor_id.as_deref(),
        )
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    match value.map(strip_quotes) {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(ConfigError::MissingCredential(name)),
    }
}

/// Remove one leading and one trailing `'` or `"`, independently.
pub fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}
