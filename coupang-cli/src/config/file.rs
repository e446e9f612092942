//! TOML file configuration structures.
//!
//! These structs directly map to the `coupang.toml` file format. Every field
//! is optional here; required values are enforced when the runtime config is
//! built, so a missing key yields a "missing credential" error rather than a
//! parse error.

use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default, alias = "DEFAULT")]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub client: ClientSection,
}

/// Vendor credentials. The upper-case aliases match the legacy
/// `coupang.ini` key names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(alias = "SECRETKEY")]
    pub secret_key: Option<String>,
    #[serde(alias = "ACCESSKEY")]
    pub access_key: Option<String>,
    #[serde(alias = "VENDOR_ID")]
    pub vendor_id: Option<String>,
}

/// Transport settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    /// Gateway root; defaults to the public Coupang gateway.
    pub base_url: Option<String>,
    /// Skip TLS certificate verification. Insecure; defaults to `false`.
    #[serde(default)]
    pub insecure_skip_verify: bool,
    /// Per-attempt timeout in seconds.
    pub timeout_secs: Option<u64>,
}
