//! Transport configuration.

use std::time::Duration;

use url::Url;

use super::ConfigError;

/// The vendor gateway every call targets.
pub const DEFAULT_BASE_URL: &str = "https://api-gateway.coupang.com";

/// Settings for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Gateway origin (scheme, host and port). Endpoint paths are absolute,
    /// so any path on this URL is replaced rather than prefixed; use
    /// [`with_base_url`](Self::with_base_url) to have that checked.
    pub base_url: Url,
    /// Accept any TLS certificate and hostname from the gateway.
    ///
    /// **Insecure.** Off by default; only turn it on for environments that
    /// intercept TLS and cannot install their root certificate.
    pub insecure_skip_verify: bool,
    /// Upper bound for a single attempt. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            insecure_skip_verify: false,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Parse `base_url` and use it as the gateway origin.
    ///
    /// A path other than `/`, a query or a fragment is rejected.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url)?;
        if url.cannot_be_a_base()
            || url.path() != "/"
            || url.query().is_some()
            || url.fragment().is_some()
        {
            return Err(ConfigError::BaseUrlNotOrigin(url.to_string()));
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_insecure_skip_verify(mut self, insecure: bool) -> Self {
        self.insecure_skip_verify = insecure;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default gateway url")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_verify_tls() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "https://api-gateway.coupang.com/");
        assert!(!config.insecure_skip_verify);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ClientConfig::default().with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_base_url_must_be_an_origin() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:8080/")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");

        for url in [
            "https://proxy.test/coupang",
            "https://proxy.test/coupang/",
            "https://proxy.test/?x=1",
            "https://proxy.test/#frag",
        ] {
            let err = ClientConfig::default().with_base_url(url).unwrap_err();
            assert!(
                matches!(err, ConfigError::BaseUrlNotOrigin(_)),
                "{url} was accepted"
            );
        }
    }
}
