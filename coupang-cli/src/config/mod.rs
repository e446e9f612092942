//! Configuration module for the `coupang` binary.
//!
//! Handles loading configuration from a TOML file, environment variables and
//! CLI flags, then hands validated values to the SDK.

pub mod file;

use crate::config::file::FileConfig;
use coupang_sdk::config::{
    ACCESS_KEY_ENV, ClientConfig, ConfigError as SdkConfigError, Credentials, SECRET_KEY_ENV,
    VENDOR_ID_ENV,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File used when no `--config` is given and it exists.
pub const DEFAULT_CONFIG_PATH: &str = "./coupang.toml";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SdkConfigError),
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub credentials: Credentials,
    pub client: ClientConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    insecure_override: bool,
}

impl ConfigLoader {
    /// Create a new config loader.
    ///
    /// `insecure_override` can only turn TLS verification off, never back on.
    pub fn new(config_path: Option<&Path>, insecure_override: bool) -> Self {
        Self {
            config_path: config_path.map(Path::to_path_buf),
            insecure_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file (an absent default file counts as empty)
    /// 2. Apply environment variable overrides
    /// 3. Apply CLI overrides
    /// 4. Validate credentials and the base URL
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let file_config = self.read_file()?;
        let mut loaded = resolve(file_config, |name| std::env::var(name).ok())?;
        if self.insecure_override {
            loaded.client.insecure_skip_verify = true;
        }
        Ok(loaded)
    }

    fn read_file(&self) -> Result<FileConfig, ConfigError> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    tracing::debug!("no config file, using environment only");
                    return Ok(FileConfig::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::IoError {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = ?path, "config file loaded");
        Ok(config)
    }
}

/// Merge file values with environment overrides and validate them.
///
/// Environment values take precedence over the file.
pub fn resolve(
    file_config: FileConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<LoadedConfig, ConfigError> {
    let creds = file_config.credentials;
    let secret_key = env(SECRET_KEY_ENV).or(creds.secret_key);
    let access_key = env(ACCESS_KEY_ENV).or(creds.access_key);
    let vendor_id = env(VENDOR_ID_ENV).or(creds.vendor_id);

    let credentials = Credentials::from_parts(
        secret_key.as_deref(),
        access_key.as_deref(),
        vendor_id.as_deref(),
    )?;

    let mut client = ClientConfig::default()
        .with_insecure_skip_verify(file_config.client.insecure_skip_verify);
    if let Some(base_url) = file_config.client.base_url.as_deref() {
        client = client.with_base_url(base_url)?;
    }
    if let Some(secs) = file_config.client.timeout_secs {
        client = client.with_timeout(Duration::from_secs(secs));
    }

    Ok(LoadedConfig {
        credentials,
        client,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::{ClientSection, CredentialsConfig};
    use std::collections::HashMap;

    fn file_with(secret: Option<&str>, access: Option<&str>, vendor: Option<&str>) -> FileConfig {
        FileConfig {
            credentials: CredentialsConfig {
                secret_key: secret.map(str::to_owned),
                access_key: access.map(str::to_owned),
                vendor_id: vendor.map(str::to_owned),
            },
            client: ClientSection::default(),
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_from_file() {
        let loaded = resolve(
            file_with(Some("\"secret\""), Some("'access'"), Some("A00012345")),
            no_env,
        )
        .unwrap();
        assert_eq!(loaded.credentials.secret_key(), "secret");
        assert_eq!(loaded.credentials.access_key(), "access");
        assert_eq!(
            loaded.client.base_url.as_str(),
            "https://api-gateway.coupang.com/"
        );
        assert!(!loaded.client.insecure_skip_verify);
    }

    #[test]
    fn test_environment_overrides_file() {
        let env: HashMap<&str, String> =
            HashMap::from([(VENDOR_ID_ENV, "B99999999".to_string())]);
        let loaded = resolve(
            file_with(Some("secret"), Some("access"), Some("A00012345")),
            |name| env.get(name).cloned(),
        )
        .unwrap();
        assert_eq!(loaded.credentials.vendor_id(), "B99999999");
    }

    #[test]
    fn test_missing_credential_is_fatal() {
        let err = resolve(file_with(Some("secret"), None, Some("A00012345")), no_env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SdkConfigError::MissingCredential("access key"))
        ));
        assert_eq!(err.to_string(), "missing required credential: access key");
    }

    #[test]
    fn test_client_section() {
        let mut file = file_with(Some("s"), Some("a"), Some("v"));
        file.client = ClientSection {
            base_url: Some("https://gateway.test".to_string()),
            insecure_skip_verify: true,
            timeout_secs: Some(45),
        };
        let loaded = resolve(file, no_env).unwrap();
        assert_eq!(loaded.client.base_url.as_str(), "https://gateway.test/");
        assert!(loaded.client.insecure_skip_verify);
        assert_eq!(loaded.client.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_invalid_base_url() {
        let mut file = file_with(Some("s"), Some("a"), Some("v"));
        file.client.base_url = Some("::not a url".to_string());
        let err = resolve(file, no_env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SdkConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let loader = ConfigLoader::new(Some(Path::new("/nonexistent/coupang.toml")), false);
        let err = loader.load().unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }
}
