//! Runtime configuration for the Coupang client.
//!
//! These are the validated values the signer and dispatcher consume. Reading
//! them from files is left to the binary; this module only checks and holds
//! them.

mod client;
mod credentials;

pub use client::{ClientConfig, DEFAULT_BASE_URL};
pub use credentials::{
    ACCESS_KEY_ENV, Credentials, SECRET_KEY_ENV, VENDOR_ID_ENV, strip_quotes,
};

use thiserror::Error;

/// Errors that make the client impossible to start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required credential: {0}")]
    MissingCredential(&'static str),

    #[error("invalid credential {name}: {reason}")]
    InvalidCredential {
        name: &'static str,
        reason: &'static str,
    },

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("base url must be a bare origin without path, query or fragment: {0}")]
    BaseUrlNotOrigin(String),
}
