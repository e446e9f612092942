//! Signed client for the Coupang Open API.
//!
//! Endpoint functions in [`endpoints`] describe a call as a [`Request`]. The
//! [`client::CoupangClient`] signs it with the CEA scheme from [`signature`],
//! sends it to the gateway, retries once after a one second pause, and returns
//! the decoded JSON.
//!
//! ```ignore
//! use coupang_sdk::client::CoupangClient;
//! use coupang_sdk::config::{ClientConfig, Credentials};
//! use coupang_sdk::endpoints::budgets;
//!
//! let credentials = Credentials::from_env()?;
//! let client = CoupangClient::new(&credentials, ClientConfig::default())?;
//! let contracts = client.send(&budgets::get_contracts(client.vendor_id())).await?;
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod endpoints;
pub mod objects;
pub mod request;
pub mod signature;

pub use request::{Method, Request};
