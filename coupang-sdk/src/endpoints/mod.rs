//! Descriptor builders for every supported vendor endpoint.
//!
//! Each function maps named parameters to a [`Request`](crate::request::Request)
//! and does no I/O. Send the result with
//! [`CoupangClient`](crate::client::CoupangClient).

pub mod budgets;
pub mod download_coupons;
pub mod instant_coupons;
pub mod products;
pub mod rocket_growth;
