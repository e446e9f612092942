//! Seller product listing filter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::request::QueryString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    ApprovalRequested,
    Approved,
    OnSale,
    Suspension,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::ApprovalRequested => "APPROVAL_REQUESTED",
            ProductStatus::Approved => "APPROVED",
            ProductStatus::OnSale => "ON_SALE",
            ProductStatus::Suspension => "SUSPENSION",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paged seller product listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub next_token: Option<String>,
    /// Defaults to 50 on the vendor side, at most 100.
    pub max_per_page: Option<u32>,
    pub status: Option<ProductStatus>,
    pub seller_product_name: Option<String>,
}

impl ProductQuery {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push_opt("nextToken", self.next_token.as_deref())
            .push_opt("maxPerPage", self.max_per_page)
            .push_opt("status", self.status)
            .push_opt("sellerProductName", self.seller_product_name.as_deref())
    }
}
