pub mod coupons;
pub mod download_coupons;
pub mod products;
pub mod rocket_growth;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Listing order accepted by paged coupon endpoints.
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Continuation token of a paged response (`data.nextToken`), if any.
///
/// Callers pass it back in the next query to fetch the following page.
pub fn next_token(response: &Value) -> Option<&str> {
    response
        .get("data")?
        .get("nextToken")?
        .as_str()
        .filter(|token| !token.is_empty())
}
