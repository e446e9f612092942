//! Instant discount coupon, budget and contract types.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::SortOrder;
use crate::request::QueryString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Lifecycle state of an instant discount coupon or coupon item.
pub enum CouponStatus {
    Standby,
    Applied,
    Paused,
    Expired,
}

impl CouponStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CouponStatus::Standby => "STANDBY",
            CouponStatus::Applied => "APPLIED",
            CouponStatus::Paused => "PAUSED",
            CouponStatus::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// How an instant discount coupon computes its discount.
pub enum InstantDiscountType {
    /// Percentage off.
    Rate,
    FixedWithQuantity,
    /// Fixed amount off.
    Price,
}

/// Body for creating an instant discount coupon.
///
/// The contract must already exist with a budget set in WING.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstantCouponRequest {
    pub contract_id: i64,
    /// Promotion name, at most 45 characters.
    pub name: String,
    pub max_discount_price: i64,
    pub discount: i64,
    /// `YYYY-MM-DD HH:MM:SS`
    pub start_at: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub end_at: String,
    #[serde(rename = "type")]
    pub discount_type: InstantDiscountType,
    /// Restrict the coupon to Rocket WOW members.
    #[serde(serialize_with = "bool_as_string", deserialize_with = "bool_from_string")]
    pub wow_exclusive: bool,
}

/// Body for attaching vendor items (option ids) to an instant coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponItemsRequest {
    /// Up to 10,000 option ids per call.
    pub vendor_items: Vec<u64>,
}

/// Filter for coupon and coupon-item listings by status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponStatusQuery {
    pub status: CouponStatus,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<SortOrder>,
}

impl CouponStatusQuery {
    pub fn new(status: CouponStatus) -> Self {
        Self {
            status,
            page: None,
            size: None,
            sort: None,
        }
    }

    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push("status", self.status)
            .push_opt("page", self.page)
            .push_opt("size", self.size)
            .push_opt("sort", self.sort)
    }
}

/// Filter for coupon listings by order id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponOrderQuery {
    pub order_id: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<SortOrder>,
}

impl CouponOrderQuery {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            page: None,
            size: None,
            sort: None,
        }
    }

    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push("orderId", &self.order_id)
            .push_opt("page", self.page)
            .push_opt("size", self.size)
            .push_opt("sort", self.sort)
    }
}

/// Budget lookup filter. Leaving both unset lists every contract for the
/// current month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetQuery {
    /// `-1` selects the free contract.
    pub contract_id: Option<i64>,
    /// `YYYY-MM`
    pub target_month: Option<String>,
}

impl BudgetQuery {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push_opt("contractId", self.contract_id)
            .push_opt("targetMonth", self.target_month.as_deref())
    }
}

fn bool_as_string<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}

fn bool_from_string<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }
    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => text
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected \"true\" or \"false\", got {text:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_coupon() -> InstantCouponRequest {
        InstantCouponRequest {
            contract_id: 10,
            name: "신규 쿠폰 20240101".to_string(),
            max_discount_price: 1000,
            discount: 10,
            start_at: "2024-01-01 00:00:00".to_string(),
            end_at: "2024-12-31 23:59:59".to_string(),
            discount_type: InstantDiscountType::Price,
            wow_exclusive: false,
        }
    }

    #[test]
    fn test_instant_coupon_wire_names() {
        let json = serde_json::to_value(sample_coupon()).unwrap();
        assert_eq!(json["contractId"], 10);
        assert_eq!(json["maxDiscountPrice"], 1000);
        assert_eq!(json["startAt"], "2024-01-01 00:00:00");
        assert_eq!(json["type"], "PRICE");
        assert_eq!(json["wowExclusive"], "false");
        assert!(json.get("vendorId").is_none());
    }

    #[test]
    fn test_instant_coupon_accepts_bool_or_string_flag() {
        let mut json = serde_json::to_value(sample_coupon()).unwrap();
        json["wowExclusive"] = serde_json::json!(true);
        let parsed: InstantCouponRequest = serde_json::from_value(json.clone()).unwrap();
        assert!(parsed.wow_exclusive);

        json["wowExclusive"] = serde_json::json!("false");
        let parsed: InstantCouponRequest = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sample_coupon());
    }

    #[test]
    fn test_fixed_with_quantity_name() {
        assert_eq!(
            serde_json::to_value(InstantDiscountType::FixedWithQuantity).unwrap(),
            "FIXED_WITH_QUANTITY"
        );
    }

    #[test]
    fn test_coupon_status_query() {
        let query = CouponStatusQuery {
            page: Some(0),
            size: Some(20),
            sort: Some(SortOrder::Desc),
            ..CouponStatusQuery::new(CouponStatus::Applied)
        };
        assert_eq!(query.to_query().encode(), "status=APPLIED&page=0&size=20&sort=desc");
    }

    #[test]
    fn test_budget_query_free_contract() {
        let query = BudgetQuery {
            contract_id: Some(-1),
            target_month: Some("2024-11".to_string()),
        };
        assert_eq!(query.to_query().encode(), "contractId=-1&targetMonth=2024-11");
        assert!(BudgetQuery::default().to_query().is_empty());
    }
}
