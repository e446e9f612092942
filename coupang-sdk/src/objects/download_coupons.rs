//! Download coupon request bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DownloadCouponType {
    #[default]
    Download,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DownloadDiscountType {
    Rate,
    Price,
}

/// One discount rule of a download coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadCouponPolicy {
    pub title: String,
    pub type_of_discount: DownloadDiscountType,
    pub description: String,
    pub minimum_price: i64,
    pub discount: i64,
    pub maximum_discount_price: i64,
    pub maximum_per_daily: i64,
}

/// Body for creating a download coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadCouponRequest {
    pub title: String,
    pub contract_id: i64,
    #[serde(default)]
    pub coupon_type: DownloadCouponType,
    /// `YYYY-MM-DD HH:MM:SS`
    pub start_date: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub end_date: String,
    /// WING login account.
    pub user_id: String,
    pub policies: Vec<DownloadCouponPolicy>,
}

/// Body for expiring a download coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpireDownloadCouponRequest {
    pub coupon_id: i64,
    pub user_id: String,
}

/// Vendor items to attach to one download coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadCouponItem {
    pub coupon_id: i64,
    pub user_id: String,
    pub vendor_item_ids: Vec<u64>,
}

/// Body for attaching items to one or more download coupons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadCouponItemsRequest {
    pub coupon_items: Vec<DownloadCouponItem>,
}
