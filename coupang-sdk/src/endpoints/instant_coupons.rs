//! Instant discount coupons.
//!
//! Creation, expiry and item attachment are processed asynchronously by the
//! vendor; each returns a `requestedId` to poll with
//! [`get_instant_discount_request_status`].

use crate::objects::coupons::{
    CouponItemsRequest, CouponOrderQuery, CouponStatusQuery, InstantCouponRequest,
};
use crate::request::{Method, Request, segment};

fn vendor_root(version: &str, vendor_id: &str) -> String {
    format!(
        "/v2/providers/fms/apis/api/{version}/vendors/{}",
        segment(vendor_id)
    )
}

/// `POST .../v2/vendors/{vendorId}/coupon`
pub fn create_instant_discount_coupon(
    vendor_id: &str,
    body: &InstantCouponRequest,
) -> Result<Request, serde_json::Error> {
    Request::new(Method::Post, format!("{}/coupon", vendor_root("v2", vendor_id))).with_json(body)
}

/// `PUT .../vendors/{vendorId}/coupons/{couponId}?action=expire`
///
/// Coupons already issued to customers are unaffected.
pub fn expire_instant_discount_coupon(vendor_id: &str, coupon_id: i64) -> Request {
    Request::new(
        Method::Put,
        format!("{}/coupons/{coupon_id}", vendor_root("v1", vendor_id)),
    )
    .with_query("action=expire")
}

/// `GET .../vendors/{vendorId}/requested/{requestedId}`
pub fn get_instant_discount_request_status(vendor_id: &str, requested_id: &str) -> Request {
    Request::get(format!(
        "{}/requested/{}",
        vendor_root("v1", vendor_id),
        segment(requested_id)
    ))
}

/// `POST .../vendors/{vendorId}/coupons/{couponId}/items`
pub fn create_instant_discount_coupon_items(
    vendor_id: &str,
    coupon_id: i64,
    body: &CouponItemsRequest,
) -> Result<Request, serde_json::Error> {
    Request::new(
        Method::Post,
        format!("{}/coupons/{coupon_id}/items", vendor_root("v1", vendor_id)),
    )
    .with_json(body)
}

/// `GET .../vendors/{vendorId}/coupons?status=...`
pub fn get_instant_discount_coupons_by_status(vendor_id: &str, query: &CouponStatusQuery) -> Request {
    Request::get(format!("{}/coupons", vendor_root("v1", vendor_id))).with_query(query.to_query())
}

/// `GET .../vendors/{vendorId}/coupons?orderId=...`
pub fn get_instant_discount_coupons_by_order_id(vendor_id: &str, query: &CouponOrderQuery) -> Request {
    Request::get(format!("{}/coupons", vendor_root("v1", vendor_id))).with_query(query.to_query())
}

/// `GET .../vendors/{vendorId}/coupons/{couponId}/items?status=...`
pub fn get_instant_discount_coupon_items_by_status(
    vendor_id: &str,
    coupon_id: i64,
    query: &CouponStatusQuery,
) -> Request {
    Request::get(format!(
        "{}/coupons/{coupon_id}/items",
        vendor_root("v1", vendor_id)
    ))
    .with_query(query.to_query())
}
