//! Download coupons (claimed by customers before use).

use crate::objects::download_coupons::{
    DownloadCouponItemsRequest, DownloadCouponRequest, ExpireDownloadCouponRequest,
};
use crate::request::{Method, QueryString, Request, segment};

const ROOT: &str = "/v2/providers/marketplace_openapi/apis/api/v1";

/// `POST .../coupons`
pub fn create_download_coupon(body: &DownloadCouponRequest) -> Result<Request, serde_json::Error> {
    Request::new(Method::Post, format!("{ROOT}/coupons")).with_json(body)
}

/// `PUT .../coupons/expire`
pub fn expire_download_coupon(
    body: &ExpireDownloadCouponRequest,
) -> Result<Request, serde_json::Error> {
    Request::new(Method::Put, format!("{ROOT}/coupons/expire")).with_json(body)
}

/// `PUT .../coupon-items`
pub fn create_download_coupon_items(
    body: &DownloadCouponItemsRequest,
) -> Result<Request, serde_json::Error> {
    Request::new(Method::Put, format!("{ROOT}/coupon-items")).with_json(body)
}

/// `GET .../coupons/transactionStatus?requestTransactionId=...`
pub fn get_download_coupon_request_status(request_transaction_id: &str) -> Request {
    Request::get(format!("{ROOT}/coupons/transactionStatus")).with_query(
        QueryString::new().push("requestTransactionId", request_transaction_id),
    )
}

/// `GET .../coupons/{couponId}`
pub fn get_download_coupon(coupon_id: i64) -> Request {
    Request::get(format!("{ROOT}/coupons/{}", segment(coupon_id)))
}
