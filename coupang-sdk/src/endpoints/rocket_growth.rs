//! Rocket Growth orders and warehouse inventory.

use crate::objects::rocket_growth::{InventoryQuery, OrderQuery};
use crate::request::{Request, segment};

fn vendor_root(vendor_id: &str) -> String {
    format!(
        "/v2/providers/rg_open_api/apis/api/v1/vendors/{}/rg",
        segment(vendor_id)
    )
}

/// `GET .../vendors/{vendorId}/rg/orders` – orders paid within a date range.
pub fn get_orders(vendor_id: &str, query: &OrderQuery) -> Request {
    Request::get(format!("{}/orders", vendor_root(vendor_id))).with_query(query.to_query())
}

/// `GET .../vendors/{vendorId}/rg/order/{orderId}`
pub fn get_order_detail(vendor_id: &str, order_id: &str) -> Request {
    Request::get(format!(
        "{}/order/{}",
        vendor_root(vendor_id),
        segment(order_id)
    ))
}

/// `GET .../vendors/{vendorId}/rg/inventory/summaries` – stock held in Rocket
/// warehouses.
pub fn get_inventory(vendor_id: &str, query: &InventoryQuery) -> Request {
    Request::get(format!("{}/inventory/summaries", vendor_root(vendor_id)))
        .with_query(query.to_query())
}
