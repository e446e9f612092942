//! Coupon budgets and contracts.

use crate::objects::coupons::BudgetQuery;
use crate::request::{QueryString, Request, segment};

fn vendor_root(vendor_id: &str) -> String {
    format!("/v2/providers/fms/apis/api/v1/vendors/{}", segment(vendor_id))
}

/// `GET .../vendors/{vendorId}/budgets` – budget status per contract and month.
pub fn get_budget_status(vendor_id: &str, query: &BudgetQuery) -> Request {
    Request::get(format!("{}/budgets", vendor_root(vendor_id))).with_query(query.to_query())
}

/// `GET .../vendors/{vendorId}/contract` – one contract.
pub fn get_contract(vendor_id: &str, contract_id: i64) -> Request {
    Request::get(format!("{}/contract", vendor_root(vendor_id)))
        .with_query(QueryString::new().push("contractId", contract_id))
}

/// `GET .../vendors/{vendorId}/contracts` – every contract.
pub fn get_contracts(vendor_id: &str) -> Request {
    Request::get(format!("{}/contracts", vendor_root(vendor_id)))
}
