//! Subcommands and their mapping onto endpoint descriptors.

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use coupang_sdk::endpoints::{budgets, download_coupons, instant_coupons, products, rocket_growth};
use coupang_sdk::objects::coupons::BudgetQuery;
use coupang_sdk::objects::products::{ProductQuery, ProductStatus};
use coupang_sdk::objects::rocket_growth::{InventoryQuery, OrderQuery};
use coupang_sdk::{Method, Request};
use time::Date;
use time::macros::format_description;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Coupon budget status per contract
    Budgets {
        /// Contract id, -1 for the free contract
        #[arg(long, allow_hyphen_values = true)]
        contract_id: Option<i64>,
        /// Budget month (YYYY-MM)
        #[arg(long)]
        target_month: Option<String>,
    },
    /// List all contracts
    Contracts,
    /// Show one contract
    Contract { contract_id: i64 },
    /// Status of an asynchronous instant coupon request
    CouponRequestStatus { requested_id: String },
    /// Show one download coupon
    DownloadCoupon { coupon_id: i64 },
    /// Rocket Growth orders paid within a date range
    RgOrders {
        /// First paid date (YYYYMMDD or YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: Date,
        /// Last paid date (YYYYMMDD or YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: Date,
        #[arg(long)]
        next_token: Option<String>,
    },
    /// Show one Rocket Growth order
    RgOrder { order_id: String },
    /// Rocket warehouse inventory
    Inventory {
        #[arg(long)]
        vendor_item_id: Option<u64>,
        #[arg(long)]
        next_token: Option<String>,
    },
    /// One page of seller products
    Products {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(long)]
        max_per_page: Option<u32>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        next_token: Option<String>,
    },
    /// Show one seller product
    Product { seller_product_id: i64 },
    /// Rocket Growth display category tree
    Categories,
    /// Metadata of one display category
    CategoryMeta { display_category_code: String },
    /// Send an arbitrary signed request
    Raw {
        #[arg(value_enum)]
        method: MethodArg,
        /// Path starting with `/v2/providers/...`
        path: String,
        /// URL-encoded query string without the leading `?`
        #[arg(long, conflicts_with = "body")]
        query: Option<String>,
        /// JSON body
        #[arg(long)]
        body: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodArg {
    Get,
    Post,
    Put,
    Delete,
}

impl From<MethodArg> for Method {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Get => Method::Get,
            MethodArg::Post => Method::Post,
            MethodArg::Put => Method::Put,
            MethodArg::Delete => Method::Delete,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusArg {
    ApprovalRequested,
    Approved,
    OnSale,
    Suspension,
}

impl From<StatusArg> for ProductStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::ApprovalRequested => ProductStatus::ApprovalRequested,
            StatusArg::Approved => ProductStatus::Approved,
            StatusArg::OnSale => ProductStatus::OnSale,
            StatusArg::Suspension => ProductStatus::Suspension,
        }
    }
}

impl Command {
    /// Build the descriptor for this command.
    pub fn into_request(self, vendor_id: &str) -> anyhow::Result<Request> {
        let request = match self {
            Command::Budgets {
                contract_id,
                target_month,
            } => budgets::get_budget_status(
                vendor_id,
                &BudgetQuery {
                    contract_id,
                    target_month,
                },
            ),
            Command::Contracts => budgets::get_contracts(vendor_id),
            Command::Contract { contract_id } => budgets::get_contract(vendor_id, contract_id),
            Command::CouponRequestStatus { requested_id } => {
                instant_coupons::get_instant_discount_request_status(vendor_id, &requested_id)
            }
            Command::DownloadCoupon { coupon_id } => download_coupons::get_download_coupon(coupon_id),
            Command::RgOrders {
                from,
                to,
                next_token,
            } => rocket_growth::get_orders(
                vendor_id,
                &OrderQuery {
                    next_token,
                    ..OrderQuery::new(from, to)
                },
            ),
            Command::RgOrder { order_id } => rocket_growth::get_order_detail(vendor_id, &order_id),
            Command::Inventory {
                vendor_item_id,
                next_token,
            } => rocket_growth::get_inventory(
                vendor_id,
                &InventoryQuery {
                    vendor_item_id,
                    next_token,
                },
            ),
            Command::Products {
                status,
                max_per_page,
                name,
                next_token,
            } => products::get_products(&ProductQuery {
                next_token,
                max_per_page,
                status: status.map(Into::into),
                seller_product_name: name,
            }),
            Command::Product { seller_product_id } => products::get_product(seller_product_id),
            Command::Categories => products::get_categories(),
            Command::CategoryMeta {
                display_category_code,
            } => products::get_category_meta(&display_category_code),
            Command::Raw {
                method,
                path,
                query,
                body,
            } => {
                let request = Request::new(method.into(), path);
                match (query, body) {
                    (Some(query), _) => request.with_query(query),
                    (None, Some(body)) => {
                        let body: serde_json::Value =
                            serde_json::from_str(&body).context("--body is not valid JSON")?;
                        request.with_json(&body)?
                    }
                    (None, None) => request,
                }
            }
        };
        Ok(request)
    }
}

fn parse_date(value: &str) -> Result<Date, String> {
    let compact = format_description!("[year][month][day]");
    let dashed = format_description!("[year]-[month]-[day]");
    Date::parse(value, &compact)
        .or_else(|_| Date::parse(value, &dashed))
        .map_err(|_| format!("expected YYYYMMDD or YYYY-MM-DD, got {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("20240131"), Ok(date!(2024 - 01 - 31)));
        assert_eq!(parse_date("2024-01-31"), Ok(date!(2024 - 01 - 31)));
        assert!(parse_date("31/01/2024").is_err());
    }

    #[test]
    fn test_rg_orders_request() {
        let request = Command::RgOrders {
            from: date!(2024 - 01 - 01),
            to: date!(2024 - 01 - 31),
            next_token: Some("n1".to_string()),
        }
        .into_request("A00012345")
        .unwrap();
        assert_eq!(
            request.query(),
            Some("paidDateFrom=20240101&paidDateTo=20240131&nextToken=n1")
        );
    }

    #[test]
    fn test_raw_body_must_be_json() {
        let err = Command::Raw {
            method: MethodArg::Post,
            path: "/v2/x".to_string(),
            query: None,
            body: Some("{not json".to_string()),
        }
        .into_request("A00012345")
        .unwrap_err();
        assert!(err.to_string().contains("--body is not valid JSON"));
    }

    #[test]
    fn test_raw_body_is_reencoded() {
        let request = Command::Raw {
            method: MethodArg::Put,
            path: "/v2/x".to_string(),
            query: None,
            body: Some("{ \"a\" : 1 }".to_string()),
        }
        .into_request("A00012345")
        .unwrap();
        assert_eq!(request.method(), Method::Put);
        assert_eq!(request.body().map(|b| &b[..]), Some(&b"{\"a\":1}"[..]));
    }
}
