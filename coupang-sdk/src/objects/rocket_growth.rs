//! Rocket Growth order and warehouse inventory queries.

use time::Date;

use crate::request::QueryString;

/// Orders paid within `[paid_date_from, paid_date_to]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    pub paid_date_from: Date,
    pub paid_date_to: Date,
    /// Continuation token from the previous page.
    pub next_token: Option<String>,
}

impl OrderQuery {
    pub fn new(paid_date_from: Date, paid_date_to: Date) -> Self {
        Self {
            paid_date_from,
            paid_date_to,
            next_token: None,
        }
    }

    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push("paidDateFrom", compact_date(self.paid_date_from))
            .push("paidDateTo", compact_date(self.paid_date_to))
            .push_opt("nextToken", self.next_token.as_deref())
    }
}

/// Warehouse inventory filter. Unset fields list everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryQuery {
    pub vendor_item_id: Option<u64>,
    pub next_token: Option<String>,
}

impl InventoryQuery {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push_opt("vendorItemId", self.vendor_item_id)
            .push_opt("nextToken", self.next_token.as_deref())
    }
}

/// `YYYYMMDD`
fn compact_date(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
