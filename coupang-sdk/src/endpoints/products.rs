//! Seller products and display categories.
//!
//! Product payloads are large and vendor-defined, so they are passed through
//! as JSON values. Fetch a product, edit the fields, and send the whole
//! document back to update it.

use serde_json::Value;

use crate::objects::products::ProductQuery;
use crate::request::{Method, Request, segment};

const PRODUCTS: &str = "/v2/providers/seller_api/apis/api/v1/marketplace/seller-products";
const META: &str = "/v2/providers/seller_api/apis/api/v1/marketplace/meta";

/// `GET .../seller-products` – one page of products.
pub fn get_products(query: &ProductQuery) -> Request {
    Request::get(PRODUCTS).with_query(query.to_query())
}

/// `POST .../seller-products`
///
/// The vendor rate-limits this to 10 calls per second.
pub fn create_product(body: &Value) -> Result<Request, serde_json::Error> {
    Request::new(Method::Post, PRODUCTS).with_json(body)
}

/// `PUT .../seller-products`
pub fn update_product(body: &Value) -> Result<Request, serde_json::Error> {
    Request::new(Method::Put, PRODUCTS).with_json(body)
}

/// `GET .../seller-products/{sellerProductId}`
pub fn get_product(seller_product_id: i64) -> Request {
    Request::get(format!("{PRODUCTS}/{}", segment(seller_product_id)))
}

/// `GET .../meta/display-categories/{displayCategoryCode}` – notices,
/// options, required documents and certifications of a category.
pub fn get_category_meta(display_category_code: &str) -> Request {
    Request::get(format!(
        "{META}/display-categories/{}",
        segment(display_category_code)
    ))
}

/// `GET .../meta/rg/display-category-codes` – the Rocket Growth category tree.
pub fn get_categories() -> Request {
    Request::get(format!("{META}/rg/display-category-codes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::products::ProductStatus;
    use serde_json::json;

    #[test]
    fn test_products_listing() {
        let request = get_products(&ProductQuery {
            status: Some(ProductStatus::OnSale),
            ..Default::default()
        });
        assert_eq!(
            request.path_and_query(),
            "/v2/providers/seller_api/apis/api/v1/marketplace/seller-products?status=ON_SALE"
        );
    }

    #[test]
    fn test_create_and_update_share_path() {
        let body = json!({"sellerProductName": "테스트 상품", "vendorId": "A00012345"});
        let create = create_product(&body).unwrap();
        let update = update_product(&body).unwrap();
        assert_eq!(create.method(), Method::Post);
        assert_eq!(update.method(), Method::Put);
        assert_eq!(create.path(), update.path());
        assert_eq!(create.body(), update.body());
    }

    #[test]
    fn test_product_and_categories() {
        assert_eq!(
            get_product(1234567890).path(),
            "/v2/providers/seller_api/apis/api/v1/marketplace/seller-products/1234567890"
        );
        assert_eq!(
            get_category_meta("194176").path(),
            "/v2/providers/seller_api/apis/api/v1/marketplace/meta/display-categories/194176"
        );
        assert_eq!(
            get_categories().path(),
            "/v2/providers/seller_api/apis/api/v1/marketplace/meta/rg/display-category-codes"
        );
    }
}
