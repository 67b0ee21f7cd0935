//! Typed wrappers for each REST endpoint.

use crate::envelope::{decode_list, decode_record};
use crate::{ApiConfig, FetchClient, FetchError, ReqwestTransport};
use shop_commerce::account::{Customer, LoginRequest};
use shop_commerce::cart::CartItem;
use shop_commerce::catalog::{Category, Product};
use shop_commerce::checkout::Order;
use shop_commerce::ids::{CartItemId, CategoryId, ProductId};
use std::sync::Arc;

const PRODUCTS: &str = "api/v1/products";
const CATEGORIES: &str = "api/v1/categories";
const CART: &str = "api/v1/cart";
const ORDERS: &str = "api/v1/orders";
const CUSTOMERS: &str = "api/v1/customers";

/// The shop REST API.
#[derive(Debug, Clone)]
pub struct ShopApi {
    client: FetchClient,
}

impl ShopApi {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Build a `reqwest`-backed API client from settings.
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        let mut client = FetchClient::new(Arc::new(transport), config.base_url.clone());
        if !config.token.trim().is_empty() {
            client = client.with_token(config.token.clone());
        }
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    /// All products. An empty catalog is `Ok(vec![])`, never an error.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self.client.get(PRODUCTS).send().await?;
        let products: Vec<Product> = decode_list(&response.body)?;
        tracing::info!(count = products.len(), "fetched products");
        Ok(products)
    }

    pub async fn fetch_product(&self, id: &ProductId) -> Result<Product, FetchError> {
        let path = format!("{}/{}", PRODUCTS, segment(id.as_str())?);
        let response = self.client.get(&path).send().await?;
        decode_record(&response.body)
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let response = self.client.get(CATEGORIES).send().await?;
        let categories: Vec<Category> = decode_list(&response.body)?;
        tracing::info!(count = categories.len(), "fetched categories");
        Ok(categories)
    }

    pub async fn fetch_category(&self, id: &CategoryId) -> Result<Category, FetchError> {
        let path = format!("{}/{}", CATEGORIES, segment(id.as_str())?);
        let response = self.client.get(&path).send().await?;
        decode_record(&response.body)
    }

    pub async fn fetch_cart(&self) -> Result<Vec<CartItem>, FetchError> {
        let response = self.client.get(CART).send().await?;
        let items: Vec<CartItem> = decode_list(&response.body)?;
        tracing::info!(count = items.len(), "fetched cart");
        Ok(items)
    }

    /// Add a line; the server echoes the stored line back.
    pub async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem, FetchError> {
        let response = self.client.post(CART).json(item).send().await?;
        decode_record(&response.body)
    }

    pub async fn remove_from_cart(&self, id: &CartItemId) -> Result<(), FetchError> {
        let path = format!("{}/{}", CART, segment(id.as_str())?);
        self.client.delete(&path).send().await?;
        Ok(())
    }

    pub async fn fetch_orders(&self) -> Result<Vec<Order>, FetchError> {
        let response = self.client.get(ORDERS).send().await?;
        let orders: Vec<Order> = decode_list(&response.body)?;
        tracing::info!(count = orders.len(), "fetched orders");
        Ok(orders)
    }

    pub async fn create_order(&self, order: &Order) -> Result<Order, FetchError> {
        let response = self.client.post(ORDERS).json(order).send().await?;
        decode_record(&response.body)
    }

    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, FetchError> {
        let response = self.client.get(CUSTOMERS).send().await?;
        decode_list(&response.body)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Customer, FetchError> {
        let path = format!("{}/login", CUSTOMERS);
        let response = self.client.post(&path).json(request).send().await?;
        let customer: Customer = decode_record(&response.body)?;
        tracing::info!(customer = %customer.id, "signed in");
        Ok(customer)
    }

    pub async fn register(&self, customer: &Customer) -> Result<Customer, FetchError> {
        let path = format!("{}/register", CUSTOMERS);
        let response = self.client.post(&path).json(customer).send().await?;
        decode_record(&response.body)
    }
}

/// Reject IDs that would change the request path.
///
/// `.` and `..` are dot segments and get resolved away when the URL is parsed.
fn segment(id: &str) -> Result<&str, FetchError> {
    if id.is_empty() || id.contains(['/', '?', '#']) || id.chars().all(|c| c == '.') {
        return Err(FetchError::InvalidUrl(format!("invalid resource id: {:?}", id)));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::CannedTransport;
    use http::Method;
    use shop_commerce::money::Price;

    fn api(transport: &CannedTransport) -> ShopApi {
        let client = FetchClient::new(Arc::new(transport.clone()), "https://api.test/").with_token("prakmobile");
        ShopApi::new(client)
    }

    #[tokio::test]
    async fn test_fetch_products() {
        let transport = CannedTransport::new().reply(
            200,
            r#"{"success":true,"message":"ok","data":[
                {"id":"1","productName":"Red Shoe","price":1500000,"categoryId":"c1"},
                {"id":"2","productName":"Blue Shoe","price":"500000"}
            ]}"#,
        );

        let products = api(&transport).fetch_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].price, Price::new(500_000));
        let sent = transport.sent();
        assert_eq!(sent[0].url, "https://api.test/api/v1/products");
        assert_eq!(sent[0].header_value("Authorization"), Some("Bearer prakmobile"));
    }

    #[tokio::test]
    async fn test_fetch_products_empty_is_ok() {
        let transport = CannedTransport::new().reply(200, r#"{"success":true,"data":[]}"#);
        assert_eq!(api(&transport).fetch_products().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_fetch_products_api_failure() {
        let transport =
            CannedTransport::new().reply(200, r#"{"success":false,"message":"","error":"Unauthorized token"}"#);
        assert_eq!(
            api(&transport).fetch_products().await,
            Err(FetchError::Api("Unauthorized token".to_string()))
        );
    }

    #[tokio::test]
    async fn test_fetch_products_error_kinds() {
        let transport = CannedTransport::new()
            .reply(500, "boom")
            .reply(200, "<html>")
            .fail(FetchError::Request("connection refused".to_string()));
        let api = api(&transport);

        assert!(matches!(api.fetch_products().await, Err(FetchError::HttpError { status: 500, .. })));
        assert!(matches!(api.fetch_products().await, Err(FetchError::ParseError(_))));
        assert!(matches!(api.fetch_products().await, Err(FetchError::Request(_))));
    }

    #[tokio::test]
    async fn test_fetch_product_by_id() {
        let transport = CannedTransport::new().reply(200, r#"{"id":"p-7","productName":"Loafer","price":2100000}"#);
        let product = api(&transport).fetch_product(&ProductId::new("p-7")).await.unwrap();
        assert_eq!(product.name, "Loafer");
        assert_eq!(transport.sent()[0].url, "https://api.test/api/v1/products/p-7");
    }

    #[tokio::test]
    async fn test_bad_id_is_rejected_before_sending() {
        let transport = CannedTransport::new();
        let err = api(&transport)
            .fetch_category(&CategoryId::new("../admin"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_dot_segment_id_is_rejected_before_sending() {
        let transport = CannedTransport::new();
        let api = api(&transport);

        let err = api.fetch_category(&CategoryId::new("..")).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
        let err = api.fetch_product(&ProductId::new(".")).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_cart_round_trip_requests() {
        let transport = CannedTransport::new()
            .reply(200, r#"[{"id":"ci-1","productId":"1","quantity":2,"price":99000.0,"name":"Sock"}]"#)
            .reply(201, r#"{"id":"ci-2","productId":"2","quantity":1,"price":10}"#)
            .reply(204, "");
        let api = api(&transport);

        let items = api.fetch_cart().await.unwrap();
        assert_eq!(items[0].price, Price::new(99_000));

        let added = api.add_to_cart(&items[0]).await.unwrap();
        assert_eq!(added.id.as_str(), "ci-2");

        api.remove_from_cart(&CartItemId::new("ci-1")).await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[1].method, Method::POST);
        assert_eq!(sent[1].header_value("Content-Type"), Some("application/json"));
        assert_eq!(sent[2].method, Method::DELETE);
        assert_eq!(sent[2].url, "https://api.test/api/v1/cart/ci-1");
    }

    #[tokio::test]
    async fn test_orders() {
        let transport = CannedTransport::new()
            .reply(200, r#"[{"id":"o1","items":[],"totalPrice":120000,"status":"shipped"}]"#);
        let orders = api(&transport).fetch_orders().await.unwrap();
        assert_eq!(orders[0].total_price, Price::new(120_000));
        assert_eq!(orders[0].status.as_str(), "shipped");
    }

    #[tokio::test]
    async fn test_login() {
        let transport = CannedTransport::new()
            .reply(200, r#"{"success":true,"data":{"id":"cus-1","name":"Dewi","email":"dewi@mail.id"},"message":"ok"}"#)
            .reply(200, r#"{"success":false,"message":"Invalid email or password","error":null}"#);
        let api = api(&transport);
        let request = LoginRequest::new("dewi@mail.id", "hunter2").unwrap();

        let customer = api.login(&request).await.unwrap();
        assert_eq!(customer.name, "Dewi");
        assert_eq!(transport.sent()[0].url, "https://api.test/api/v1/customers/login");

        assert_eq!(
            api.login(&request).await,
            Err(FetchError::Api("Invalid email or password".to_string()))
        );
    }

    #[test]
    fn test_segment() {
        assert_eq!(segment("abc-1"), Ok("abc-1"));
        assert!(segment("").is_err());
        assert!(segment("a?b").is_err());
        assert!(segment(".").is_err());
        assert!(segment("..").is_err());
        assert!(segment("...").is_err());
        assert_eq!(segment("v1.2"), Ok("v1.2"));
        assert_eq!(segment(".hidden"), Ok(".hidden"));
    }
}
