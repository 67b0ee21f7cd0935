//! HTTP client for the shop REST API.
//!
//! Requests are described as plain [`Request`] values and executed by an
//! [`HttpTransport`]; [`ReqwestTransport`] is the production transport.
//! [`ShopApi`] wraps each endpoint and decodes the `{success, data, message,
//! error}` envelope into typed results.
//!
//! # Example
//!
//! ```rust,no_run
//! use shop_data::{ApiConfig, ShopApi};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ShopApi::from_config(&ApiConfig::from_env()?)?;
//! for product in api.fetch_products().await? {
//!     println!("{} {}", product.name, product.price);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
pub mod config;
pub mod envelope;
mod error;
mod request;
mod response;
mod transport;

pub use api::ShopApi;
pub use client::{ClientRequestBuilder, FetchClient};
pub use config::{ApiConfig, ConfigError};
pub use envelope::ApiEnvelope;
pub use error::FetchError;
pub use request::Request;
pub use response::Response;
pub use transport::{HttpTransport, ReqwestTransport};

use shop_commerce::catalog::Product;

/// Fetch the full product list from the default API with `auth_token`.
///
/// An empty catalog is `Ok(vec![])`; every failure is `Err`.
pub async fn fetch_products(auth_token: &str) -> Result<Vec<Product>, FetchError> {
    let config = ApiConfig {
        token: auth_token.to_string(),
        ..ApiConfig::default()
    };
    ShopApi::from_config(&config)?.fetch_products().await
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiConfig, FetchClient, FetchError, HttpTransport, ShopApi};
}
