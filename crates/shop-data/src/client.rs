//! Bearer-authenticated JSON client over an [`HttpTransport`].

use crate::{FetchError, HttpTransport, Request, Response};
use http::Method;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// HTTP client bound to one API base URL and bearer token.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl FetchClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> ClientRequestBuilder<'_> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> ClientRequestBuilder<'_> {
        self.request(Method::POST, path)
    }

    pub fn delete(&self, path: &str) -> ClientRequestBuilder<'_> {
        self.request(Method::DELETE, path)
    }

    /// Start a request. Absolute URLs are used as given; anything else is
    /// joined onto the base URL with exactly one slash between them.
    pub fn request(&self, method: Method, path: &str) -> ClientRequestBuilder<'_> {
        let url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        };

        let mut request = Request::new(method, url).accept("application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        ClientRequestBuilder {
            client: self,
            request: Ok(request),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a> {
    client: &'a FetchClient,
    request: Result<Request, FetchError>,
}

impl ClientRequestBuilder<'_> {
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request = self.request.map(|r| r.header(key, value));
        self
    }

    /// Set the request body as JSON. Serialization errors surface on `send`.
    pub fn json<T: Serialize>(mut self, value: &T) -> Self {
        self.request = self.request.and_then(|r| r.json(value));
        self
    }

    /// Send the request. Non-2xx responses become `FetchError::HttpError`.
    pub async fn send(self) -> Result<Response, FetchError> {
        let request = self.request?;
        let method = request.method.clone();
        let url = request.url.clone();

        tracing::debug!(%method, %url, "sending request");
        let started = Instant::now();

        let result = self
            .client
            .transport
            .send(request)
            .await
            .and_then(Response::error_for_status);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(response) => {
                tracing::debug!(%method, %url, status = response.status, elapsed_ms, "request complete")
            }
            Err(e) => tracing::warn!(%method, %url, error = %e, elapsed_ms, "request failed"),
        }

        result
    }
}
