//! HTTP client for the Newegg open web-services catalog.
//!
//! Wraps `reqwest` with status-code classification, typed response
//! deserialization, and a lazily populated per-client store cache. Every
//! catalog operation is a single round trip; retries, backoff, and timeouts
//! beyond the configured client timeout belong to the transport layer.

use std::time::Duration;

use reqwest::header;
use reqwest::Client;
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::error::NeweggError;
use crate::types::{Category, SearchOptions, SearchRequest, Store};

const DEFAULT_BASE_URL: &str = "http://www.ows.newegg.com";

const API_VERSION: &str = "2.2";

/// Client for the Newegg catalog web services.
///
/// Owns the HTTP client, base URL, and the store cache. Use
/// [`NeweggClient::new`] for production or [`NeweggClient::with_base_url`]
/// to point at a mock server in tests.
///
/// The store list is fetched at most once per client instance (see
/// [`NeweggClient::stores`]); construct a new client to observe fresh data.
pub struct NeweggClient {
    client: Client,
    base_url: String,
    store_cache: OnceCell<Vec<Store>>,
}

impl NeweggClient {
    /// Creates a new client pointed at the production catalog endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`NeweggError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, NeweggError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NeweggError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, NeweggError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("newegg-client/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            store_cache: OnceCell::new(),
        })
    }

    /// Returns the list of store departments.
    ///
    /// The first successful call fetches `GET /Stores.egg/` and caches the
    /// decoded list for the lifetime of the client; later calls return the
    /// cached slice without network I/O. A failed fetch leaves the cache
    /// empty, so the next call retries.
    ///
    /// # Errors
    ///
    /// - [`NeweggError::Client`] / [`NeweggError::Server`] on 4xx/5xx status.
    /// - [`NeweggError::Http`] on network failure.
    /// - [`NeweggError::Deserialize`] if the response shape is unexpected.
    pub async fn stores(&self) -> Result<&[Store], NeweggError> {
        let stores = self
            .store_cache
            .get_or_try_init(|| async {
                let body = self.api_get("/Stores.egg/").await?;
                let stores: Vec<Store> =
                    serde_json::from_value(body).map_err(|e| NeweggError::Deserialize {
                        context: "stores".to_owned(),
                        source: e,
                    })?;
                tracing::debug!(count = stores.len(), "populated store cache");
                Ok::<_, NeweggError>(stores)
            })
            .await?;
        Ok(stores)
    }

    /// Returns the categories for a store.
    ///
    /// An absent `store_id` returns an empty vec immediately, with no
    /// network call.
    ///
    /// # Errors
    ///
    /// - [`NeweggError::Client`] / [`NeweggError::Server`] on 4xx/5xx status.
    /// - [`NeweggError::Http`] on network failure.
    /// - [`NeweggError::Deserialize`] if the response shape is unexpected.
    pub async fn categories(&self, store_id: Option<i64>) -> Result<Vec<Category>, NeweggError> {
        let Some(store_id) = store_id else {
            return Ok(Vec::new());
        };
        let body = self
            .api_get(&format!("/Stores.egg/Categories/{store_id}"))
            .await?;
        serde_json::from_value(body).map_err(|e| NeweggError::Deserialize {
            context: format!("categories(store_id={store_id})"),
            source: e,
        })
    }

    /// Fetches the navigation payload for a store/category/node path.
    ///
    /// The payload is returned as decoded JSON without further structuring;
    /// its `StoreID`/`CategoryType`/`CategoryID`/`NodeId` fields feed
    /// [`NeweggClient::search`].
    ///
    /// # Errors
    ///
    /// - [`NeweggError::Client`] / [`NeweggError::Server`] on 4xx/5xx status.
    /// - [`NeweggError::Http`] on network failure.
    /// - [`NeweggError::Deserialize`] if the body is not valid JSON.
    pub async fn navigate(
        &self,
        store_id: i64,
        category_id: i64,
        node_id: i64,
    ) -> Result<serde_json::Value, NeweggError> {
        self.api_get(&format!(
            "/Stores.egg/Navigation/{store_id}/{category_id}/{node_id}"
        ))
        .await
    }

    /// Runs an advanced product search and returns one page of results.
    ///
    /// Unset options take their documented defaults; `IsSubCategorySearch`
    /// on the wire is derived from the defaulted `sub_category_id`
    /// (`> 0` means a sub-category search).
    ///
    /// # Errors
    ///
    /// - [`NeweggError::Client`] / [`NeweggError::Server`] on 4xx/5xx status.
    /// - [`NeweggError::Http`] on network failure.
    /// - [`NeweggError::Deserialize`] if the body is not valid JSON.
    pub async fn search(&self, options: &SearchOptions) -> Result<serde_json::Value, NeweggError> {
        let request = SearchRequest::from(options);
        self.api_post("/Search.egg/Advanced/", &request).await
    }

    /// Fetches the specification payload for a product item number.
    ///
    /// `item_number` is passed through unmodified as a path segment.
    ///
    /// # Errors
    ///
    /// - [`NeweggError::Client`] / [`NeweggError::Server`] on 4xx/5xx status.
    /// - [`NeweggError::Http`] on network failure.
    /// - [`NeweggError::Deserialize`] if the body is not valid JSON.
    pub async fn specifications(
        &self,
        item_number: &str,
    ) -> Result<serde_json::Value, NeweggError> {
        self.api_get(&format!("/Products.egg/{item_number}/Specification"))
            .await
    }

    /// Sends a GET request, classifies the status, and parses the body as JSON.
    async fn api_get(&self, path: &str) -> Result<serde_json::Value, NeweggError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        let body = Self::classify(response).await?;
        serde_json::from_str(&body).map_err(|e| NeweggError::Deserialize {
            context: url,
            source: e,
        })
    }

    /// Sends a JSON POST request, classifies the status, and parses the body
    /// as JSON.
    async fn api_post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value, NeweggError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header("Api-Version", API_VERSION)
            .json(body)
            .send()
            .await?;
        let text = Self::classify(response).await?;
        serde_json::from_str(&text).map_err(|e| NeweggError::Deserialize {
            context: url,
            source: e,
        })
    }

    /// Reads the response body and applies the status-code classification.
    async fn classify(response: reqwest::Response) -> Result<String, NeweggError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        classify_status(status, body)
    }
}

/// Classifies an HTTP status code, returning the body unchanged for
/// 100–399 and a typed error for the 4xx and 5xx ranges.
fn classify_status(status: u16, body: String) -> Result<String, NeweggError> {
    match status {
        400..=499 => Err(NeweggError::Client { status, body }),
        500..=599 => Err(NeweggError::Server { status, body }),
        _ => Ok(body),
    }
}
