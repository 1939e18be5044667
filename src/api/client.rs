use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{CategoryEntry, Product, ProductPage};
use crate::config::ApiConfig;

/// `limit`/`skip` window for paginated endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub skip: u64,
}

/// Async client for the catalog endpoints.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    /// `GET /products/categories`
    pub async fn categories(&self) -> Result<Vec<CategoryEntry>, ApiError> {
        let url = self.endpoint(&["products", "categories"], None)?;
        self.get_json(url).await
    }

    /// `GET /products/category/{slug}`, optionally windowed.
    pub async fn category_products(
        &self,
        slug: &str,
        page: Option<PageRequest>,
    ) -> Result<ProductPage, ApiError> {
        let url = self.endpoint(&["products", "category", slug], page)?;
        self.get_json(url).await
    }

    /// `GET /products/search?q=...`
    pub async fn search(&self, term: &str, page: PageRequest) -> Result<ProductPage, ApiError> {
        let mut url = self.endpoint(&["products", "search"], None)?;
        url.query_pairs_mut().append_pair("q", term);
        append_page(&mut url, page);
        self.get_json(url).await
    }

    /// `GET /products` (unfiltered listing).
    pub async fn products(&self, page: PageRequest) -> Result<ProductPage, ApiError> {
        let url = self.endpoint(&["products"], Some(page))?;
        self.get_json(url).await
    }

    /// `GET /products/{id}`
    pub async fn product(&self, id: u64) -> Result<Product, ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&["products", &id], None)?;
        self.get_json(url).await
    }

    /// Join path segments onto the base URL. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str], page: Option<PageRequest>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?;
            path.pop_if_empty().extend(segments);
        }
        if let Some(page) = page {
            append_page(&mut url, page);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let url_str = url.to_string();
        tracing::debug!(url = %url_str, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_send(&url_str, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url_str,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::from_body(&url_str, e))
    }
}

fn append_page(url: &mut Url, page: PageRequest) {
    url.query_pairs_mut()
        .append_pair("limit", &page.limit.to_string())
        .append_pair("skip", &page.skip.to_string());
}
