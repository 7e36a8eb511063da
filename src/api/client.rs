//! HTTP API Client
//!
//! reqwest implementation of [`TrendingApi`].

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{Endpoint, TrendingApi};
use crate::error::{FetchError, FetchResult};
use crate::models::{RepositoryDetail, RepositoryId, RepositorySummary, TrendingWindow};

/// Backend client over reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> FetchResult<T> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(url = %url, "fetching");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait(?Send)]
impl TrendingApi for HttpClient {
    async fn trending(&self, window: TrendingWindow) -> FetchResult<Vec<RepositorySummary>> {
        self.get_json(Endpoint::Trending(window)).await
    }

    async fn repository(&self, id: &RepositoryId) -> FetchResult<RepositoryDetail> {
        self.get_json(Endpoint::Repository(id.clone())).await
    }
}
