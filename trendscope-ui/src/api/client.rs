//! HTTP API Client
//!
//! gloo-net implementation of [`TrendingApi`] backed by the browser's fetch.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use trendscope::api::{Endpoint, TrendingApi};
use trendscope::{
    FetchError, FetchResult, RepositoryDetail, RepositoryId, RepositorySummary, TrendingWindow,
};

/// Trending backend client for the browser
#[derive(Debug, Clone)]
pub struct GlooClient {
    base_url: String,
}

impl GlooClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> FetchResult<T> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(url = %url, "fetching");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TrendingApi for GlooClient {
    async fn trending(&self, window: TrendingWindow) -> FetchResult<Vec<RepositorySummary>> {
        self.get_json(Endpoint::Trending(window)).await
    }

    async fn repository(&self, id: &RepositoryId) -> FetchResult<RepositoryDetail> {
        self.get_json(Endpoint::Repository(id.clone())).await
    }
}
