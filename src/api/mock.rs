//! Scripted backend for view tests.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use super::{Endpoint, TrendingApi};
use crate::error::{FetchError, FetchResult};
use crate::models::{
    HistoryPoint, RepositoryDetail, RepositoryId, RepositorySummary, TrendingWindow,
};

/// In-memory [`TrendingApi`] with per-endpoint responses and delays
#[derive(Default)]
pub struct MockApi {
    trending: HashMap<TrendingWindow, FetchResult<Vec<RepositorySummary>>>,
    repositories: HashMap<String, FetchResult<RepositoryDetail>>,
    delays: HashMap<String, Duration>,
    calls: RefCell<Vec<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trending(
        mut self,
        window: TrendingWindow,
        response: FetchResult<Vec<RepositorySummary>>,
    ) -> Self {
        self.trending.insert(window, response);
        self
    }

    pub fn with_repository(mut self, id: &str, response: FetchResult<RepositoryDetail>) -> Self {
        self.repositories.insert(id.to_string(), response);
        self
    }

    /// Hold the response for `endpoint` back by `delay`
    pub fn with_delay(mut self, endpoint: Endpoint, delay: Duration) -> Self {
        self.delays.insert(endpoint.path(), delay);
        self
    }

    /// Request paths in the order they were issued
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    async fn record(&self, endpoint: &Endpoint) {
        let path = endpoint.path();
        self.calls.borrow_mut().push(path.clone());
        if let Some(delay) = self.delays.get(&path) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait(?Send)]
impl TrendingApi for MockApi {
    async fn trending(&self, window: TrendingWindow) -> FetchResult<Vec<RepositorySummary>> {
        self.record(&Endpoint::Trending(window)).await;
        self.trending
            .get(&window)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }

    async fn repository(&self, id: &RepositoryId) -> FetchResult<RepositoryDetail> {
        self.record(&Endpoint::Repository(id.clone())).await;
        self.repositories
            .get(id.as_str())
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

pub fn summary(id: &str, full_name: &str, stars: u64, forks: u64, watchers: u64) -> RepositorySummary {
    RepositorySummary {
        id: RepositoryId::from(id),
        full_name: full_name.to_string(),
        description: None,
        stars,
        forks,
        watchers,
        name: None,
        url: None,
    }
}

pub fn point(date: &str, stars: u64, forks: u64, watchers: u64) -> HistoryPoint {
    HistoryPoint {
        date: date.to_string(),
        stars,
        forks,
        watchers,
    }
}

pub fn detail(id: &str, full_name: &str, history: Vec<HistoryPoint>) -> RepositoryDetail {
    let last = history.last().cloned().unwrap_or_else(|| point("", 0, 0, 0));
    RepositoryDetail {
        id: RepositoryId::from(id),
        full_name: full_name.to_string(),
        description: Some(format!("{} description", full_name)),
        stars: last.stars,
        forks: last.forks,
        watchers: last.watchers,
        url: format!("https://github.com/{}", full_name),
        history,
    }
}
