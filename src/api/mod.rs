//! Trending Backend API
//!
//! HTTP contract of the aggregation service and the client trait views
//! fetch through.
//!
//! # Endpoints
//!
//! - `GET /api/trending/daily` - Repositories trending today
//! - `GET /api/trending/weekly` - Repositories with the most growth this week
//! - `GET /api/repository/:id` - One repository with its stats history
//!
//! No request body and no authentication header is ever sent. Any transport
//! failure, non-success status or malformed body is a [`FetchError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use trendscope::api::{HttpClient, TrendingApi};
//! use trendscope::models::TrendingWindow;
//!
//! # async fn run() -> Result<(), trendscope::FetchError> {
//! let client = HttpClient::new("http://localhost:8000");
//! let daily = client.trending(TrendingWindow::Daily).await?;
//! println!("{} repositories trending today", daily.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
#[cfg(test)]
pub(crate) mod mock;

pub use client::HttpClient;

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::{RepositoryDetail, RepositoryId, RepositorySummary, TrendingWindow};

/// A backend resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Trending(TrendingWindow),
    Repository(RepositoryId),
}

impl Endpoint {
    /// Request path; the repository id is interpolated verbatim
    pub fn path(&self) -> String {
        match self {
            Endpoint::Trending(window) => format!("/api/trending/{}", window.as_path()),
            Endpoint::Repository(id) => format!("/api/repository/{}", id),
        }
    }

    /// Absolute URL under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Read access to the trending backend.
///
/// Futures are not required to be `Send`: in the browser every request runs
/// on the single event loop.
#[async_trait(?Send)]
pub trait TrendingApi {
    /// Fetch one trending collection, in backend rank order
    async fn trending(&self, window: TrendingWindow) -> FetchResult<Vec<RepositorySummary>>;

    /// Fetch a single repository with its history
    async fn repository(&self, id: &RepositoryId) -> FetchResult<RepositoryDetail>;
}
