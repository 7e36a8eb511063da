//! # Trendscope
//!
//! GitHub trending statistics for human readers: a daily/weekly trending
//! list and a per-repository history chart, fed by an external aggregation
//! service over HTTP.
//!
//! This crate holds everything that is not rendering, so it runs natively
//! and under `wasm32-unknown-unknown` alike. The Leptos client lives in
//! `trendscope-ui`.
//!
//! ## Modules
//!
//! - [`models`]: Records returned by the backend
//! - [`api`]: HTTP contract, [`TrendingApi`] trait and reqwest client
//! - [`views`]: List and detail page state machines
//! - [`chart`]: History to time-series chart transformation
//! - [`routes`]: Client-side route table
//! - [`config`]: Build-time configuration
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trendscope::api::HttpClient;
//! use trendscope::views::{load_trending, ListViewState};
//! use trendscope::Config;
//!
//! # async fn run() {
//! let config = Config::embedded();
//! let client = HttpClient::new(config.api_base());
//!
//! let mut list = ListViewState::new();
//! load_trending(&client, |window, outcome| {
//!     list.apply(window, outcome);
//! })
//! .await;
//!
//! for repo in list.active() {
//!     println!("{} {}", repo.full_name, repo.badges().stars);
//! }
//! # }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod views;

// Re-export top-level types for convenience
pub use api::{Endpoint, HttpClient, TrendingApi};

pub use chart::{ChartLayout, ChartModel, Series, SeriesKind, Tooltip, YAxis};

pub use config::{ApiConfig, Config, Environment, LogFormat, LoggingConfig};

pub use error::{ConfigError, FetchError, FetchOutcome, FetchResult};

pub use models::{
    HistoryPoint, RepositoryDetail, RepositoryId, RepositorySummary, StatBadges, TrendingWindow,
};

pub use routes::Route;

pub use views::{DetailPhase, DetailRequest, DetailViewState, ListViewState};
