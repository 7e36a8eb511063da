//! Pages
//!
//! Top-level page components for each route.

pub mod repository;
pub mod trending;

pub use repository::RepositoryPage;
pub use trending::TrendingPage;
