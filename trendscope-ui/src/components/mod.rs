//! UI Components
//!
//! Reusable Leptos components for the pages.

pub mod badges;
pub mod chart;
pub mod nav;

pub use badges::StatChips;
pub use chart::HistoryChart;
pub use nav::Nav;
