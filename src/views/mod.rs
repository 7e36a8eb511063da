//! View State
//!
//! Framework-independent state machines behind the two pages. The UI crate
//! wraps them in reactive signals; everything here runs natively in tests.

pub mod detail;
pub mod list;

pub use detail::{load_detail, DetailPhase, DetailRequest, DetailViewState};
pub use list::{load_trending, ListViewState};
