//! Trending List State
//!
//! Two independently fetched collections plus the selected tab.

use futures_util::stream::{FuturesUnordered, StreamExt};

use crate::api::TrendingApi;
use crate::error::FetchOutcome;
use crate::models::{RepositorySummary, TrendingWindow};
use crate::routes::Route;

/// State of the trending list page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListViewState {
    pub selected_tab: TrendingWindow,
    pub daily: Vec<RepositorySummary>,
    pub weekly: Vec<RepositorySummary>,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tabs. Purely local: nothing is refetched.
    pub fn select_tab(&mut self, window: TrendingWindow) {
        self.selected_tab = window;
    }

    pub fn collection(&self, window: TrendingWindow) -> &[RepositorySummary] {
        match window {
            TrendingWindow::Daily => &self.daily,
            TrendingWindow::Weekly => &self.weekly,
        }
    }

    /// Rows of the selected tab, in backend order
    pub fn active(&self) -> &[RepositorySummary] {
        self.collection(self.selected_tab)
    }

    /// Commit one window's fetch result.
    ///
    /// A failure is logged and leaves that collection as it was; the other
    /// window is never touched. Returns true if the state changed.
    pub fn apply(
        &mut self,
        window: TrendingWindow,
        outcome: FetchOutcome<Vec<RepositorySummary>>,
    ) -> bool {
        match outcome {
            FetchOutcome::Ok(repos) => {
                tracing::debug!(window = %window, count = repos.len(), "trending loaded");
                match window {
                    TrendingWindow::Daily => self.daily = repos,
                    TrendingWindow::Weekly => self.weekly = repos,
                }
                true
            }
            FetchOutcome::Failed(e) => {
                tracing::warn!(window = %window, error = %e, "Failed to fetch trending repositories");
                false
            }
        }
    }

    /// Detail route for a clicked row
    pub fn route_for(repo: &RepositorySummary) -> Route {
        Route::Repository(repo.id.clone())
    }
}

/// Fetch both trending windows concurrently.
///
/// `commit` runs once per window as soon as that window resolves, so one
/// slow or failing request never holds back the other.
pub async fn load_trending<A, F>(api: &A, mut commit: F)
where
    A: TrendingApi + ?Sized,
    F: FnMut(TrendingWindow, FetchOutcome<Vec<RepositorySummary>>),
{
    let mut pending: FuturesUnordered<_> = TrendingWindow::ALL
        .into_iter()
        .map(|window| async move { (window, FetchOutcome::from(api.trending(window).await)) })
        .collect();

    while let Some((window, outcome)) = pending.next().await {
        commit(window, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{summary, MockApi};
    use crate::api::Endpoint;
    use crate::error::FetchError;
    use std::time::Duration;

    #[test]
    fn test_default_state_is_empty_daily() {
        let state = ListViewState::new();
        assert_eq!(state.selected_tab, TrendingWindow::Daily);
        assert!(state.active().is_empty());
        assert!(state.collection(TrendingWindow::Weekly).is_empty());
    }

    #[test]
    fn test_apply_keeps_backend_order() {
        let mut state = ListViewState::new();
        let repos = vec![
            summary("3", "c/c", 1, 0, 0),
            summary("1", "a/a", 99, 0, 0),
            summary("2", "b/b", 50, 0, 0),
        ];

        assert!(state.apply(TrendingWindow::Daily, FetchOutcome::Ok(repos.clone())));
        assert_eq!(state.active(), repos.as_slice());
    }

    #[test]
    fn test_failure_leaves_collection_empty() {
        let mut state = ListViewState::new();
        let changed = state.apply(
            TrendingWindow::Weekly,
            FetchOutcome::Failed(FetchError::Status(500)),
        );

        assert!(!changed);
        assert!(state.weekly.is_empty());
    }

    #[test]
    fn test_select_tab_switches_rows() {
        let mut state = ListViewState::new();
        state.apply(TrendingWindow::Daily, FetchOutcome::Ok(vec![summary("1", "d/d", 1, 1, 1)]));
        state.apply(TrendingWindow::Weekly, FetchOutcome::Ok(vec![summary("2", "w/w", 2, 2, 2)]));

        assert_eq!(state.active()[0].full_name, "d/d");
        state.select_tab(TrendingWindow::Weekly);
        assert_eq!(state.active()[0].full_name, "w/w");
    }

    #[test]
    fn test_route_for_row() {
        let repo = summary("X", "x/y", 0, 0, 0);
        assert_eq!(ListViewState::route_for(&repo).path(), "/repository/X");
    }

    #[tokio::test]
    async fn test_single_daily_row_scenario() {
        let api = MockApi::new()
            .with_trending(TrendingWindow::Daily, Ok(vec![summary("1", "x/y", 10, 2, 5)]))
            .with_trending(TrendingWindow::Weekly, Ok(vec![]));
        let mut state = ListViewState::new();

        load_trending(&api, |window, outcome| {
            state.apply(window, outcome);
        })
        .await;

        let rows = state.active();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].full_name, "x/y");
        assert_eq!(
            rows[0].badges().iter().collect::<Vec<_>>(),
            vec!["⭐ 10", "🔱 2", "👀 5"]
        );
    }

    #[tokio::test]
    async fn test_one_window_failing_does_not_affect_other() {
        let weekly = vec![summary("5", "w/one", 4, 0, 0), summary("6", "w/two", 3, 0, 0)];
        let api = MockApi::new()
            .with_trending(TrendingWindow::Daily, Err(FetchError::Transport("down".into())))
            .with_trending(TrendingWindow::Weekly, Ok(weekly.clone()));
        let mut state = ListViewState::new();

        load_trending(&api, |window, outcome| {
            state.apply(window, outcome);
        })
        .await;

        assert!(state.daily.is_empty());
        assert_eq!(state.weekly, weekly);
    }

    #[tokio::test]
    async fn test_windows_commit_as_they_resolve() {
        let api = MockApi::new()
            .with_trending(TrendingWindow::Daily, Ok(vec![summary("1", "d/d", 1, 0, 0)]))
            .with_trending(TrendingWindow::Weekly, Err(FetchError::Status(502)))
            .with_delay(
                Endpoint::Trending(TrendingWindow::Daily),
                Duration::from_millis(30),
            );
        let mut order = Vec::new();

        load_trending(&api, |window, outcome| order.push((window, outcome.is_failed()))).await;

        assert_eq!(
            order,
            vec![(TrendingWindow::Weekly, true), (TrendingWindow::Daily, false)]
        );
        // Both requests were in flight before either resolved
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_both_windows_empty() {
        let api = MockApi::new()
            .with_trending(TrendingWindow::Daily, Ok(vec![]))
            .with_trending(TrendingWindow::Weekly, Ok(vec![]));
        let mut state = ListViewState::new();

        load_trending(&api, |window, outcome| {
            state.apply(window, outcome);
        })
        .await;

        assert!(state.active().is_empty());
        state.select_tab(TrendingWindow::Weekly);
        assert!(state.active().is_empty());
    }
}
