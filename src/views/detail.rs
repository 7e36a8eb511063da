//! Repository Detail State
//!
//! The page is either loading or showing exactly one record. Every change of
//! the route identifier starts a new generation; responses carrying an older
//! generation are dropped so a slow reply for repository A can never be shown
//! under repository B's URL.

use crate::api::TrendingApi;
use crate::error::FetchOutcome;
use crate::models::{RepositoryDetail, RepositoryId};

/// Ticket for one issued detail request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: RepositoryId,
    pub generation: u64,
}

/// What the page renders
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailPhase<'a> {
    Loading,
    Loaded(&'a RepositoryDetail),
}

/// State of the repository detail page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailViewState {
    active: Option<RepositoryId>,
    generation: u64,
    repository: Option<RepositoryDetail>,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to the route identifier.
    ///
    /// Returns a request to issue when `id` differs from the active
    /// identifier. The previous record is discarded immediately, so the page
    /// goes back to loading before the new response arrives.
    pub fn begin(&mut self, id: RepositoryId) -> Option<DetailRequest> {
        if self.active.as_ref() == Some(&id) {
            return None;
        }

        self.generation += 1;
        self.repository = None;
        self.active = Some(id.clone());

        tracing::debug!(id = %id, generation = self.generation, "loading repository");

        Some(DetailRequest {
            id,
            generation: self.generation,
        })
    }

    /// Commit a response. Stale and failed responses leave the state as is.
    pub fn apply(
        &mut self,
        request: &DetailRequest,
        outcome: FetchOutcome<RepositoryDetail>,
    ) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                id = %request.id,
                generation = request.generation,
                current = self.generation,
                "discarding stale repository response"
            );
            return false;
        }

        match outcome {
            FetchOutcome::Ok(repository) => {
                self.repository = Some(repository);
                true
            }
            FetchOutcome::Failed(e) => {
                tracing::warn!(id = %request.id, error = %e, "Failed to fetch repository");
                false
            }
        }
    }

    pub fn phase(&self) -> DetailPhase<'_> {
        match &self.repository {
            Some(repository) => DetailPhase::Loaded(repository),
            None => DetailPhase::Loading,
        }
    }

    pub fn active_id(&self) -> Option<&RepositoryId> {
        self.active.as_ref()
    }

    pub fn repository(&self) -> Option<&RepositoryDetail> {
        self.repository.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Run the fetch for an issued request
pub async fn load_detail<A>(api: &A, request: &DetailRequest) -> FetchOutcome<RepositoryDetail>
where
    A: TrendingApi + ?Sized,
{
    api.repository(&request.id).await.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{detail, point, MockApi};
    use crate::api::Endpoint;
    use crate::error::FetchError;
    use futures_util::future::join;
    use std::cell::RefCell;
    use std::time::Duration;

    #[test]
    fn test_starts_loading() {
        let state = DetailViewState::new();
        assert_eq!(state.phase(), DetailPhase::Loading);
        assert!(state.active_id().is_none());
    }

    #[test]
    fn test_same_id_does_not_refetch() {
        let mut state = DetailViewState::new();
        assert!(state.begin(RepositoryId::from("1")).is_some());
        assert!(state.begin(RepositoryId::from("1")).is_none());
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn test_id_change_discards_record() {
        let mut state = DetailViewState::new();
        let a = state.begin(RepositoryId::from("a")).unwrap();
        state.apply(&a, FetchOutcome::Ok(detail("a", "o/a", vec![])));
        assert!(matches!(state.phase(), DetailPhase::Loaded(_)));

        state.begin(RepositoryId::from("b")).unwrap();
        assert_eq!(state.phase(), DetailPhase::Loading);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = DetailViewState::new();
        let a = state.begin(RepositoryId::from("a")).unwrap();
        let b = state.begin(RepositoryId::from("b")).unwrap();

        assert!(!state.apply(&a, FetchOutcome::Ok(detail("a", "o/a", vec![]))));
        assert_eq!(state.phase(), DetailPhase::Loading);

        assert!(state.apply(&b, FetchOutcome::Ok(detail("b", "o/b", vec![]))));
        assert_eq!(state.repository().unwrap().full_name, "o/b");
    }

    #[test]
    fn test_returning_to_previous_id_refetches() {
        let mut state = DetailViewState::new();
        let a1 = state.begin(RepositoryId::from("a")).unwrap();
        state.begin(RepositoryId::from("b")).unwrap();
        let a2 = state.begin(RepositoryId::from("a")).unwrap();

        assert_ne!(a1.generation, a2.generation);
        assert!(!state.apply(&a1, FetchOutcome::Ok(detail("a", "o/a-old", vec![]))));
        assert!(state.apply(&a2, FetchOutcome::Ok(detail("a", "o/a", vec![]))));
    }

    #[tokio::test]
    async fn test_server_error_stays_loading() {
        let api = MockApi::new().with_repository("42", Err(FetchError::Status(500)));
        let mut state = DetailViewState::new();

        let request = state.begin(RepositoryId::from("42")).unwrap();
        let outcome = load_detail(&api, &request).await;

        assert!(outcome.is_failed());
        assert!(!state.apply(&request, outcome));
        assert_eq!(state.phase(), DetailPhase::Loading);
    }

    #[tokio::test]
    async fn test_slow_response_for_previous_id_never_shows() {
        let api = MockApi::new()
            .with_repository("a", Ok(detail("a", "o/a", vec![point("2024-01-01", 1, 0, 0)])))
            .with_repository("b", Ok(detail("b", "o/b", vec![point("2024-01-01", 9, 0, 0)])))
            .with_delay(
                Endpoint::Repository(RepositoryId::from("a")),
                Duration::from_millis(30),
            );
        let state = RefCell::new(DetailViewState::new());

        let a = state.borrow_mut().begin(RepositoryId::from("a")).unwrap();
        let b = state.borrow_mut().begin(RepositoryId::from("b")).unwrap();

        let fetch = |request: DetailRequest| {
            let state = &state;
            let api = &api;
            async move {
                let outcome = load_detail(api, &request).await;
                state.borrow_mut().apply(&request, outcome)
            }
        };
        let (applied_a, applied_b) = join(fetch(a), fetch(b)).await;

        assert!(!applied_a);
        assert!(applied_b);
        let state = state.borrow();
        assert_eq!(state.active_id(), Some(&RepositoryId::from("b")));
        assert_eq!(state.repository().unwrap().full_name, "o/b");
    }
}
