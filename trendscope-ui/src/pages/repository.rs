//! Repository Page
//!
//! Header metadata and statistics history for the repository in the URL.
//! A new identifier in the route discards the shown record and refetches;
//! responses for an identifier that is no longer active are ignored.

use leptos::*;
use leptos_router::*;

use trendscope::views::load_detail;
use trendscope::{DetailPhase, DetailViewState, RepositoryDetail, RepositoryId};

use crate::api::GlooClient;
use crate::components::{HistoryChart, StatChips};

/// Repository detail page component
#[component]
pub fn RepositoryPage() -> impl IntoView {
    let client = use_context::<GlooClient>().expect("GlooClient not found");
    let params = use_params_map();
    let route_id = create_memo(move |_| params.with(|p| p.get("id").cloned()));
    let state = create_rw_signal(DetailViewState::new());

    // Refetch whenever the route identifier changes
    create_effect(move |_| {
        let Some(id) = route_id.get() else {
            return;
        };
        let Some(request) = state.try_update(|s| s.begin(RepositoryId::from(id))).flatten() else {
            return;
        };

        let client = client.clone();
        spawn_local(async move {
            let outcome = load_detail(&client, &request).await;
            state.try_update(|s| s.apply(&request, outcome));
        });
    });

    view! {
        <div>
            {move || {
                state.with(|s| match s.phase() {
                    DetailPhase::Loading => view! { <p class="text-gray-400">"Loading..."</p> }.into_view(),
                    DetailPhase::Loaded(repo) => view! { <RepositoryView repo=repo.clone() /> }.into_view(),
                })
            }}
        </div>
    }
}

#[component]
fn RepositoryView(repo: RepositoryDetail) -> impl IntoView {
    let badges = repo.badges();
    let description = repo.description_text().to_string();

    view! {
        <div class="space-y-6">
            <section class="bg-[#161b22] rounded-xl p-6">
                <h1 class="text-3xl font-bold mb-2">{repo.full_name}</h1>
                <p class="text-gray-300 mb-4">{description}</p>
                <a
                    href=repo.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-[#58a6ff] hover:underline"
                >
                    "View on GitHub"
                </a>
                <div class="mt-4">
                    <StatChips badges=badges large=true />
                </div>
            </section>

            <section class="bg-[#161b22] rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Statistics History"</h2>
                <HistoryChart history=repo.history />
            </section>
        </div>
    }
}
