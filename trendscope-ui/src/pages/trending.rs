//! Trending Page
//!
//! Daily and weekly trending repositories in two tabs. Both lists are
//! fetched once on mount; a failed fetch just leaves its tab empty.

use leptos::*;
use leptos_router::*;

use trendscope::views::load_trending;
use trendscope::{ListViewState, RepositorySummary, TrendingWindow};

use crate::api::GlooClient;
use crate::components::StatChips;

/// Trending list page component
#[component]
pub fn TrendingPage() -> impl IntoView {
    let client = use_context::<GlooClient>().expect("GlooClient not found");
    let state = create_rw_signal(ListViewState::new());

    // Fetch both windows on mount; no tracked dependencies, so this runs once
    create_effect(move |_| {
        let client = client.clone();
        spawn_local(async move {
            load_trending(&client, |window, outcome| {
                // Page may have been left while the request was in flight
                state.try_update(|s| s.apply(window, outcome));
            })
            .await;
        });
    });

    view! {
        <div class="w-full">
            <h1 class="text-3xl font-bold mb-4">"Trending Repositories"</h1>

            <div class="flex border-b border-gray-700" role="tablist">
                {TrendingWindow::ALL
                    .into_iter()
                    .map(|window| view! { <TabButton window=window state=state /> })
                    .collect_view()}
            </div>

            <div role="tabpanel" class="p-6">
                <ul class="space-y-4">
                    {move || {
                        state
                            .with(|s| s.active().to_vec())
                            .into_iter()
                            .map(|repo| view! { <RepositoryRow repo=repo /> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn TabButton(window: TrendingWindow, state: RwSignal<ListViewState>) -> impl IntoView {
    let is_active = create_memo(move |_| state.with(|s| s.selected_tab == window));

    view! {
        <button
            role="tab"
            aria-selected=move || is_active.get().to_string()
            on:click=move |_| state.update(|s| s.select_tab(window))
            class=move || tab_class(is_active.get())
        >
            {window.label()}
        </button>
    }
}

fn tab_class(active: bool) -> String {
    let base = "px-4 py-2 text-sm font-medium uppercase tracking-wide transition-colors";
    if active {
        format!("{} text-[#58a6ff] border-b-2 border-[#58a6ff]", base)
    } else {
        format!("{} text-gray-400 hover:text-white", base)
    }
}

/// One clickable repository row
#[component]
fn RepositoryRow(repo: RepositorySummary) -> impl IntoView {
    let navigate = use_navigate();
    let path = ListViewState::route_for(&repo).path();
    let badges = repo.badges();
    let description = repo.description_text().to_string();
    let full_name = repo.full_name;

    view! {
        <li
            class="bg-[#161b22] rounded-lg shadow cursor-pointer hover:bg-gray-800 transition-colors"
            on:click=move |_| navigate(&path, Default::default())
        >
            <div class="flex items-center justify-between gap-4 p-4">
                <div class="min-w-0">
                    <p class="text-lg font-semibold truncate">{full_name}</p>
                    <p class="text-sm text-gray-400">{description}</p>
                </div>
                <StatChips badges=badges />
            </div>
        </li>
    }
}
