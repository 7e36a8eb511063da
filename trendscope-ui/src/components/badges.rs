//! Stat Chips
//!
//! Star/fork/watcher counters shown as pills.

use leptos::*;
use trendscope::StatBadges;

#[component]
pub fn StatChips(
    badges: StatBadges,
    /// Larger pills for the detail header
    #[prop(optional)]
    large: bool,
) -> impl IntoView {
    let size = if large { "px-3 py-1 text-sm" } else { "px-2 py-0.5 text-xs" };

    view! {
        <div class="flex gap-2 shrink-0">
            {badges
                .iter()
                .map(|label| {
                    view! {
                        <span class=format!("rounded-full bg-gray-700 text-gray-100 {}", size)>
                            {label.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
