//! Navigation Component
//!
//! Header bar with the app title linking back to the trending list.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-[#161b22] border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"📈"</span>
                        <span class="text-xl font-bold text-[#58a6ff]">"GitHub Trending Stats"</span>
                    </A>
                </div>
            </div>
        </nav>
    }
}
