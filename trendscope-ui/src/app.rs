//! App Root Component
//!
//! Shell chrome and the two routes.

use leptos::*;
use leptos_router::*;
use trendscope::Config;

use crate::api::GlooClient;
use crate::components::Nav;
use crate::pages::{RepositoryPage, TrendingPage};

/// Route pattern of the detail page, `:id` is the repository identifier
pub const REPOSITORY_ROUTE: &str = "/repository/:id";

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    // Pages fetch through this client
    provide_context(GlooClient::new(config.api_base()));

    view! {
        <Router>
            <div class="min-h-screen bg-[#0d1117] text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=TrendingPage />
                        <Route path=REPOSITORY_ROUTE view=RepositoryPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
