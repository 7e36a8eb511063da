//! Trendscope Dashboard
//!
//! GitHub trending statistics built with Leptos (WASM).
//!
//! # Features
//!
//! - Daily and weekly trending lists
//! - Per-repository star/fork/watcher history chart
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page state machines, the chart model and the route table
//! come from the `trendscope` crate; this crate only renders them and talks
//! to the backend over HTTP.

use leptos::*;
use trendscope::Config;

mod api;
mod app;
mod components;
mod logging;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = Config::embedded();

    if let Err(e) = trendscope::logging::init_with_writer(&config.logging, logging::ConsoleWriter) {
        web_sys::console::warn_1(&format!("Logging not initialised: {}", e).into());
    }
    tracing::info!(api = %config.api_base(), "Trendscope dashboard starting");

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config /> });
}
