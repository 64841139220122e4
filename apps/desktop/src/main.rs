//! HN Search Desktop — Dioxus-powered Hacker News search.

use std::sync::Mutex;

use dioxus::prelude::*;
use hnsearch_core::Config;

mod app;
mod fetch;
mod results;
mod search;
mod state;

use app::App;
use state::AppState;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hnsearch=info")),
        )
        .with_target(false)
        .init();

    let initial_state = AppState::new(Config::load());
    if let Ok(mut slot) = INITIAL_STATE.lock() {
        *slot = Some(initial_state);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config as WindowConfig, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                WindowConfig::default()
                    .with_menu(None)
                    .with_background_color((246, 246, 239, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Hacker News Search")
                            .with_inner_size(LogicalSize::new(900.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 400.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
