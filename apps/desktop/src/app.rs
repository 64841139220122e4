//! Root application component.

use dioxus::prelude::*;
use hnsearch_core::SearchView;

use crate::fetch::dispatch;
use crate::results::ResultsSection;
use crate::search::SearchForm;
use crate::state::*;
use crate::INITIAL_STATE;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Mount: move the pre-built state into signals and issue the page-0 fetch.
    use_hook(|| {
        let initial = INITIAL_STATE.lock().ok().and_then(|mut slot| slot.take());
        if let Some(state) = initial {
            *VIEW.write() = SearchView::new("", state.config.default_tag, 0);
            *CORE.write() = Some(state);
        }
        let ticket = VIEW.write().begin_fetch();
        dispatch(ticket);
    });

    rsx! {
        document::Stylesheet { href: APP_CSS }

        main {
            class: "app-shell",
            h1 { class: "app-title", "Hacker News Search" }
            SearchForm {}
            ResultsSection {}
        }
    }
}
