//! Result section — header with busy indicator, pagination, error line, and
//! the numbered result list.

mod pagination;
mod result_row;

use dioxus::prelude::*;
use hnsearch_core::config::FALLBACK_URL;
use hnsearch_core::render::render;

use crate::state::*;
use pagination::PaginationControls;
use result_row::ResultRow;

#[component]
pub fn ResultsSection() -> Element {
    let fallback = CORE
        .read()
        .as_ref()
        .map(|s| s.config.fallback_url.clone())
        .unwrap_or_else(|| FALLBACK_URL.to_string());
    let out = render(&VIEW.read(), &fallback);

    rsx! {
        section {
            class: "results",
            header {
                class: "results-header",
                h2 {
                    span { class: "results-page", "{out.header}" }
                    Spinner { visible: out.busy }
                }
                PaginationControls { pagination: out.pagination }
            }

            if let Some(err) = &out.error {
                div { class: "results-error", role: "alert", "{err}" }
            }

            ol {
                class: "results-list",
                for row in out.rows.iter() {
                    ResultRow { key: "{row.key}", row: row.clone() }
                }
            }
        }
    }
}

/// Rotating busy indicator bound to the loading flag.
#[component]
fn Spinner(visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        svg {
            class: "spinner",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "grey",
            stroke_width: "5",
            circle { cx: "12", cy: "12", r: "9", stroke_dasharray: "42 14" }
        }
    }
}
