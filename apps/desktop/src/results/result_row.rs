use dioxus::prelude::*;
use hnsearch_core::render::RenderedRow;

#[component]
pub fn ResultRow(row: RenderedRow) -> Element {
    rsx! {
        li {
            class: "result-item",
            span { class: "result-ordinal", "{row.ordinal}." }
            a {
                class: "result-title",
                href: "{row.href}",
                target: "_blank",
                rel: "noreferrer",
                "{row.title}"
            }
            if let Some(points) = row.points {
                span { class: "result-meta", "{points} points" }
            }
            if let Some(author) = &row.author {
                span { class: "result-meta", "by {author}" }
            }
            if let Some(created) = &row.created_at {
                span { class: "result-meta", "{created}" }
            }
        }
    }
}
