//! Free-text query input. Every edit rewinds to page 0 and fetches.

use dioxus::prelude::*;

use crate::fetch::dispatch_opt;
use crate::state::*;

#[component]
pub fn QueryInput() -> Element {
    let query = VIEW.read().query().to_string();
    let has_query = !query.is_empty();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            label { r#for: "query", class: "search-label", "Search" }

            div {
                class: "search-input-row",

                svg {
                    class: "search-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                input {
                    class: "search-input",
                    id: "query",
                    name: "query",
                    r#type: "text",
                    placeholder: "Search Hacker News...",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        let ticket = VIEW.write().set_query(e.value());
                        dispatch_opt(ticket);
                    },
                }

                if has_query {
                    button {
                        class: "search-clear",
                        r#type: "button",
                        onclick: move |_| {
                            let ticket = VIEW.write().set_query(String::new());
                            dispatch_opt(ticket);
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
