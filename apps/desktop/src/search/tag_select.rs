//! Closed-set tag selector.

use dioxus::prelude::*;
use hnsearch_core::Tag;
use tracing::warn;

use crate::fetch::dispatch_opt;
use crate::state::*;

#[component]
pub fn TagSelect() -> Element {
    let current = VIEW.read().tag();

    rsx! {
        div {
            class: "search-field",
            label { r#for: "tag", class: "search-label", "Tag" }
            select {
                class: "tag-select",
                id: "tag",
                name: "tag",
                value: current.as_str(),
                onchange: move |e: Event<FormData>| {
                    match e.value().parse::<Tag>() {
                        Ok(tag) => {
                            let ticket = VIEW.write().set_tag(tag);
                            dispatch_opt(ticket);
                        }
                        Err(err) => warn!(error = %err, "Ignoring tag selection"),
                    }
                },
                for tag in Tag::ALL {
                    option {
                        value: tag.as_str(),
                        selected: tag == current,
                        "{tag.label()}"
                    }
                }
            }
        }
    }
}
