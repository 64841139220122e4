//! Search form — query input + tag selector.

mod query_input;
mod tag_select;

use dioxus::prelude::*;
use query_input::QueryInput;
use tag_select::TagSelect;

#[component]
pub fn SearchForm() -> Element {
    rsx! {
        form {
            class: "search-form",
            onsubmit: move |e: FormEvent| e.prevent_default(),
            QueryInput {}
            TagSelect {}
        }
    }
}
