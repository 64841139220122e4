//! Previous/Next controls.

use dioxus::prelude::*;
use hnsearch_core::render::Pagination;

use crate::fetch::dispatch_opt;
use crate::state::*;

#[component]
pub fn PaginationControls(pagination: Pagination) -> Element {
    rsx! {
        div {
            class: "pagination",
            button {
                class: "link",
                disabled: pagination.prev_disabled,
                onclick: move |_| {
                    let ticket = VIEW.write().prev_page();
                    dispatch_opt(ticket);
                },
                "Previous"
            }
            button {
                class: "link",
                disabled: pagination.next_disabled,
                onclick: move |_| {
                    let ticket = VIEW.write().next_page();
                    dispatch_opt(ticket);
                },
                "Next"
            }
        }
    }
}
