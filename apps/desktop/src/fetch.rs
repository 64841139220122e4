//! Runs fetch tickets on the UI runtime and settles them into [`VIEW`].

use dioxus::prelude::*;
use hnsearch_core::{FetchError, FetchTicket};

use crate::state::*;

/// Spawn the request for `ticket`. Superseded tickets are dropped by
/// `SearchView::settle` when they complete.
pub fn dispatch(ticket: FetchTicket) {
    let (client, endpoint) = match CORE.read().as_ref() {
        Some(state) => (state.client.clone(), state.config.endpoint.clone()),
        None => (None, String::new()),
    };

    spawn(async move {
        let outcome = match client {
            Some(client) => client.search(&ticket.request).await,
            None => Err(FetchError::InvalidEndpoint {
                url: endpoint,
                reason: "no HTTP client available".into(),
            }),
        };
        VIEW.write().settle(ticket.token, outcome);
    });
}

/// Dispatch when an input change produced a ticket.
pub fn dispatch_opt(ticket: Option<FetchTicket>) {
    if let Some(ticket) = ticket {
        dispatch(ticket);
    }
}
