//! Connection indicator with a manual reconnect action.

use leptos::prelude::*;

use crate::state::chat::{ChatState, ConnectionState};

#[cfg(test)]
#[path = "connection_badge_test.rs"]
mod connection_badge_test;

/// Shows the socket state; once closed, offers to start a new session.
#[component]
pub fn ConnectionBadge(on_reconnect: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let connection = move || chat.with(|c| c.connection);

    view! {
        <div class="connection-badge">
            <span class=move || connection_dot_class(connection())></span>
            <span class="connection-badge__label">{move || connection().label()}</span>
            <Show when=move || connection() == ConnectionState::Closed>
                <button class="btn connection-badge__reconnect" on:click=move |_| on_reconnect.run(())>
                    "Reconnect"
                </button>
            </Show>
        </div>
    }
}

fn connection_dot_class(state: ConnectionState) -> &'static str {
    match state {
        ConnectionState::Connecting => "connection-badge__dot connection-badge__dot--connecting",
        ConnectionState::Open => "connection-badge__dot connection-badge__dot--connected",
        ConnectionState::Closed => "connection-badge__dot connection-badge__dot--disconnected",
    }
}
