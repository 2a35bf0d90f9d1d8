//! The chat screen: owns the socket session for as long as it is mounted.

use leptos::prelude::*;

use crate::components::connection_badge::ConnectionBadge;
use crate::components::message_input::MessageInput;
use crate::components::message_list::MessageList;
use crate::config::ClientConfig;
use crate::net::client::ChatSender;
use crate::state::chat::ChatState;

/// Chat page. Connects on mount, closes the session on unmount, and starts a
/// fresh session (with an empty log) when the user asks to reconnect.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<ChatSender>>();
    let config = ClientConfig::from_browser();

    let start_session = move || {
        sender.get_untracked().close();
        #[cfg(feature = "csr")]
        {
            sender.set(crate::net::client::connect(&config, chat));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, chat);
        }
    };

    let start_session = StoredValue::new(start_session);
    start_session.with_value(|start| start());

    on_cleanup(move || sender.get_untracked().close());

    let on_reconnect = Callback::new(move |()| start_session.with_value(|start| start()));

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1 class="chat-page__title">"WebSocket Chat"</h1>
                <ConnectionBadge on_reconnect=on_reconnect/>
            </header>
            <MessageList/>
            <MessageInput/>
        </div>
    }
}
