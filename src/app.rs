//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::net::client::ChatSender;
use crate::pages::chat::ChatPage;
use crate::state::chat::ChatState;

/// Root application component.
///
/// Provides the chat snapshot and the session sender to every child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let sender = RwSignal::new(ChatSender::default());

    provide_context(chat);
    provide_context(sender);

    view! {
        <Title text="WebSocket Chat"/>
        <ChatPage/>
    }
}
