//! Scrollable log of chat bubbles.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState};

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

/// Message log in arrival order, kept scrolled to the newest bubble.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.log.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = list_ref;
        }
    });

    view! {
        <div class="chat-log" node_ref=list_ref>
            {move || {
                if chat.with(|c| c.log.is_empty()) {
                    return view! { <div class="chat-log__empty">"No messages yet"</div> }.into_any();
                }

                chat.with(|c| bubble_rows(c.log.messages()))
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="chat-log__bubble">
                                {row.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

/// One rendered bubble. Messages carry no id, so position identifies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BubbleRow {
    pub index: usize,
    pub text: String,
}

pub fn bubble_rows(messages: &[ChatMessage]) -> Vec<BubbleRow> {
    messages
        .iter()
        .enumerate()
        .map(|(index, msg)| BubbleRow { index, text: msg.text.clone() })
        .collect()
}
