//! Draft text box and send button.

use leptos::prelude::*;

use crate::net::client::ChatSender;
use crate::state::chat::ChatState;
use crate::state::draft::DraftInput;

/// Input row. Enter or the button submits; the draft clears only once the
/// message is handed to the session.
#[component]
pub fn MessageInput() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<ChatSender>>();
    let draft = RwSignal::new(DraftInput::default());

    let do_send = move || {
        let sender = sender.get_untracked();
        draft.update(|d| {
            d.submit(|text| chat.with_untracked(|state| sender.submit(state, text)));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || draft.with(|d| chat.with(|c| c.can_send(d.text())));

    view! {
        <div class="chat-input">
            <input
                class="chat-input__field"
                type="text"
                placeholder="Type a message"
                prop:value=move || draft.with(|d| d.text().to_owned())
                on:input=move |ev| draft.update(|d| d.set(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary chat-input__send" on:click=move |_| do_send() disabled=move || !can_send()>
                "Send"
            </button>
        </div>
    }
}
