//! Draft text for the message input box.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use super::chat::SendOutcome;

/// Text the user is composing. Owned by the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
}

impl DraftInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Hand the draft to `send` and clear it only when the frame went out.
    pub fn submit(&mut self, send: impl FnOnce(&str) -> SendOutcome) -> SendOutcome {
        let outcome = send(&self.text);
        if outcome.clears_draft() {
            self.text.clear();
        }
        outcome
    }
}
