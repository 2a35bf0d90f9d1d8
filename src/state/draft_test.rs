use super::*;
use crate::state::chat::SkipReason;

#[test]
fn draft_default_is_empty() {
    assert_eq!(DraftInput::default().text(), "");
}

#[test]
fn submit_clears_after_sent() {
    let mut draft = DraftInput::default();
    draft.set("  hello ");
    let mut seen = String::new();
    let outcome = draft.submit(|text| {
        seen = text.to_owned();
        SendOutcome::Sent
    });
    assert_eq!(outcome, SendOutcome::Sent);
    assert_eq!(seen, "  hello ");
    assert_eq!(draft.text(), "");
}

#[test]
fn submit_keeps_text_when_skipped_or_failed() {
    let mut draft = DraftInput::default();
    draft.set("   ");
    draft.submit(|_| SendOutcome::Skipped(SkipReason::EmptyText));
    assert_eq!(draft.text(), "   ");

    draft.set("retry me");
    draft.submit(|_| SendOutcome::Failed);
    assert_eq!(draft.text(), "retry me");
}
