use super::*;
use crate::state::chat::{ConnectionState, SkipReason};

fn state(connection: ConnectionState) -> ChatState {
    ChatState { connection, ..ChatState::default() }
}

#[test]
fn detached_sender_drops_commands() {
    let sender = ChatSender::default();
    assert!(!sender.send("hello"));
    sender.close();
}

#[test]
fn submit_skips_blank_text_before_touching_sender() {
    let sender = ChatSender::default();
    assert_eq!(
        sender.submit(&state(ConnectionState::Open), "  "),
        SendOutcome::Skipped(SkipReason::EmptyText)
    );
}

#[test]
fn submit_skips_when_not_open() {
    let sender = ChatSender::default();
    assert_eq!(
        sender.submit(&state(ConnectionState::Closed), "hello"),
        SendOutcome::Skipped(SkipReason::NotOpen(ConnectionState::Closed))
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn submit_reports_failure_without_session() {
    let sender = ChatSender::default();
    assert_eq!(sender.submit(&state(ConnectionState::Open), "hello"), SendOutcome::Failed);
}

// =============================================================
// Handshake: commands arriving while the socket is connecting
// =============================================================

fn run_handshake<F, S>(ready: F, mut commands: S) -> Handshake
where
    F: std::future::Future<Output = bool>,
    S: futures::Stream<Item = ChatCommand> + Unpin,
{
    futures::executor::block_on(await_handshake(ready, &mut commands))
}

#[test]
fn handshake_ready_when_socket_opens() {
    let commands = futures::stream::pending::<ChatCommand>();
    assert_eq!(run_handshake(futures::future::ready(true), commands), Handshake::Ready);
}

#[test]
fn handshake_failed_when_socket_closes_first() {
    let commands = futures::stream::pending::<ChatCommand>();
    assert_eq!(run_handshake(futures::future::ready(false), commands), Handshake::Failed);
}

#[test]
fn close_during_handshake_cancels_without_waiting() {
    let (tx, rx) = futures::channel::mpsc::unbounded::<ChatCommand>();
    tx.unbounded_send(ChatCommand::Close).expect("receiver alive");
    assert_eq!(
        run_handshake(futures::future::pending::<bool>(), rx),
        Handshake::Cancelled
    );
}

#[test]
fn dropped_senders_cancel_handshake() {
    let (tx, rx) = futures::channel::mpsc::unbounded::<ChatCommand>();
    drop(tx);
    assert_eq!(
        run_handshake(futures::future::pending::<bool>(), rx),
        Handshake::Cancelled
    );
}

#[test]
fn sends_during_handshake_are_dropped_until_close() {
    use futures::StreamExt;

    let commands = futures::stream::iter(vec![
        ChatCommand::Send("early".to_owned()),
        ChatCommand::Send("again".to_owned()),
        ChatCommand::Close,
    ])
    .chain(futures::stream::pending());
    assert_eq!(
        run_handshake(futures::future::pending::<bool>(), commands),
        Handshake::Cancelled
    );
}

#[test]
fn commands_after_ready_stay_queued_for_the_session() {
    use futures::StreamExt;

    let (tx, mut rx) = futures::channel::mpsc::unbounded::<ChatCommand>();
    let outcome = futures::executor::block_on(await_handshake(futures::future::ready(true), &mut rx));
    assert_eq!(outcome, Handshake::Ready);

    tx.unbounded_send(ChatCommand::Send("hi".to_owned())).expect("receiver alive");
    let next = futures::executor::block_on(rx.next());
    assert_eq!(next, Some(ChatCommand::Send("hi".to_owned())));
}

// =============================================================
// Socket messages
// =============================================================

fn open_controller() -> ChatController<crate::net::transport::OutboxTransport> {
    let mut controller = ChatController::new(crate::net::transport::OutboxTransport::default());
    controller.on_open();
    controller
}

fn remote_close(code: u16, was_clean: bool) -> gloo_net::websocket::WebSocketError {
    gloo_net::websocket::WebSocketError::ConnectionClose(gloo_net::websocket::events::CloseEvent {
        code,
        reason: String::new(),
        was_clean,
    })
}

#[test]
fn remote_close_is_a_disconnect() {
    let mut controller = open_controller();
    apply_socket_message(&mut controller, Err(remote_close(1000, true)));

    assert_eq!(controller.connection(), ConnectionState::Closed);
    assert_eq!(
        controller.transport_mut().transmit("late".to_owned()),
        Err(TransportError::Closed)
    );
}

#[test]
fn socket_error_still_ends_the_session() {
    let mut controller = open_controller();
    apply_socket_message(&mut controller, Err(gloo_net::websocket::WebSocketError::ConnectionError));
    assert_eq!(controller.connection(), ConnectionState::Closed);
}

#[test]
fn unclean_remote_close_keeps_the_log() {
    let mut controller = open_controller();
    apply_socket_message(
        &mut controller,
        Ok(gloo_net::websocket::Message::Text(r#"{"type":"message","data":"hi"}"#.to_owned())),
    );
    apply_socket_message(&mut controller, Err(remote_close(1006, false)));

    assert_eq!(controller.connection(), ConnectionState::Closed);
    assert_eq!(controller.state().log.len(), 1);
}

#[test]
fn text_message_feeds_the_log() {
    let mut controller = open_controller();
    apply_socket_message(
        &mut controller,
        Ok(gloo_net::websocket::Message::Text(
            r#"{"type":"history","data":[{"data":"a"},{"data":"b"}]}"#.to_owned(),
        )),
    );
    assert_eq!(controller.state().log.len(), 2);
    assert_eq!(controller.connection(), ConnectionState::Open);
}

#[test]
fn binary_message_is_ignored() {
    let mut controller = open_controller();
    apply_socket_message(&mut controller, Ok(gloo_net::websocket::Message::Bytes(vec![1, 2, 3])));
    assert!(controller.state().log.is_empty());
    assert_eq!(controller.connection(), ConnectionState::Open);
}
