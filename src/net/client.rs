//! WebSocket session task for the chat page.
//!
//! `connect` opens the socket and spawns one local task that owns a
//! [`ChatController`]. Inbound socket messages, a disconnect marker and user
//! commands are merged into a single event stream, so the controller sees
//! every event in order and never concurrently. After each event the task
//! writes any queued frames and publishes the controller's snapshot to the
//! `RwSignal<ChatState>` the components render from.
//!
//! All socket logic is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Open failures, socket errors and remote closes all end the session in
//! `Closed`. There is no automatic reconnect; the page offers a manual one
//! that starts a fresh session with an empty log.
//!
//! A close requested while the socket is still connecting ends the session
//! right away instead of waiting for the handshake.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

#[cfg(feature = "csr")]
use crate::config::ClientConfig;
#[cfg(any(test, feature = "csr"))]
use crate::net::controller::ChatController;
#[cfg(feature = "csr")]
use crate::net::transport::OutboxTransport;
#[cfg(any(test, feature = "csr"))]
use crate::net::transport::{Transport, TransportError};
#[cfg(feature = "csr")]
use crate::state::chat::ConnectionState;
use crate::state::chat::{ChatState, SendOutcome};

#[cfg(feature = "csr")]
const READY_POLL_MS: u64 = 25;

/// User intent forwarded into the session task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatCommand {
    Send(String),
    Close,
}

/// Handle for pushing commands into the active session task.
///
/// The default sender is detached and drops every command.
#[derive(Clone, Debug, Default)]
pub struct ChatSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<ChatCommand>>,
}

impl ChatSender {
    /// Queue `text` for sending. Returns `false` if no session is listening.
    pub fn send(&self, text: &str) -> bool {
        self.push(ChatCommand::Send(text.to_owned()))
    }

    /// Ask the session to close its socket.
    pub fn close(&self) {
        self.push(ChatCommand::Close);
    }

    /// Gate `text` against the latest snapshot and queue it.
    ///
    /// The session task checks the gate again before transmitting, so a
    /// socket that closes in between still drops the frame.
    pub fn submit(&self, state: &ChatState, text: &str) -> SendOutcome {
        if let Err(reason) = state.send_gate(text) {
            return SendOutcome::Skipped(reason);
        }
        if self.send(text) {
            SendOutcome::Sent
        } else {
            SendOutcome::Failed
        }
    }

    fn push(&self, command: ChatCommand) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(command).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = command;
            false
        }
    }
}

#[cfg(feature = "csr")]
enum SessionEvent {
    Inbound(Result<gloo_net::websocket::Message, gloo_net::websocket::WebSocketError>),
    Disconnected,
    Command(ChatCommand),
    Detached,
}

/// Start a new chat session against `config.endpoint`.
///
/// Resets `chat` to a fresh, connecting snapshot and returns the sender the
/// components use to reach this session.
#[cfg(feature = "csr")]
pub fn connect(config: &ClientConfig, chat: leptos::prelude::RwSignal<ChatState>) -> ChatSender {
    use leptos::prelude::Set;

    let (tx, rx) = futures::channel::mpsc::unbounded::<ChatCommand>();
    chat.set(ChatState::default());
    leptos::task::spawn_local(run_session(config.endpoint.clone(), chat, rx));
    ChatSender { tx: Some(tx) }
}

#[cfg(feature = "csr")]
async fn run_session(
    endpoint: String,
    chat: leptos::prelude::RwSignal<ChatState>,
    commands: futures::channel::mpsc::UnboundedReceiver<ChatCommand>,
) {
    use futures::{SinkExt, StreamExt, future, stream};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Set;

    let mut controller = ChatController::new(OutboxTransport::default());
    let publish = |controller: &ChatController<OutboxTransport>| chat.set(controller.state().clone());

    let ws = match WebSocket::open(&endpoint) {
        Ok(ws) => ws,
        Err(e) => {
            controller.on_transport_error(&TransportError::Open(e.to_string()));
            publish(&controller);
            return;
        }
    };

    let mut commands = commands;
    match await_handshake(wait_until_ready(&ws), &mut commands).await {
        Handshake::Ready => {}
        Handshake::Failed => {
            leptos::logging::warn!("chat socket to {endpoint} closed before opening");
            controller.on_closed();
            publish(&controller);
            return;
        }
        Handshake::Cancelled => {
            // Dropping `ws` on return closes the half-open socket.
            controller.close();
            publish(&controller);
            return;
        }
    }
    controller.on_open();
    publish(&controller);

    let (mut sink, source) = ws.split();
    let inbound = source
        .map(SessionEvent::Inbound)
        .chain(stream::once(future::ready(SessionEvent::Disconnected)));
    let commands = commands
        .map(SessionEvent::Command)
        .chain(stream::once(future::ready(SessionEvent::Detached)));
    let mut events = stream::select(inbound, commands);

    while let Some(event) = events.next().await {
        match event {
            SessionEvent::Inbound(message) => apply_socket_message(&mut controller, message),
            SessionEvent::Disconnected => controller.on_closed(),
            SessionEvent::Command(ChatCommand::Send(text)) => {
                controller.send(&text);
            }
            SessionEvent::Command(ChatCommand::Close) | SessionEvent::Detached => controller.close(),
        }

        let pending = controller.transport_mut().drain().collect::<Vec<_>>();
        for frame in pending {
            if let Err(e) = sink.send(Message::Text(frame)).await {
                controller.on_transport_error(&TransportError::Socket(e.to_string()));
                break;
            }
        }

        publish(&controller);
        if controller.connection() == ConnectionState::Closed {
            break;
        }
    }

    let _ = sink.close().await;
}

/// How the connecting phase of a session ended.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Handshake {
    Ready,
    Failed,
    /// The page closed the session (or dropped every sender) first.
    Cancelled,
}

/// Race the socket handshake against user commands.
///
/// A `Close` or a detached command channel wins immediately, even while the
/// handshake is still pending. Sends are dropped: nothing may go out before
/// the socket is open.
#[cfg(any(test, feature = "csr"))]
async fn await_handshake<F, S>(ready: F, commands: &mut S) -> Handshake
where
    F: std::future::Future<Output = bool>,
    S: futures::Stream<Item = ChatCommand> + Unpin,
{
    use futures::StreamExt;
    use futures::future::{Either, select};

    let mut ready = std::pin::pin!(ready);
    loop {
        match select(ready.as_mut(), commands.next()).await {
            Either::Left((true, _)) => return Handshake::Ready,
            Either::Left((false, _)) => return Handshake::Failed,
            Either::Right((Some(ChatCommand::Send(_)), _)) => {}
            Either::Right((Some(ChatCommand::Close) | None, _)) => return Handshake::Cancelled,
        }
    }
}

/// Feed one socket read result into the controller.
///
/// gloo-net reports every remote close, clean or not, as a
/// `ConnectionClose` error before the stream ends; that is a disconnect, not
/// a transport failure.
#[cfg(any(test, feature = "csr"))]
fn apply_socket_message<T: Transport>(
    controller: &mut ChatController<T>,
    message: Result<gloo_net::websocket::Message, gloo_net::websocket::WebSocketError>,
) {
    use gloo_net::websocket::{Message, WebSocketError};

    match message {
        Ok(Message::Text(raw)) => {
            // Decode failures are logged by the controller; the session continues.
            let _ = controller.on_frame(&raw);
        }
        Ok(Message::Bytes(_)) => {
            leptos::logging::warn!("ignoring binary chat frame");
        }
        Err(WebSocketError::ConnectionClose(event)) => {
            if !event.was_clean {
                leptos::logging::warn!("chat socket closed uncleanly: code={} reason={}", event.code, event.reason);
            }
            controller.on_closed();
        }
        Err(e) => {
            controller.on_transport_error(&TransportError::Socket(e.to_string()));
        }
    }
}

/// Wait for the socket handshake. Returns `false` if it closed instead.
#[cfg(feature = "csr")]
async fn wait_until_ready(ws: &gloo_net::websocket::futures::WebSocket) -> bool {
    use gloo_net::websocket::State;

    loop {
        match ws.state() {
            State::Connecting => {
                gloo_timers::future::sleep(std::time::Duration::from_millis(READY_POLL_MS)).await;
            }
            State::Open => return true,
            State::Closing | State::Closed => return false,
        }
    }
}
