use super::*;

#[test]
fn outbox_drains_in_transmit_order() {
    let mut outbox = OutboxTransport::default();
    outbox.transmit("one".to_owned()).expect("open outbox");
    outbox.transmit("two".to_owned()).expect("open outbox");

    let drained = outbox.drain().collect::<Vec<_>>();
    assert_eq!(drained, vec!["one".to_owned(), "two".to_owned()]);
    assert_eq!(outbox.drain().count(), 0);
}

#[test]
fn outbox_rejects_after_close_and_drops_queue() {
    let mut outbox = OutboxTransport::default();
    outbox.transmit("queued".to_owned()).expect("open outbox");
    outbox.close();

    assert_eq!(outbox.drain().count(), 0);
    assert_eq!(outbox.transmit("late".to_owned()), Err(TransportError::Closed));
}

#[test]
fn transport_error_messages() {
    assert_eq!(TransportError::Closed.to_string(), "transport is closed");
    assert_eq!(
        TransportError::Open("bad url".to_owned()).to_string(),
        "failed to open socket: bad url"
    );
}
