use super::*;

#[test]
fn dot_class_tracks_state() {
    assert!(connection_dot_class(ConnectionState::Open).ends_with("--connected"));
    assert!(connection_dot_class(ConnectionState::Connecting).ends_with("--connecting"));
    assert!(connection_dot_class(ConnectionState::Closed).ends_with("--disconnected"));
}
