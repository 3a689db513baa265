use super::*;

#[test]
fn default_is_hidden() {
    let state = ModalState::default();
    assert_eq!(state.phase, ModalPhase::Hidden);
    assert!(!state.is_open());
}

#[test]
fn close_goes_through_closing_then_hidden() {
    let mut state = ModalState::default();
    state.open();
    assert!(state.is_open());

    assert!(state.begin_close());
    assert!(state.is_closing());
    assert!(!state.is_open());

    assert!(state.finish_close());
    assert_eq!(state.phase, ModalPhase::Hidden);
}

#[test]
fn repeated_close_requests_schedule_once() {
    let mut state = ModalState::default();
    state.open();
    assert!(state.begin_close());
    assert!(!state.begin_close());
    assert!(state.finish_close());
    assert!(!state.finish_close());
}

#[test]
fn close_on_hidden_dialog_is_noop() {
    let mut state = ModalState::default();
    assert!(!state.begin_close());
    assert!(!state.finish_close());
    assert_eq!(state.phase, ModalPhase::Hidden);
}
