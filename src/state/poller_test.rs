use super::*;

#[test]
fn poller_default_is_idle() {
    let state = PollerState::default();
    assert!(!state.running);
    assert!(!state.in_flight);
    assert_eq!(state.generation, 0);
    assert_eq!(state.skipped_ticks, 0);
}

#[test]
fn start_is_idempotent_while_running() {
    let mut state = PollerState::default();
    let first = state.start();
    assert_eq!(first, Some(1));
    assert_eq!(state.start(), None);
    assert!(state.is_current(1));
}

#[test]
fn stop_invalidates_running_task() {
    let mut state = PollerState::default();
    let generation = state.start().unwrap();
    assert!(state.stop());
    assert!(!state.running);
    assert!(!state.is_current(generation));
}

#[test]
fn stop_without_running_task_is_noop() {
    let mut state = PollerState::default();
    assert!(!state.stop());
    assert_eq!(state, PollerState::default());
}

#[test]
fn restart_after_stop_issues_new_generation() {
    let mut state = PollerState::default();
    let old = state.start().unwrap();
    state.stop();
    let new = state.start().unwrap();
    assert_ne!(old, new);
    assert!(!state.is_current(old));
    assert!(state.is_current(new));
}

#[test]
fn begin_poll_allows_one_request_in_flight() {
    let mut state = PollerState::default();
    assert!(state.begin_poll());
    assert!(!state.begin_poll());
    assert!(!state.begin_poll());
    assert_eq!(state.skipped_ticks, 2);

    state.finish_poll();
    assert!(state.begin_poll());
    assert_eq!(state.skipped_ticks, 2);
}

#[test]
fn in_flight_guard_is_independent_of_scheduling() {
    let mut state = PollerState::default();
    assert!(state.begin_poll());
    state.stop();
    assert!(state.in_flight);
    state.finish_poll();
    assert!(!state.in_flight);
}

#[test]
fn refresh_confirms_only_when_request_started() {
    let mut state = PollerState::default();
    assert_eq!(refresh_notice(state.begin_poll()), ("Status refreshed", Severity::Info));
    let (message, severity) = refresh_notice(state.begin_poll());
    assert_eq!(message, "Status refresh already in progress");
    assert_eq!(severity, Severity::Warning);
}
