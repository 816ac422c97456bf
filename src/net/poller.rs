//! Scheduled status polling.
//!
//! The poll task is a `spawn_local` loop: poll, sleep for the configured
//! interval, then check that its generation is still current before polling
//! again. `stop_polling` only flips state; the task notices on its next wake.
//!
//! ERROR HANDLING
//! ==============
//! A failed poll marks the view disconnected and logs a warning. Nothing is
//! retried before the next scheduled tick. Signals disposed by page teardown
//! make every update a no-op, so late responses are dropped.

use std::time::Duration;

use leptos::prelude::*;

use super::api;
use crate::app::DashboardHandles;
use crate::components::notification_stack::show_notification;
use crate::state::poller::{PollerState, refresh_notice};
use crate::state::status::StatusView;
use crate::util::format::now_ms;

/// Arm the poll task unless one is already running.
pub fn start_polling(handles: DashboardHandles) {
    let Some(generation) = handles.poller.try_update(PollerState::start).flatten() else {
        leptos::logging::debug_warn!("status polling already running");
        return;
    };
    let interval_ms = handles.config.with_value(|c| c.poll_interval_ms);
    let interval = Duration::from_millis(u64::from(interval_ms));
    leptos::logging::log!("status polling started (every {interval_ms}ms)");

    leptos::task::spawn_local(async move {
        loop {
            let current = handles.poller.try_with_untracked(|p| p.is_current(generation));
            if current != Some(true) {
                break;
            }
            poll_once(handles);
            gloo_timers::future::sleep(interval).await;
        }
    });
}

/// Cancel the poll task. Safe to call when none is running.
pub fn stop_polling(handles: DashboardHandles) {
    if handles.poller.try_update(PollerState::stop) == Some(true) {
        leptos::logging::log!("status polling stopped");
    }
}

/// Issue one status request and apply its outcome.
///
/// Returns `false` when the request was skipped because another one is
/// still in flight.
pub fn poll_once(handles: DashboardHandles) -> bool {
    if handles.poller.try_update(PollerState::begin_poll) != Some(true) {
        leptos::logging::debug_warn!("status poll skipped: previous request still in flight");
        return false;
    }
    let endpoint = handles.config.with_value(|c| c.status_endpoint.clone());

    leptos::task::spawn_local(async move {
        let outcome = api::fetch_status(&endpoint).await;
        if handles.poller.try_update(PollerState::finish_poll).is_none() {
            return;
        }
        match outcome {
            Ok(snapshot) => {
                handles.status.try_update(|s| {
                    s.apply_snapshot(&snapshot);
                    s.touch(now_ms());
                });
            }
            Err(e) => {
                leptos::logging::warn!("status poll failed: {e}");
                handles.status.try_update(StatusView::mark_disconnected);
            }
        }
    });
    true
}

/// Manual refresh (Ctrl/Cmd+R or `refreshStatus()`): poll now and confirm.
pub fn refresh_status(handles: DashboardHandles) {
    handles.status.try_update(|s| s.touch(now_ms()));
    let (message, severity) = refresh_notice(poll_once(handles));
    show_notification(handles, message, severity);
}
