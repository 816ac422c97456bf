//! Status panel: connection indicator, player, location and counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the poller's latest snapshot. Each region reads the retained
//! `StatusView` through a memo, so a poll that returns the same values leaves
//! the DOM untouched.

use leptos::prelude::*;

use crate::state::status::{Counter, StatusView, counter_transitions, sniffer_label};
use crate::util::format::{format_count, format_last_update};

/// How long the counter highlight stays on after a change.
#[cfg(feature = "csr")]
const COUNTER_TRANSITION_MS: u32 = 600;

#[component]
pub fn StatusPanel() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusView>>();

    let connection = Memo::new(move |_| status.with(|s| s.connection));
    let player = Memo::new(move |_| status.with(|s| s.player.clone()));
    let location = Memo::new(move |_| status.with(|s| s.location.clone()));
    let sniffer = Memo::new(move |_| status.with(|s| s.sniffer_running));
    let last_update = Memo::new(move |_| status.with(|s| s.last_update_ms));

    view! {
        <div class="status-panel">
            <span class="status-panel__item">
                <span
                    id="connection-status"
                    class=move || connection.get().indicator_class()
                    title=move || connection.get().indicator_title()
                ></span>
                <span class="status-panel__label">{move || connection.get().label()}</span>
            </span>
            <span class="status-panel__divider"></span>
            <span class="status-panel__item">
                "Player: "
                <span id="current-player">{move || player.get().unwrap_or_else(|| "-".to_owned())}</span>
            </span>
            <span class="status-panel__divider"></span>
            <span class="status-panel__item">
                "Location: "
                <span id="current-location">{move || location.get().unwrap_or_else(|| "-".to_owned())}</span>
            </span>
            <span class="status-panel__divider"></span>
            <CounterBadge counter=Counter::Offers label="Offers" element_id="offers-count"/>
            <span class="status-panel__divider"></span>
            <CounterBadge counter=Counter::Requests label="Requests" element_id="requests-count"/>
            <Show when=move || sniffer.get().is_some()>
                <span class="status-panel__divider"></span>
                <span id="sniffer-status" class="status-panel__item">{move || sniffer_label(sniffer.get())}</span>
            </Show>
            <span class="status-panel__spacer"></span>
            <span id="last-update" class="status-panel__item status-panel__item--muted">
                {move || format_last_update(last_update.get())}
            </span>
        </div>
    }
}

/// One locale-formatted counter that briefly highlights when its value changes.
#[component]
fn CounterBadge(counter: Counter, label: &'static str, element_id: &'static str) -> impl IntoView {
    let status = expect_context::<RwSignal<StatusView>>();
    let value = Memo::new(move |_| status.with(|s| s.counter(counter)));
    let changed = RwSignal::new(false);

    Effect::new(move |previous: Option<Option<u64>>| {
        let current = value.get();
        if counter_transitions(previous.flatten(), current) {
            changed.set(true);
            #[cfg(feature = "csr")]
            gloo_timers::callback::Timeout::new(COUNTER_TRANSITION_MS, move || {
                changed.try_set(false);
            })
            .forget();
        }
        current
    });

    view! {
        <span class="status-panel__item">
            {label}
            ": "
            <span
                id=element_id
                class="status-panel__counter"
                class:status-panel__counter--changed=move || changed.get()
            >
                {move || value.get().map_or_else(|| "-".to_owned(), format_count)}
            </span>
        </span>
    }
}
