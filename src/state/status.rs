//! Render-sync state for the status panel.
//!
//! DESIGN
//! ======
//! Keeps the last-known snapshot values explicitly instead of re-reading
//! them from rendered text. Change detection compares against these values,
//! so unchanged counters never re-render or replay their transition. The
//! panel reads each region through a memo, which only notifies when the
//! retained value actually changed.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::StatusSnapshot;

/// Connectivity as shown by the indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No poll has completed since page load.
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn from_flag(connected: bool) -> Self {
        if connected { Self::Connected } else { Self::Disconnected }
    }

    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }

    /// CSS classes for the indicator dot. `Unknown` renders as disconnected.
    pub fn indicator_class(self) -> &'static str {
        if self.is_connected() {
            "status-indicator status-indicator--connected"
        } else {
            "status-indicator status-indicator--disconnected"
        }
    }

    /// Tooltip text for the indicator.
    pub fn indicator_title(self) -> &'static str {
        if self.is_connected() { "Connected to game client" } else { "Not connected" }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Waiting for status",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }
}

/// Whether a counter moving from `previous` to `current` should play its
/// transition. The first value shown does not animate.
pub fn counter_transitions(previous: Option<u64>, current: Option<u64>) -> bool {
    matches!((previous, current), (Some(a), Some(b)) if a != b)
}

pub fn sniffer_label(running: Option<bool>) -> &'static str {
    match running {
        Some(true) => "Sniffer running",
        Some(false) => "Sniffer stopped",
        None => "",
    }
}

/// Which counter a change refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Counter {
    Offers,
    Requests,
}

/// Regions touched by one `apply_snapshot` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderDelta {
    pub connection: bool,
    pub player: bool,
    pub location: bool,
    pub offers: bool,
    pub requests: bool,
    pub sniffer: bool,
}

impl RenderDelta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Last-known values shown by the status panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusView {
    pub connection: ConnectionState,
    pub player: Option<String>,
    pub location: Option<String>,
    pub offers: Option<u64>,
    pub requests: Option<u64>,
    pub sniffer_running: Option<bool>,
    /// Epoch ms of the last successful poll or manual refresh.
    pub last_update_ms: Option<f64>,
}

impl StatusView {
    /// Merge a freshly polled snapshot, touching only fields whose value changed.
    pub fn apply_snapshot(&mut self, snapshot: &StatusSnapshot) -> RenderDelta {
        let mut delta = RenderDelta::default();

        let connection = ConnectionState::from_flag(snapshot.connection_established);
        if self.connection != connection {
            self.connection = connection;
            delta.connection = true;
        }

        if let Some(player) = snapshot.player() {
            if self.player.as_deref() != Some(player) {
                self.player = Some(player.to_owned());
                delta.player = true;
            }
        }
        if let Some(location) = snapshot.location() {
            if self.location.as_deref() != Some(location) {
                self.location = Some(location.to_owned());
                delta.location = true;
            }
        }

        if let Some(offers) = snapshot.offers_count {
            delta.offers = self.set_counter(Counter::Offers, offers);
        }
        if let Some(requests) = snapshot.requests_count {
            delta.requests = self.set_counter(Counter::Requests, requests);
        }

        if snapshot.sniffer_running.is_some() && self.sniffer_running != snapshot.sniffer_running {
            self.sniffer_running = snapshot.sniffer_running;
            delta.sniffer = true;
        }

        delta
    }

    /// Record a failed poll: only the connection state changes.
    pub fn mark_disconnected(&mut self) {
        self.connection = ConnectionState::Disconnected;
    }

    pub fn touch(&mut self, now_ms: f64) {
        self.last_update_ms = Some(now_ms);
    }

    pub fn counter(&self, counter: Counter) -> Option<u64> {
        match counter {
            Counter::Offers => self.offers,
            Counter::Requests => self.requests,
        }
    }

    fn set_counter(&mut self, counter: Counter, value: u64) -> bool {
        let slot = match counter {
            Counter::Offers => &mut self.offers,
            Counter::Requests => &mut self.requests,
        };
        if *slot == Some(value) {
            return false;
        }
        *slot = Some(value);
        true
    }
}
