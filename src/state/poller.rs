//! Scheduling state for the status poller.
//!
//! DESIGN
//! ======
//! The poll task is a detached future, so it cannot be cancelled directly.
//! Instead every `start` hands out a new generation number and the task exits
//! as soon as its generation is no longer current. `in_flight` allows at most
//! one outstanding status request; ticks that land while one is pending are
//! skipped rather than queued.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use crate::state::notifications::Severity;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PollerState {
    pub running: bool,
    pub generation: u64,
    pub in_flight: bool,
    pub skipped_ticks: u64,
}

impl PollerState {
    /// Arm a new poll task. Returns its generation, or `None` if one is
    /// already running.
    pub fn start(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.running = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Cancel the active task. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.generation += 1;
        true
    }

    /// Whether the task armed with `generation` should keep ticking.
    pub fn is_current(&self, generation: u64) -> bool {
        self.running && self.generation == generation
    }

    /// Claim the in-flight slot for one request.
    pub fn begin_poll(&mut self) -> bool {
        if self.in_flight {
            self.skipped_ticks += 1;
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Release the in-flight slot after the request settles.
    pub fn finish_poll(&mut self) {
        self.in_flight = false;
    }
}

/// Notification shown after a manual refresh, depending on whether a new
/// request went out.
pub fn refresh_notice(started: bool) -> (&'static str, Severity) {
    if started {
        ("Status refreshed", Severity::Info)
    } else {
        ("Status refresh already in progress", Severity::Warning)
    }
}
