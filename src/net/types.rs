//! Wire schema for the status endpoint.
//!
//! DESIGN
//! ======
//! The snapshot mirrors the server's `/api/status` JSON. Only the connection
//! flag is required; a payload without it, or with a field of the wrong type,
//! fails to parse and the poller treats it like a transport failure. Fields
//! the server leaves out keep their last displayed value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One status payload returned by `GET /api/status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Whether the server-side data sniffer has seen the game client.
    pub connection_established: bool,
    /// Current player name, if known. The server sends `""` before a player is seen.
    #[serde(default)]
    pub current_player: Option<String>,
    /// Current in-game location name, if known.
    #[serde(default)]
    pub current_location: Option<String>,
    /// Number of sell offers collected so far.
    #[serde(default)]
    pub offers_count: Option<u64>,
    /// Number of buy requests collected so far.
    #[serde(default)]
    pub requests_count: Option<u64>,
    /// Whether the sniffer process is running. Older servers omit it.
    #[serde(default)]
    pub sniffer_running: Option<bool>,
}

impl StatusSnapshot {
    /// Player name, ignoring blank values.
    pub fn player(&self) -> Option<&str> {
        non_blank(self.current_player.as_deref())
    }

    /// Location name, ignoring blank values.
    pub fn location(&self) -> Option<&str> {
        non_blank(self.current_location.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
