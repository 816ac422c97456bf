//! Dashboard runtime configuration.
//!
//! Defaults match the server's routes. The mount element can override the
//! status endpoint and poll interval through `data-*` attributes so the same
//! WASM bundle works behind a different prefix.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default status endpoint polled by the dashboard.
pub const DEFAULT_STATUS_ENDPOINT: &str = "/api/status";
/// Default delay between scheduled polls.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5_000;
/// Lower bound for configured poll intervals.
pub const MIN_POLL_INTERVAL_MS: u32 = 1_000;
/// How long a notification stays on screen before expiring.
pub const DEFAULT_NOTIFICATION_TTL_MS: u32 = 5_000;

const POLLING_ROUTES: &[&str] = &["/", "/arbitrage"];

/// Attribute on the mount element overriding the status endpoint.
pub const ENDPOINT_ATTRIBUTE: &str = "data-status-endpoint";
/// Attribute on the mount element overriding the poll interval.
pub const INTERVAL_ATTRIBUTE: &str = "data-poll-interval-ms";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub status_endpoint: String,
    pub poll_interval_ms: u32,
    pub notification_ttl_ms: u32,
    pub polling_routes: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_owned(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            polling_routes: POLLING_ROUTES.iter().map(|r| (*r).to_owned()).collect(),
        }
    }
}

impl DashboardConfig {
    /// Apply raw attribute overrides. Blank or unparsable values keep the
    /// current setting; intervals below the minimum are raised to it.
    #[must_use]
    pub fn with_overrides(mut self, endpoint: Option<&str>, interval_ms: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.status_endpoint = endpoint.to_owned();
        }
        if let Some(Ok(ms)) = interval_ms.map(|raw| raw.trim().parse::<u32>()) {
            self.poll_interval_ms = ms.max(MIN_POLL_INTERVAL_MS);
        }
        self
    }

    /// Whether automatic polling should run on `path`.
    pub fn polls_route(&self, path: &str) -> bool {
        self.polling_routes.iter().any(|route| route == path)
    }

    /// Read overrides from the mount element's attributes.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn from_element(element: &web_sys::Element) -> Self {
        let endpoint = element.get_attribute(ENDPOINT_ATTRIBUTE);
        let interval = element.get_attribute(INTERVAL_ATTRIBUTE);
        Self::default().with_overrides(endpoint.as_deref(), interval.as_deref())
    }
}
