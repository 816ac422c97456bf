use super::*;

#[test]
fn default_config_targets_status_endpoint() {
    let config = DashboardConfig::default();
    assert_eq!(config.status_endpoint, "/api/status");
    assert_eq!(config.poll_interval_ms, 5_000);
    assert_eq!(config.notification_ttl_ms, 5_000);
}

#[test]
fn default_routes_allow_dashboard_and_arbitrage_only() {
    let config = DashboardConfig::default();
    assert!(config.polls_route("/"));
    assert!(config.polls_route("/arbitrage"));
    assert!(!config.polls_route("/cart"));
    assert!(!config.polls_route("/analytics"));
    assert!(!config.polls_route("/arbitrage/extra"));
}

#[test]
fn overrides_replace_endpoint_and_interval() {
    let config = DashboardConfig::default().with_overrides(Some("/prefix/api/status"), Some("2500"));
    assert_eq!(config.status_endpoint, "/prefix/api/status");
    assert_eq!(config.poll_interval_ms, 2_500);
}

#[test]
fn blank_or_invalid_overrides_keep_defaults() {
    let config = DashboardConfig::default().with_overrides(Some("   "), Some("fast"));
    assert_eq!(config, DashboardConfig::default());

    let config = DashboardConfig::default().with_overrides(None, Some("-10"));
    assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
}

#[test]
fn interval_override_is_raised_to_minimum() {
    let config = DashboardConfig::default().with_overrides(None, Some("10"));
    assert_eq!(config.poll_interval_ms, MIN_POLL_INTERVAL_MS);
}
