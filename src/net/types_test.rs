use super::*;

#[test]
fn snapshot_deserializes_full_payload() {
    let snapshot: StatusSnapshot = serde_json::from_value(serde_json::json!({
        "connection_established": true,
        "current_player": "Trader",
        "current_location": "Martlock",
        "offers_count": 12,
        "requests_count": 4,
        "sniffer_running": true
    }))
    .unwrap();

    assert!(snapshot.connection_established);
    assert_eq!(snapshot.player(), Some("Trader"));
    assert_eq!(snapshot.location(), Some("Martlock"));
    assert_eq!(snapshot.offers_count, Some(12));
    assert_eq!(snapshot.requests_count, Some(4));
    assert_eq!(snapshot.sniffer_running, Some(true));
}

#[test]
fn snapshot_accepts_null_and_missing_optional_fields() {
    let snapshot: StatusSnapshot = serde_json::from_value(serde_json::json!({
        "connection_established": false,
        "current_player": null,
        "offers_count": 0,
        "requests_count": 0
    }))
    .unwrap();

    assert_eq!(snapshot.current_player, None);
    assert_eq!(snapshot.current_location, None);
    assert_eq!(snapshot.sniffer_running, None);
}

#[test]
fn blank_player_and_location_are_treated_as_absent() {
    let snapshot = StatusSnapshot {
        current_player: Some(String::new()),
        current_location: Some("  ".to_owned()),
        ..StatusSnapshot::default()
    };
    assert_eq!(snapshot.player(), None);
    assert_eq!(snapshot.location(), None);
}

#[test]
fn snapshot_accepts_partial_counters() {
    let snapshot: StatusSnapshot = serde_json::from_value(serde_json::json!({
        "connection_established": true,
        "offers_count": 5
    }))
    .unwrap();
    assert_eq!(snapshot.offers_count, Some(5));
    assert_eq!(snapshot.requests_count, None);
}

#[test]
fn snapshot_requires_connection_flag() {
    let result = serde_json::from_value::<StatusSnapshot>(serde_json::json!({
        "offers_count": 5,
        "requests_count": 1
    }));
    assert!(result.is_err());
}

#[test]
fn snapshot_rejects_wrong_types() {
    let result = serde_json::from_value::<StatusSnapshot>(serde_json::json!({
        "connection_established": "yes",
        "offers_count": 1,
        "requests_count": 1
    }));
    assert!(result.is_err());

    let result = serde_json::from_value::<StatusSnapshot>(serde_json::json!({
        "connection_established": true,
        "offers_count": -1,
        "requests_count": 1
    }));
    assert!(result.is_err());
}

#[test]
fn snapshot_ignores_unknown_fields() {
    let snapshot: StatusSnapshot = serde_json::from_value(serde_json::json!({
        "connection_established": true,
        "offers_count": 1,
        "requests_count": 2,
        "uptime_seconds": 99
    }))
    .unwrap();
    assert_eq!(snapshot.requests_count, Some(2));
}
