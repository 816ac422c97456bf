use super::*;

#[test]
fn is_success_accepts_only_2xx() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(304));
    assert!(!is_success(404));
    assert!(!is_success(500));
}

#[test]
fn parse_status_body_accepts_server_payload() {
    let body = r#"{"connection_established":true,"current_player":"Trader","current_location":"Lymhurst","offers_count":5,"requests_count":3,"sniffer_running":true}"#;
    let snapshot = parse_status_body(body).unwrap();
    assert!(snapshot.connection_established);
    assert_eq!(snapshot.offers_count, Some(5));
    assert_eq!(snapshot.requests_count, Some(3));
}

#[test]
fn parse_status_body_rejects_non_json() {
    let err = parse_status_body("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, StatusError::Malformed(_)));
}

#[test]
fn parse_status_body_rejects_other_shapes() {
    let err = parse_status_body(r#"{"status":"ok"}"#).unwrap_err();
    assert!(matches!(err, StatusError::Malformed(_)));

    let err = parse_status_body("[]").unwrap_err();
    assert!(matches!(err, StatusError::Malformed(_)));
}

#[test]
fn status_error_messages_name_the_failure() {
    assert_eq!(StatusError::HttpStatus(503).to_string(), "status request returned 503");
    assert_eq!(
        StatusError::Transport("network down".to_owned()).to_string(),
        "status request failed: network down"
    );
    assert!(StatusError::Malformed("eof".to_owned()).to_string().starts_with("malformed status payload"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn fetch_status_is_unavailable_natively() {
    let result = block_on(fetch_status("/api/status"));
    assert_eq!(result, Err(StatusError::Unavailable));
}

/// Drive a future that never awaits anything pending.
#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
