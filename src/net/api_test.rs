use super::*;

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(
        StatsError::Transport("connection refused".to_owned()).to_string(),
        "stats request failed: connection refused"
    );
    assert_eq!(StatsError::Status(502).to_string(), "stats request returned status 502");
    assert_eq!(
        StatsError::Decode("expected value".to_owned()).to_string(),
        "stats response malformed: expected value"
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn fetch_is_unavailable_natively() {
    let result = futures::executor::block_on(fetch_stats("/api/stats"));
    assert!(matches!(result, Err(StatsError::Unavailable)));
}
