use super::*;

// =============================================================
// Snapshot parsing
// =============================================================

#[test]
fn parses_full_response() {
    let raw = r#"{"running_bots": 3, "system": {"cpu": 42.5, "memory_percent": 60}}"#;
    let snapshot: StatsSnapshot = serde_json::from_str(raw).unwrap();
    assert_eq!(snapshot.running_bots, Some(3));
    let system = snapshot.system.unwrap();
    assert_eq!(system.cpu, Some(42.5));
    assert_eq!(system.memory_percent, Some(60.0));
}

#[test]
fn unknown_fields_are_ignored() {
    let raw = r#"{"running_bots": 1, "total_bots": 9, "system": {"cpu": 1.0, "disk": 3}}"#;
    let snapshot: StatsSnapshot = serde_json::from_str(raw).unwrap();
    assert_eq!(snapshot.running_bots, Some(1));
}

#[test]
fn system_block_is_optional() {
    let snapshot: StatsSnapshot = serde_json::from_str(r#"{"running_bots": 0}"#).unwrap();
    assert!(snapshot.system.is_none());
}

#[test]
fn wrong_type_is_rejected() {
    assert!(serde_json::from_str::<StatsSnapshot>(r#"{"running_bots": "three"}"#).is_err());
}

// =============================================================
// Derived display strings
// =============================================================

#[test]
fn full_snapshot_patches_every_counter() {
    let snapshot = StatsSnapshot {
        running_bots: Some(3),
        system: Some(SystemStats {
            cpu: Some(42.5),
            memory_percent: Some(60.0),
        }),
    };
    let patch = snapshot.patch();
    assert_eq!(patch.running_text.as_deref(), Some("3"));
    assert_eq!(patch.cpu_width.as_deref(), Some("42.5%"));
    assert_eq!(patch.cpu_text.as_deref(), Some("42.5%"));
    assert_eq!(patch.memory_width.as_deref(), Some("60%"));
}

#[test]
fn cpu_text_uses_one_decimal_but_width_is_raw() {
    let snapshot = StatsSnapshot {
        running_bots: None,
        system: Some(SystemStats {
            cpu: Some(7.26),
            memory_percent: None,
        }),
    };
    let patch = snapshot.patch();
    assert_eq!(patch.cpu_width.as_deref(), Some("7.26%"));
    assert_eq!(patch.cpu_text.as_deref(), Some("7.3%"));
    assert_eq!(patch.memory_width, None);
    assert_eq!(patch.running_text, None);
}

#[test]
fn cpu_text_rounds_ties_up() {
    let snapshot = StatsSnapshot {
        running_bots: None,
        system: Some(SystemStats {
            cpu: Some(12.25),
            memory_percent: None,
        }),
    };
    let patch = snapshot.patch();
    assert_eq!(patch.cpu_text.as_deref(), Some("12.3%"));
    assert_eq!(patch.cpu_width.as_deref(), Some("12.25%"));
}

#[test]
fn empty_snapshot_patches_nothing() {
    assert_eq!(StatsSnapshot::default().patch(), StatsPatch::default());
}

// =============================================================
// RefreshSequencer
// =============================================================

#[test]
fn in_order_responses_are_applied() {
    let mut seq = RefreshSequencer::default();
    let a = seq.issue();
    assert!(seq.accept(a));
    let b = seq.issue();
    assert!(seq.accept(b));
    assert_eq!(seq.last_applied(), b);
}

#[test]
fn stale_response_is_dropped() {
    let mut seq = RefreshSequencer::default();
    let slow = seq.issue();
    let fast = seq.issue();
    assert!(seq.accept(fast));
    assert!(!seq.accept(slow));
    assert_eq!(seq.last_applied(), fast);
}

#[test]
fn duplicate_response_is_dropped() {
    let mut seq = RefreshSequencer::default();
    let a = seq.issue();
    assert!(seq.accept(a));
    assert!(!seq.accept(a));
}

#[test]
fn failed_tick_does_not_block_later_ones() {
    let mut seq = RefreshSequencer::default();
    let _failed = seq.issue();
    let next = seq.issue();
    assert!(seq.accept(next));
}
