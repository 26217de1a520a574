use super::*;

#[test]
fn classifies_bot_action_links() {
    assert_eq!(LinkAction::from_href("/bots/delete/7"), Some(LinkAction::Delete));
    assert_eq!(LinkAction::from_href("https://host/start/7"), Some(LinkAction::Start));
    assert_eq!(LinkAction::from_href("/stop/7?next=/dashboard"), Some(LinkAction::Stop));
}

#[test]
fn unrelated_links_are_ignored() {
    assert_eq!(LinkAction::from_href("/dashboard"), None);
    assert_eq!(LinkAction::from_href("/bots/7/logs"), None);
    assert_eq!(LinkAction::from_href("/restart"), None);
}

#[test]
fn only_start_and_stop_show_busy() {
    assert!(LinkAction::Start.shows_busy());
    assert!(LinkAction::Stop.shows_busy());
    assert!(!LinkAction::Delete.shows_busy());
}

#[test]
fn delete_wins_over_other_segments() {
    assert_eq!(LinkAction::from_href("/delete/start/7"), Some(LinkAction::Delete));
}

#[test]
fn tooltip_selector_matches_attribute() {
    assert_eq!(TOOLTIP_SELECTOR, format!("[{TOOLTIP_ATTR}]"));
}
