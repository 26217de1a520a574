use super::*;

#[test]
fn preview_label_includes_formatted_size() {
    let preview = file_preview("worker.py", 1536);
    assert_eq!(preview.label, "worker.py (1.5 KB)");
    assert_eq!(preview.language, Some(BotLanguage::Python));
}

#[test]
fn preview_handles_empty_files() {
    assert_eq!(file_preview("empty.sh", 0).label, "empty.sh (0 Bytes)");
}

#[test]
fn preview_detects_language_case_insensitively() {
    assert_eq!(file_preview("script.PY", 10).language, Some(BotLanguage::Python));
}

#[test]
fn preview_leaves_language_for_unknown_extension() {
    let preview = file_preview("archive.zip", 1_048_576);
    assert_eq!(preview.label, "archive.zip (1 MB)");
    assert_eq!(preview.language, None);
}

#[test]
fn declined_delete_is_cancelled() {
    assert!(should_cancel_delete(Some(false)));
}

#[test]
fn accepted_delete_proceeds() {
    assert!(!should_cancel_delete(Some(true)));
}

#[test]
fn unavailable_dialog_cancels_delete() {
    assert!(should_cancel_delete(None));
}
