use super::*;

// =============================================================
// Pre-flight
// =============================================================

#[test]
fn empty_file_input_is_rejected() {
    assert_eq!(ensure_file_selected(0), Err(UploadError::NoFileSelected));
}

#[test]
fn selected_file_passes() {
    assert_eq!(ensure_file_selected(1), Ok(()));
    assert_eq!(ensure_file_selected(3), Ok(()));
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_is_percentage_of_total() {
    assert_eq!(progress_percent(50.0, 200.0, true), Some(25.0));
    assert_eq!(progress_percent(200.0, 200.0, true), Some(100.0));
    assert_eq!(progress_percent(0.0, 200.0, true), Some(0.0));
}

#[test]
fn uncomputable_progress_is_skipped() {
    assert_eq!(progress_percent(50.0, 0.0, false), None);
    assert_eq!(progress_percent(50.0, 200.0, false), None);
}

#[test]
fn zero_total_is_skipped_even_if_flagged_computable() {
    assert_eq!(progress_percent(0.0, 0.0, true), None);
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn status_200_resolves_with_body() {
    assert_eq!(
        classify_response(200, "OK", "{\"ok\":true}".to_owned()),
        Ok("{\"ok\":true}".to_owned())
    );
}

#[test]
fn other_statuses_reject_with_status_text() {
    let err = classify_response(413, "Payload Too Large", String::new()).unwrap_err();
    assert_eq!(err, UploadError::Failed("Payload Too Large".to_owned()));
    assert_eq!(err.to_string(), "Upload failed: Payload Too Large");
    assert!(classify_response(201, "Created", String::new()).is_err());
}

#[test]
fn error_messages() {
    assert_eq!(UploadError::NoFileSelected.to_string(), "No file selected");
    assert_eq!(UploadError::Network.to_string(), "Network error");
    assert_eq!(
        UploadError::FormNotFound("upload-form".to_owned()).to_string(),
        "Form not found: upload-form"
    );
}

// =============================================================
// Native stubs
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn upload_is_unavailable_natively_and_never_reports_progress() {
    let result = futures::executor::block_on(upload_file_with_progress("upload-form", |_| {
        panic!("progress reported without a request");
    }));
    assert_eq!(result, Err(UploadError::Unavailable));
}
