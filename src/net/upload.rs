//! Bot file upload with progress reporting.
//!
//! `gloo-net` requests expose no upload progress, so the submit goes through
//! `XMLHttpRequest` directly. The work is split in two: [`prepare_upload`]
//! runs the pre-flight checks synchronously and never touches the network,
//! and [`send_upload`] performs the request.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned to the caller as an [`UploadError`]; nothing is
//! retried.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Form not found: {0}")]
    FormNotFound(String),
    #[error("No file selected")]
    NoFileSelected,
    #[error("Upload failed: {0}")]
    Failed(String),
    #[error("Network error")]
    Network,
    #[error("not available outside the browser")]
    Unavailable,
}

/// Percentage for a progress tick, or `None` when the total is unknown.
pub fn progress_percent(loaded: f64, total: f64, length_computable: bool) -> Option<f64> {
    if !length_computable || total <= 0.0 {
        return None;
    }
    Some(loaded / total * 100.0)
}

/// Reject before any request when the form's file input is empty.
///
/// # Errors
///
/// Returns [`UploadError::NoFileSelected`] when `file_count` is zero.
pub fn ensure_file_selected(file_count: u32) -> Result<(), UploadError> {
    if file_count == 0 {
        return Err(UploadError::NoFileSelected);
    }
    Ok(())
}

/// Map a completed request onto the upload outcome. Only 200 is success.
///
/// # Errors
///
/// Returns [`UploadError::Failed`] carrying the status text for any other
/// status.
pub fn classify_response(status: u16, status_text: &str, body: String) -> Result<String, UploadError> {
    if status == 200 {
        Ok(body)
    } else {
        Err(UploadError::Failed(status_text.to_owned()))
    }
}

/// A form that passed pre-flight checks and is ready to submit.
pub struct PreparedUpload {
    #[cfg(feature = "csr")]
    action: String,
    #[cfg(feature = "csr")]
    data: web_sys::FormData,
}

/// Locate `form_id`, check that a file is selected, and snapshot its fields.
///
/// # Errors
///
/// Returns [`UploadError::FormNotFound`] or [`UploadError::NoFileSelected`]
/// without issuing any request.
pub fn prepare_upload(form_id: &str) -> Result<PreparedUpload, UploadError> {
    #[cfg(feature = "csr")]
    {
        use crate::util::dom;

        let doc = dom::document().ok_or(UploadError::Unavailable)?;
        let form: web_sys::HtmlFormElement =
            dom::by_id(&doc, form_id).ok_or_else(|| UploadError::FormNotFound(form_id.to_owned()))?;
        let file_count = form
            .query_selector("input[type=\"file\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .map_or(0, |files| files.length());
        ensure_file_selected(file_count)?;

        let data = web_sys::FormData::new_with_form(&form)
            .map_err(|_| UploadError::Failed("form data unavailable".to_owned()))?;
        Ok(PreparedUpload {
            action: form.action(),
            data,
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = form_id;
        Err(UploadError::Unavailable)
    }
}

/// POST a prepared form, reporting progress through `on_progress`.
///
/// # Errors
///
/// Returns [`UploadError::Failed`] on a non-200 status and
/// [`UploadError::Network`] when the request cannot complete.
#[allow(clippy::unused_async)]
pub async fn send_upload<F>(prepared: PreparedUpload, on_progress: F) -> Result<String, UploadError>
where
    F: FnMut(f64) + 'static,
{
    #[cfg(feature = "csr")]
    {
        use web_sys::{Event, ProgressEvent, XmlHttpRequest};

        type Outcome = Result<String, UploadError>;

        let xhr = XmlHttpRequest::new().map_err(|_| UploadError::Network)?;
        let (tx, rx) = futures::channel::oneshot::channel::<Outcome>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let mut on_progress = on_progress;
        let progress = Closure::wrap(Box::new(move |e: ProgressEvent| {
            if let Some(pct) = progress_percent(e.loaded(), e.total(), e.length_computable()) {
                on_progress(pct);
            }
        }) as Box<dyn FnMut(ProgressEvent)>);
        if let Ok(upload) = xhr.upload() {
            let _ = upload.add_event_listener_with_callback("progress", progress.as_ref().unchecked_ref());
        }

        let load_tx = Rc::clone(&tx);
        let load_xhr = xhr.clone();
        let on_load = Closure::wrap(Box::new(move |_: Event| {
            let status = load_xhr.status().unwrap_or(0);
            let status_text = load_xhr.status_text().unwrap_or_default();
            let body = load_xhr.response_text().ok().flatten().unwrap_or_default();
            if let Some(tx) = load_tx.borrow_mut().take() {
                let _ = tx.send(classify_response(status, &status_text, body));
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = xhr.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());

        let error_tx = Rc::clone(&tx);
        let on_error = Closure::wrap(Box::new(move |_: Event| {
            if let Some(tx) = error_tx.borrow_mut().take() {
                let _ = tx.send(Err(UploadError::Network));
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = xhr.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());

        xhr.open("POST", &prepared.action).map_err(|_| UploadError::Network)?;
        xhr.send_with_opt_form_data(Some(&prepared.data))
            .map_err(|_| UploadError::Network)?;

        let outcome = rx.await.unwrap_or(Err(UploadError::Network));
        if let Err(e) = &outcome {
            leptos::logging::warn!("upload to {} failed: {e}", prepared.action);
        }
        // Listeners must outlive the request.
        drop((progress, on_load, on_error));
        outcome
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (prepared, on_progress);
        Err(UploadError::Unavailable)
    }
}

/// Validate and submit `form_id` in one step.
///
/// # Errors
///
/// See [`prepare_upload`] and [`send_upload`].
pub async fn upload_file_with_progress<F>(form_id: &str, on_progress: F) -> Result<String, UploadError>
where
    F: FnMut(f64) + 'static,
{
    let prepared = prepare_upload(form_id)?;
    send_upload(prepared, on_progress).await
}
