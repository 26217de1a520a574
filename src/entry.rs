//! WASM entry point and the functions exported to page scripts.
//!
//! The entry point is the only holder of the running controller. Page
//! markup reaches it through the exported `showToast`, and through
//! `startLogsStream` for the configured stream prefix.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, PageTransitionEvent};

use crate::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::net::log_stream::{self, LogStream};
use crate::net::upload;
use crate::state::toast::ToastKind;

thread_local! {
    static DASHBOARD: RefCell<Option<DashboardController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(doc) = crate::util::dom::document() else {
        return;
    };
    if doc.ready_state() == "loading" {
        on_window_once(&doc, "DOMContentLoaded", |_| boot());
    } else {
        boot();
    }

    if let Some(window) = web_sys::window() {
        on_window_once(&window, "pagehide", |_| teardown());
        // Pages restored from the back/forward cache need rewiring.
        let on_show = Closure::<dyn FnMut(Event)>::new(|e: Event| {
            let persisted = e
                .dyn_ref::<PageTransitionEvent>()
                .is_some_and(PageTransitionEvent::persisted);
            if persisted && DASHBOARD.with(|slot| slot.borrow().is_none()) {
                boot();
            }
        });
        let _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
        on_show.forget();
    }
}

fn boot() {
    let config = DashboardConfig::load();
    let Some(controller) = DashboardController::new(config) else {
        leptos::logging::warn!("dashboard: no document to bind");
        return;
    };
    let previous = DASHBOARD.with(|slot| slot.borrow_mut().replace(controller));
    drop(previous);
}

fn teardown() {
    let controller = DASHBOARD.with(|slot| slot.borrow_mut().take());
    drop(controller);
}

/// Register a listener that fires once and then releases itself.
fn on_window_once<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnOnce(Event) + 'static,
{
    let callback = Closure::once_into_js(handler);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    );
}

/// Show a toast. `kind` is `success`, `error`, `warning` or `info`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    let kind = ToastKind::parse(kind.as_deref());
    let shown = DASHBOARD.with(|slot| slot.borrow().as_ref().map(|c| c.show_toast(message, kind)));
    if shown.is_none() {
        leptos::logging::warn!("showToast before dashboard start: {message}");
    }
}

/// Tail a bot's log into `#logs-container`. Returns `null` when the browser
/// has no `EventSource`.
#[wasm_bindgen(js_name = startLogsStream)]
pub fn start_logs_stream(bot_id: &str) -> Option<LogStream> {
    let prefix = DASHBOARD
        .with(|slot| slot.borrow().as_ref().map(|c| c.config().logs_stream_prefix.clone()))
        .unwrap_or_else(|| DashboardConfig::default().logs_stream_prefix);
    log_stream::start_logs_stream(&prefix, bot_id)
}

/// Submit `form_id` with progress callbacks. Resolves with the response body
/// or rejects with a message; rejects immediately when no file is selected.
#[wasm_bindgen(js_name = uploadFileWithProgress)]
pub fn upload_file_with_progress(form_id: &str, progress: Option<js_sys::Function>) -> js_sys::Promise {
    let prepared = match upload::prepare_upload(form_id) {
        Ok(prepared) => prepared,
        Err(e) => return js_sys::Promise::reject(&JsValue::from_str(&e.to_string())),
    };
    wasm_bindgen_futures::future_to_promise(async move {
        let on_progress = move |pct: f64| {
            if let Some(callback) = &progress {
                let _ = callback.call1(&JsValue::NULL, &JsValue::from_f64(pct));
            }
        };
        upload::send_upload(prepared, on_progress)
            .await
            .map(|body| JsValue::from_str(&body))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}
