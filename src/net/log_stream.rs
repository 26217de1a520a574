//! Server-sent log tail for a single bot.
//!
//! `start_logs_stream` opens an `EventSource` on the bot's stream endpoint
//! and appends every message to `#logs-container`, keeping it scrolled to
//! the bottom. There is no reconnect: a transport error closes the stream
//! and the caller decides whether to open another one.

#[cfg(test)]
#[path = "log_stream_test.rs"]
mod log_stream_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use futures::future::AbortHandle;
#[cfg(feature = "csr")]
use gloo_net::eventsource::futures::EventSource;

/// Element that receives streamed log lines.
pub const LOGS_CONTAINER_ID: &str = "logs-container";

/// Stream URL for `bot_id` under `prefix` (e.g. `/api/logs/stream/`).
pub fn stream_endpoint(prefix: &str, bot_id: &str) -> String {
    format!("{prefix}{bot_id}")
}

/// Text appended to the container for one message.
pub fn log_line(data: &str) -> String {
    format!("{data}\n")
}

/// Handle to a live log stream. Dropping it leaves the stream open; call
/// [`LogStream::close`] to stop it.
#[cfg_attr(feature = "csr", wasm_bindgen::prelude::wasm_bindgen)]
pub struct LogStream {
    #[cfg(feature = "csr")]
    source: Rc<RefCell<Option<EventSource>>>,
    #[cfg(feature = "csr")]
    abort: AbortHandle,
}

#[cfg_attr(feature = "csr", wasm_bindgen::prelude::wasm_bindgen)]
impl LogStream {
    /// Close the connection and stop appending. Safe to call repeatedly.
    pub fn close(&self) {
        #[cfg(feature = "csr")]
        {
            self.abort.abort();
            if close_source(&self.source) {
                leptos::logging::log!("log stream closed");
            }
        }
    }
}

#[cfg(feature = "csr")]
fn close_source(source: &Rc<RefCell<Option<EventSource>>>) -> bool {
    match source.borrow_mut().take() {
        Some(es) => {
            es.close();
            true
        }
        None => false,
    }
}

#[cfg(feature = "csr")]
fn append_to_container(data: &str) {
    let Some(container) = crate::util::dom::document().and_then(|d| d.get_element_by_id(LOGS_CONTAINER_ID)) else {
        return;
    };
    let _ = container.append_with_str_1(&log_line(data));
    container.set_scroll_top(container.scroll_height());
}

/// Open the log stream for `bot_id`.
///
/// Returns `None` when the browser cannot open an `EventSource`.
pub fn start_logs_stream(prefix: &str, bot_id: &str) -> Option<LogStream> {
    #[cfg(feature = "csr")]
    {
        use futures::StreamExt;
        use futures::future::Abortable;

        let url = stream_endpoint(prefix, bot_id);
        let mut es = match EventSource::new(&url) {
            Ok(es) => es,
            Err(e) => {
                leptos::logging::warn!("EventSource unavailable: {e}");
                return None;
            }
        };
        let mut messages = match es.subscribe("message") {
            Ok(sub) => sub,
            Err(e) => {
                leptos::logging::warn!("log stream subscribe failed: {e}");
                es.close();
                return None;
            }
        };

        let source = Rc::new(RefCell::new(Some(es)));
        let (abort, registration) = AbortHandle::new_pair();
        let task_source = Rc::clone(&source);
        let pump = async move {
            while let Some(event) = messages.next().await {
                match event {
                    Ok((_, msg)) => {
                        let data = msg.data().as_string().unwrap_or_default();
                        append_to_container(&data);
                    }
                    Err(e) => {
                        leptos::logging::error!("log stream failed: {e:?}");
                        close_source(&task_source);
                        break;
                    }
                }
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            let _ = Abortable::new(pump, registration).await;
        });

        leptos::logging::log!("log stream opened: {url}");
        Some(LogStream { source, abort })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (prefix, bot_id);
        None
    }
}
