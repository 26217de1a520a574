//! Browser wiring for [`DashboardController`].

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use super::{file_preview, should_cancel_delete};
use crate::components::toast_stack::ToastStack;
use crate::config::DashboardConfig;
use crate::net::api::fetch_stats;
use crate::state::busy::{BUSY_LABEL_HTML, BusyLabels};
use crate::state::stats::{RefreshSequencer, StatsSnapshot};
use crate::state::timers::TimerSlots;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::tooltip::{Rect, TooltipRegistry, place_above};
use crate::util::dom::{self, Listener};
use crate::util::theme;
use crate::view::{DashboardView, TOOLTIP_ATTR};

/// Owns the bound view plus every listener and timer attached to it.
pub struct DashboardController {
    shared: Rc<Shared>,
    listeners: Vec<Listener>,
    poll: Option<Interval>,
    /// `UnmountHandle` for the toast stack; dropping it removes the stack.
    toast_mount: Option<Box<dyn Any>>,
}

/// State reachable from listeners. Timer callbacks hold a `Weak` so a
/// pending timer never keeps a torn-down controller alive.
struct Shared {
    config: DashboardConfig,
    view: DashboardView,
    busy: RefCell<BusyLabels>,
    busy_timers: RefCell<TimerSlots<usize, Timeout>>,
    tooltips: RefCell<TooltipRegistry<HtmlElement>>,
    sequencer: RefCell<RefreshSequencer>,
    toasts: RwSignal<ToastState>,
    toast_timers: RefCell<TimerSlots<u64, Timeout>>,
}

impl DashboardController {
    /// Bind the current document and attach every handler.
    ///
    /// Returns `None` outside a document.
    pub fn new(config: DashboardConfig) -> Option<Self> {
        let doc = dom::document()?;
        theme::restore(&config.storage_key);

        let toasts = RwSignal::new(ToastState::default());
        let toast_mount = doc.body().map(|body| {
            let handle = leptos::mount::mount_to(body, move || view! { <ToastStack toasts/> });
            Box::new(handle) as Box<dyn Any>
        });
        if toast_mount.is_none() {
            leptos::logging::warn!("dashboard: no <body>, toasts disabled");
        }

        let shared = Rc::new(Shared {
            view: DashboardView::bind(&doc),
            config,
            busy: RefCell::new(BusyLabels::default()),
            busy_timers: RefCell::new(TimerSlots::default()),
            tooltips: RefCell::new(TooltipRegistry::default()),
            sequencer: RefCell::new(RefreshSequencer::default()),
            toasts,
            toast_timers: RefCell::new(TimerSlots::default()),
        });

        let listeners = attach_listeners(&shared);
        let poll = start_polling(&shared);
        leptos::logging::log!(
            "dashboard ready: {} listeners, stats polling {}",
            listeners.len(),
            if poll.is_some() { "on" } else { "off" }
        );
        Some(Self {
            shared,
            listeners,
            poll,
            toast_mount,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.shared.config
    }

    /// Show a transient banner; returns the toast id.
    pub fn show_toast(&self, message: &str, kind: ToastKind) -> u64 {
        self.shared.show_toast(message, kind)
    }
}

impl Drop for DashboardController {
    fn drop(&mut self) {
        self.poll.take();
        self.listeners.clear();
        self.shared.teardown();
        self.toast_mount.take();
        leptos::logging::log!("dashboard torn down");
    }
}

fn attach_listeners(shared: &Rc<Shared>) -> Vec<Listener> {
    let view = &shared.view;
    let mut listeners = Vec::new();

    for link in &view.delete_links {
        let prompt = shared.config.delete_prompt.clone();
        listeners.push(Listener::new(link, "click", move |e: Event| {
            let confirmed = web_sys::window().and_then(|w| w.confirm_with_message(&prompt).ok());
            if should_cancel_delete(confirmed) {
                e.prevent_default();
            }
        }));
    }

    for (index, link) in view.action_links.iter().enumerate() {
        let shared = Rc::clone(shared);
        listeners.push(Listener::new(link, "click", move |_| shared.begin_busy(index)));
    }

    if let Some(toggle) = &view.theme_toggle {
        let shared = Rc::clone(shared);
        listeners.push(Listener::new(toggle, "click", move |_| shared.toggle_theme()));
    }

    if let Some(input) = &view.file_input {
        let shared = Rc::clone(shared);
        listeners.push(Listener::new(input, "change", move |_| shared.update_file_preview()));
    }

    for (index, target) in view.tooltip_targets.iter().enumerate() {
        let enter = Rc::clone(shared);
        listeners.push(Listener::new(target, "mouseenter", move |_| enter.show_tooltip(index)));
        let leave = Rc::clone(shared);
        listeners.push(Listener::new(target, "mouseleave", move |_| leave.hide_tooltip(index)));
    }

    listeners
}

fn start_polling(shared: &Rc<Shared>) -> Option<Interval> {
    let pathname = web_sys::window()?.location().pathname().ok()?;
    if !shared.config.polls_on(&pathname) {
        return None;
    }
    let weak = Rc::downgrade(shared);
    Some(Interval::new(shared.config.poll_interval_ms, move || {
        if let Some(shared) = weak.upgrade() {
            shared.refresh_stats();
        }
    }))
}

impl Shared {
    // =============================================================
    // Start/stop busy state
    // =============================================================

    fn begin_busy(self: &Rc<Self>, index: usize) {
        let Some(link) = self.view.action_links.get(index) else {
            return;
        };
        if self.busy.borrow_mut().begin(index, &link.inner_html()) {
            link.set_inner_html(BUSY_LABEL_HTML);
            let _ = link.set_attribute("disabled", "");
            let _ = link.set_attribute("aria-disabled", "true");
        }

        let weak = Rc::downgrade(self);
        let reset = Timeout::new(self.config.busy_reset_ms, move || {
            if let Some(shared) = weak.upgrade() {
                shared.end_busy(index);
            }
        });
        self.busy_timers.borrow_mut().arm(index, reset);
    }

    fn end_busy(&self, index: usize) {
        let Some(original) = self.busy.borrow_mut().finish(index) else {
            return;
        };
        if let Some(link) = self.view.action_links.get(index) {
            restore_action_link(link, &original);
        }
    }

    // =============================================================
    // Theme
    // =============================================================

    fn toggle_theme(&self) {
        let next = theme::toggle(theme::current(), &self.config.storage_key);
        if let Some(icon) = &self.view.theme_icon {
            icon.set_class_name(next.icon_class());
        }
    }

    // =============================================================
    // Upload preview
    // =============================================================

    fn update_file_preview(&self) {
        let Some(input) = &self.view.file_input else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size().max(0.0) as u64;
        let preview = file_preview(&file.name(), size);

        if let Some(name_el) = &self.view.file_name {
            name_el.set_text_content(Some(&preview.label));
        }
        if let Some(panel) = &self.view.file_preview {
            let _ = panel.remove_attribute("hidden");
        }
        if let (Some(select), Some(language)) = (&self.view.language_select, preview.language) {
            select.set_value(language.select_value());
        }
    }

    // =============================================================
    // Stats polling
    // =============================================================

    fn refresh_stats(self: &Rc<Self>) {
        let seq = self.sequencer.borrow_mut().issue();
        let endpoint = self.config.stats_endpoint.clone();
        let weak = Rc::downgrade(self);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_stats(&endpoint).await;
            let Some(shared) = weak.upgrade() else {
                return;
            };
            match result {
                Ok(snapshot) => shared.apply_stats(seq, &snapshot),
                Err(e) => leptos::logging::error!("Error refreshing stats: {e}"),
            }
        });
    }

    fn apply_stats(&self, seq: u64, snapshot: &StatsSnapshot) {
        let mut sequencer = self.sequencer.borrow_mut();
        if !sequencer.accept(seq) {
            leptos::logging::warn!(
                "dropping stale stats response #{seq}, #{} already applied",
                sequencer.last_applied()
            );
            return;
        }
        drop(sequencer);
        let patch = snapshot.patch();

        if let (Some(el), Some(text)) = (&self.view.running_stat, patch.running_text.as_deref()) {
            el.set_text_content(Some(text));
        }
        if let Some(bar) = &self.view.cpu_bar {
            if let Some(width) = patch.cpu_width.as_deref() {
                let _ = bar.style().set_property("width", width);
            }
            if let Some(text) = patch.cpu_text.as_deref() {
                bar.set_text_content(Some(text));
            }
        }
        if let (Some(bar), Some(width)) = (&self.view.memory_bar, patch.memory_width.as_deref()) {
            let _ = bar.style().set_property("width", width);
        }
    }

    // =============================================================
    // Toasts
    // =============================================================

    fn show_toast(&self, message: &str, kind: ToastKind) -> u64 {
        let mut id = 0;
        self.toasts.update(|state| id = state.push(kind, message));

        let toasts = self.toasts;
        let expire = Timeout::new(self.config.toast_ttl_ms, move || {
            toasts.update(|state| {
                state.dismiss(id);
            });
        });

        let mut timers = self.toast_timers.borrow_mut();
        // Drop timers whose toast is already gone (expired or closed).
        timers.retain(|toast_id| toasts.with_untracked(|state| state.contains(toast_id)));
        timers.arm(id, expire);
        id
    }

    // =============================================================
    // Tooltips
    // =============================================================

    fn show_tooltip(&self, index: usize) {
        let Some(target) = self.view.tooltip_targets.get(index) else {
            return;
        };
        let Some(doc) = dom::document() else {
            return;
        };
        let Some(body) = doc.body() else {
            return;
        };
        let Some(tip) = doc
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        tip.set_class_name("tooltip");
        tip.set_text_content(target.get_attribute(TOOLTIP_ATTR).as_deref());
        let _ = body.append_child(&tip);

        let bounds = target.get_bounding_client_rect();
        let placement = place_above(
            Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            },
            f64::from(tip.offset_width()),
            f64::from(tip.offset_height()),
            self.config.tooltip_offset_px,
        );
        let style = tip.style();
        let _ = style.set_property("top", &format!("{}px", placement.top));
        let _ = style.set_property("left", &format!("{}px", placement.left));

        if let Some(stale) = self.tooltips.borrow_mut().insert(index, tip) {
            stale.remove();
        }
    }

    fn hide_tooltip(&self, index: usize) {
        if let Some(tip) = self.tooltips.borrow_mut().remove(index) {
            tip.remove();
        }
    }

    // =============================================================
    // Teardown
    // =============================================================

    fn teardown(&self) {
        self.busy_timers.borrow_mut().clear();
        for (index, original) in self.busy.borrow_mut().drain() {
            if let Some(link) = self.view.action_links.get(index) {
                restore_action_link(link, &original);
            }
        }
        for tip in self.tooltips.borrow_mut().drain() {
            tip.remove();
        }
        self.toast_timers.borrow_mut().clear();
        // Nothing would expire these once their timers are gone.
        self.toasts.update(ToastState::clear);
    }
}

fn restore_action_link(link: &HtmlElement, original: &str) {
    link.set_inner_html(original);
    let _ = link.remove_attribute("disabled");
    let _ = link.remove_attribute("aria-disabled");
}
