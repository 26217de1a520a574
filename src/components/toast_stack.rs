//! Toast banners appended to `<body>`.
//!
//! Each toast renders as its own `div.toast` directly under the mount
//! point, so the page stylesheet positions them exactly as it would
//! hand-built markup. The message is rendered as text.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Renders every toast currently in `toasts`, keyed by id.
#[component]
pub fn ToastStack(toasts: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <For
            each=move || toasts.get().items
            key=|toast| toast.id
            children=move |toast: Toast| view! { <ToastBanner toast toasts/> }
        />
    }
}

#[component]
fn ToastBanner(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;
    let on_close = move |_| {
        toasts.update(|state| {
            state.dismiss(id);
        });
    };

    view! {
        <div class=toast.kind.class_name()>
            <div class="toast-content">
                <i class=toast.kind.icon_class()></i>
                <span>{toast.message}</span>
            </div>
            <button class="toast-close" on:click=on_close>
                "×"
            </button>
        </div>
    }
}
