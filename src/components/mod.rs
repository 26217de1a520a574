//! Leptos components mounted alongside the server-rendered page.

pub mod toast_stack;
