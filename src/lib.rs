//! # devilcloud-dashboard
//!
//! Leptos + WASM behavior layer for the DevilCloud bot dashboard.
//!
//! The pages themselves are rendered by the server. This crate attaches to
//! them once the document is ready: delete confirmations, start/stop busy
//! states, theme persistence, upload preview and progress, stats polling,
//! toasts, tooltips and the live log tail.
//!
//! Browser code is gated behind the `csr` feature. Without it the crate
//! builds natively and every browser helper is a no-op, which is how the
//! test suite runs.

pub mod components;
pub mod config;
pub mod controller;
#[cfg(feature = "csr")]
pub mod entry;
pub mod net;
pub mod state;
pub mod util;
pub mod view;
