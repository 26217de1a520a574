//! Networking modules for the dashboard's HTTP and push endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the stats poll, `log_stream` owns server-sent log tails,
//! and `upload` submits bot files with progress reporting.

pub mod api;
pub mod log_stream;
pub mod upload;
