//! Utility helpers shared across dashboard modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from controller
//! logic to improve reuse and testability.

#[cfg(feature = "csr")]
pub mod dom;
pub mod format;
pub mod language;
pub mod theme;
