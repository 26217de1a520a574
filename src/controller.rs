//! Dashboard controller: the one object that wires the page.
//!
//! ARCHITECTURE
//! ============
//! The entry point constructs a single `DashboardController` once the
//! document is ready and holds it until `pagehide`. The controller binds a
//! [`DashboardView`](crate::view) and then owns every listener, timer and
//! open tooltip it creates. Dropping it removes listeners, cancels timers,
//! restores busy controls and discards in-flight stats responses.
//!
//! Browser wiring lives in `controller_dom.rs` behind the `csr` feature;
//! the decisions it makes are plain functions here so they test natively.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

#[cfg(feature = "csr")]
#[path = "controller_dom.rs"]
mod controller_dom;

#[cfg(feature = "csr")]
pub use self::controller_dom::DashboardController;

use crate::util::format::{DEFAULT_DECIMALS, format_bytes};
use crate::util::language::BotLanguage;

/// What the upload form shows for a freshly selected file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePreview {
    /// `"{name} ({size})"` for `#file-name`.
    pub label: String,
    /// Runtime to preselect; `None` leaves the selector alone.
    pub language: Option<BotLanguage>,
}

pub fn file_preview(name: &str, size_bytes: u64) -> FilePreview {
    FilePreview {
        label: format!("{name} ({})", format_bytes(size_bytes, DEFAULT_DECIMALS)),
        language: BotLanguage::detect(name),
    }
}

/// Confirmation outcome for a delete link. `None` means the dialog could not
/// be shown, which counts as declined.
pub fn should_cancel_delete(confirmed: Option<bool>) -> bool {
    !confirmed.unwrap_or(false)
}
