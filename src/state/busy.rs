//! Busy-state bookkeeping for start/stop controls.
//!
//! A control shows [`BUSY_LABEL_HTML`] while its request is in flight. The
//! registry remembers the label it had before, keyed by the control's bind
//! index, so the reset timer can put back the exact original.

#[cfg(test)]
#[path = "busy_test.rs"]
mod busy_test;

use std::collections::HashMap;

/// Markup shown on a control while its action is pending.
pub const BUSY_LABEL_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;

#[derive(Clone, Debug, Default)]
pub struct BusyLabels {
    originals: HashMap<usize, String>,
}

impl BusyLabels {
    /// Mark control `index` busy, capturing `current_label`.
    ///
    /// Returns `false` if the control was already busy; the label captured by
    /// the first click is kept so a restore never puts the busy markup back.
    pub fn begin(&mut self, index: usize, current_label: &str) -> bool {
        if self.originals.contains_key(&index) {
            return false;
        }
        self.originals.insert(index, current_label.to_owned());
        true
    }

    /// Clear the busy state and hand back the original label.
    pub fn finish(&mut self, index: usize) -> Option<String> {
        self.originals.remove(&index)
    }

    #[cfg(test)]
    pub fn is_busy(&self, index: usize) -> bool {
        self.originals.contains_key(&index)
    }

    /// Clear every busy control, returning `(index, original_label)` pairs.
    pub fn drain(&mut self) -> Vec<(usize, String)> {
        let mut all: Vec<_> = self.originals.drain().collect();
        all.sort_by_key(|(index, _)| *index);
        all
    }
}
