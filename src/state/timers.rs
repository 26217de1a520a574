//! Pending timers keyed by what they expire.
//!
//! The controller arms one timer per busy control and one per toast. The
//! timer type is generic so the arm/replace/prune rules run natively in
//! tests; in the browser it is `gloo_timers::callback::Timeout`, which
//! cancels itself when dropped.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug)]
pub struct TimerSlots<K, T> {
    pending: HashMap<K, T>,
}

impl<K, T> Default for TimerSlots<K, T> {
    fn default() -> Self {
        Self { pending: HashMap::new() }
    }
}

impl<K: Eq + Hash + Copy, T> TimerSlots<K, T> {
    /// Arm `timer` for `key`. A timer already pending for `key` is dropped,
    /// which cancels it. Returns `true` if one was replaced.
    pub fn arm(&mut self, key: K, timer: T) -> bool {
        self.pending.insert(key, timer).is_some()
    }

    /// Drop every timer whose key fails `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(K) -> bool) {
        self.pending.retain(|key, _| keep(*key));
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn armed(&self) -> usize {
        self.pending.len()
    }
}
