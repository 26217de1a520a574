//! Tooltip placement math and the registry of open tooltips.
//!
//! The registry is keyed by the bind index of the hovered element, so the
//! controller never stores anything on the DOM node itself.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use std::collections::HashMap;

/// Viewport-relative box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Top-left corner for a tooltip, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

/// Center a `tip_width` x `tip_height` tooltip above `target`, `offset` px
/// clear of its top edge.
pub fn place_above(target: Rect, tip_width: f64, tip_height: f64, offset: f64) -> Placement {
    Placement {
        top: target.top - tip_height - offset,
        left: target.left + target.width / 2.0 - tip_width / 2.0,
    }
}

#[derive(Debug)]
pub struct TooltipRegistry<H> {
    active: HashMap<usize, H>,
}

impl<H> Default for TooltipRegistry<H> {
    fn default() -> Self {
        Self { active: HashMap::new() }
    }
}

impl<H> TooltipRegistry<H> {
    /// Register `handle` for element `index`, returning any tooltip it replaces.
    pub fn insert(&mut self, index: usize, handle: H) -> Option<H> {
        self.active.insert(index, handle)
    }

    pub fn remove(&mut self, index: usize) -> Option<H> {
        self.active.remove(&index)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Take every open tooltip, leaving the registry empty.
    pub fn drain(&mut self) -> Vec<H> {
        self.active.drain().map(|(_, handle)| handle).collect()
    }
}
