//! Controller-owned UI state.
//!
//! DESIGN
//! ======
//! Each module holds plain data with no DOM handles of its own, so the
//! controller can drive it from browser events while tests exercise it
//! natively.

pub mod busy;
pub mod stats;
pub mod timers;
pub mod toast;
pub mod tooltip;
