//! Stats snapshot from `/api/stats` and the display strings derived from it.
//!
//! DESIGN
//! ======
//! Polls fire on a fixed interval and may overlap in flight. Each request
//! takes a number from [`RefreshSequencer`]; a response is only applied if
//! nothing newer has been applied yet.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use serde::Deserialize;

use crate::util::format::round_half_up;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub running_bots: Option<i64>,
    #[serde(default)]
    pub system: Option<SystemStats>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SystemStats {
    #[serde(default)]
    pub cpu: Option<f64>,
    #[serde(default)]
    pub memory_percent: Option<f64>,
}

/// DOM updates derived from a snapshot. `None` leaves the element as is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsPatch {
    pub running_text: Option<String>,
    pub cpu_width: Option<String>,
    pub cpu_text: Option<String>,
    pub memory_width: Option<String>,
}

impl StatsSnapshot {
    pub fn patch(&self) -> StatsPatch {
        let system = self.system.as_ref();
        let cpu = system.and_then(|s| s.cpu);
        let memory = system.and_then(|s| s.memory_percent);
        StatsPatch {
            running_text: self.running_bots.map(|n| n.to_string()),
            cpu_width: cpu.map(|c| format!("{c}%")),
            cpu_text: cpu.map(|c| format!("{:.1}%", round_half_up(c, 1))),
            memory_width: memory.map(|m| format!("{m}%")),
        }
    }
}

/// Monotonic guard against applying an older poll after a newer one.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefreshSequencer {
    issued: u64,
    applied: u64,
}

impl RefreshSequencer {
    /// Take the sequence number for a new request.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Accept response `seq` if it is newer than the last applied one.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        true
    }

    pub fn last_applied(&self) -> u64 {
        self.applied
    }
}
