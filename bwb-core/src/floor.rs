//! Floor transition detection.
//!
//! The host advances floors through one operation and keeps two counters: the
//! current floor, and the highest floor reached so far (updated by the host's
//! own bookkeeping once the advance returns). Bonding runs when, right after
//! the advance, `current > highest`. The host counters are the only source of
//! truth, so loading an earlier save or starting a new run needs no reset on
//! the mod side.

use tracing::debug;

/// Snapshot of the host's floor counters, taken after the advance completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloorCounters {
    /// Floor the player is on now.
    pub current: u32,
    /// Highest floor reached before this advance was recorded.
    pub highest_reached: u32,
}

impl FloorCounters {
    /// Whether these counters describe a newly gained floor.
    #[must_use]
    pub fn is_new_floor(self) -> bool {
        self.current > self.highest_reached
    }
}

/// Inspect the counters after an advance. Returns `true` if the bonding
/// pass should run.
#[must_use]
pub fn floor_gained(counters: FloorCounters) -> bool {
    let gained = counters.is_new_floor();
    if !gained {
        debug!(
            current = counters.current,
            highest = counters.highest_reached,
            "No floor gained"
        );
    }
    gained
}
