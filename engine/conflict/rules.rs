use serde::{Deserialize, Serialize};

/// seconds; arrivals further apart than this never conflict
pub const PROXIMITY_THRESHOLD: f64 = 4.0;
/// seconds; arrivals this close are resolved as simultaneous
pub const SIMULTANEOUS_WINDOW: f64 = 1.0;
/// seconds a vehicle needs to clear the intersection once it starts crossing
pub const TRAVERSAL_TIME: f64 = 2.0;

/**
 * The timing constants used for conflict detection and scheduling.
 */
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub proximity_threshold: f64,
    pub simultaneous_window: f64,
    pub traversal_time: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            proximity_threshold: PROXIMITY_THRESHOLD,
            simultaneous_window: SIMULTANEOUS_WINDOW,
            traversal_time: TRAVERSAL_TIME,
        }
    }
}

impl Rules {
    /**
     * Delay, in whole seconds (rounded up), for a vehicle arriving at `later` behind one arriving
     * at `earlier` to let it clear the intersection.
     */
    pub fn clearance_delay(&self, earlier: f64, later: f64) -> u64 {
        (earlier + self.traversal_time - later).max(0.0).ceil() as u64
    }
}
