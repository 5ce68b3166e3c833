use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use vehicle::{VehicleId, VehicleState};

use crate::record::ConflictRecord;

/**
 * Scenario-wide crossing order for every vehicle involved in at least one conflict. Vehicles that
 * are not involved in any conflict are absent from both maps.
 */
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schedule {
    pub priority_rank: BTreeMap<VehicleId, u32>,
    /// whole seconds, rounded up
    pub waiting_time: BTreeMap<VehicleId, u64>,
    /// vehicle ids by rank
    #[serde(skip)]
    pub order: Vec<VehicleId>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn rank(&self, id: &VehicleId) -> Option<u32> {
        self.priority_rank.get(id).copied()
    }

    /// zero for vehicles that are not scheduled
    pub fn waiting_time(&self, id: &VehicleId) -> u64 {
        self.waiting_time.get(id).copied().unwrap_or(0)
    }
}

/**
 * Orders the conflicting vehicles first-come-first-served and computes how long each has to wait
 * for the one ahead of it to clear the intersection.
 *
 * Ties in arrival time keep scenario order. Each vehicle waits for the *effective* arrival of its
 * predecessor, so delays cascade down the queue; the rounding to whole seconds only applies to the
 * reported waiting time.
 */
pub fn schedule(
    states: &[VehicleState],
    records: &[ConflictRecord],
    traversal_time: f64,
) -> Schedule {
    let involved: HashSet<&VehicleId> = records
        .iter()
        .flat_map(|record| [&record.vehicle1_id, &record.vehicle2_id])
        .collect();

    let mut queue: Vec<&VehicleState> = states
        .iter()
        .filter(|state| involved.contains(state.vehicle_id()))
        .collect();
    // only finite times reach the queue, so every pair compares; 0.0 and -0.0 are equal
    queue.sort_by(|a, b| {
        a.time_to_intersection()
            .partial_cmp(&b.time_to_intersection())
            .unwrap_or(Ordering::Equal)
    });

    let mut schedule = Schedule::default();
    let mut previous_arrival: Option<f64> = None;
    for (index, state) in queue.into_iter().enumerate() {
        let own = state.time_to_intersection();
        let delay = match previous_arrival {
            Some(previous) => (previous + traversal_time - own).max(0.0),
            None => 0.0,
        };
        previous_arrival = Some(own + delay);

        let id = state.vehicle_id().clone();
        log::debug!(
            "{} crosses at {:.2}s (rank {}, delayed {:.2}s)",
            id,
            own + delay,
            index + 1,
            delay
        );
        schedule.priority_rank.insert(id.clone(), index as u32 + 1);
        schedule.waiting_time.insert(id.clone(), delay.ceil() as u64);
        schedule.order.push(id);
    }
    schedule
}
