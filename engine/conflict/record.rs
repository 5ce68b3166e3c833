use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vehicle::VehicleId;

use crate::priority::{PriorityReason, Resolution};
use crate::rules::Rules;

/**
 * Where a conflict happens. Every conflict is currently placed at the intersection itself.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Intersection,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Intersection => write!(f, "intersection"),
        }
    }
}

/**
 * A detected conflict between two vehicles, and how it is resolved. Ranks and waiting times only
 * cover the pair; see [crate::schedule] for the scenario-wide values.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictRecord {
    /// the vehicle listed earlier in the scenario
    pub vehicle1_id: VehicleId,
    pub vehicle2_id: VehicleId,
    pub decision: String,
    pub place: Location,
    pub priority_order: BTreeMap<VehicleId, u32>,
    /// whole seconds, rounded up
    pub waiting_times: BTreeMap<VehicleId, u64>,
    pub winner: VehicleId,
    pub loser: VehicleId,
    pub reason: PriorityReason,
}

impl ConflictRecord {
    pub(crate) fn new(
        vehicle1_id: VehicleId,
        vehicle2_id: VehicleId,
        resolution: &Resolution,
        rules: &Rules,
    ) -> Self {
        let winner = resolution.winner.vehicle_id().clone();
        let loser = resolution.loser.vehicle_id().clone();
        let delay = rules.clearance_delay(
            resolution.winner.time_to_intersection(),
            resolution.loser.time_to_intersection(),
        );

        Self {
            vehicle1_id,
            vehicle2_id,
            decision: resolution.decision(),
            place: Location::Intersection,
            priority_order: resolution.ranks(),
            waiting_times: BTreeMap::from([(winner.clone(), 0), (loser.clone(), delay)]),
            winner,
            loser,
            reason: resolution.reason,
        }
    }

    pub fn involves(&self, id: &VehicleId) -> bool {
        self.vehicle1_id == *id || self.vehicle2_id == *id
    }

    pub fn vehicles(&self) -> (&VehicleId, &VehicleId) {
        (&self.vehicle1_id, &self.vehicle2_id)
    }
}
