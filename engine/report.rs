use std::collections::BTreeMap;

use conflict::{ConflictRecord, Location, Schedule};
use serde::Serialize;
use vehicle::{UnrecognizedRoute, VehicleId, VehicleState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictPair {
    pub vehicle1_id: VehicleId,
    pub vehicle2_id: VehicleId,
}

/**
 * Everything decided about one scenario.
 *
 * `priority_order` and `waiting_times` cover every vehicle of the scenario: vehicles that are not
 * involved in any conflict have no rank and wait 0 seconds.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub is_conflict: bool,
    pub number_of_conflicts: usize,
    pub places_of_conflicts: Vec<Location>,
    pub conflict_vehicles: Vec<ConflictPair>,
    pub decisions: Vec<String>,
    pub priority_order: BTreeMap<VehicleId, Option<u32>>,
    pub waiting_times: BTreeMap<VehicleId, u64>,
    pub conflicts: Vec<ConflictRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<UnrecognizedRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<String>>,
}

impl ScenarioReport {
    pub fn new(
        states: &[VehicleState],
        conflicts: Vec<ConflictRecord>,
        schedule: &Schedule,
        diagnostics: Vec<UnrecognizedRoute>,
    ) -> Self {
        let ids = || states.iter().map(|state| state.vehicle_id());

        Self {
            is_conflict: !conflicts.is_empty(),
            number_of_conflicts: conflicts.len(),
            places_of_conflicts: conflicts.iter().map(|record| record.place).collect(),
            conflict_vehicles: conflicts
                .iter()
                .map(|record| ConflictPair {
                    vehicle1_id: record.vehicle1_id.clone(),
                    vehicle2_id: record.vehicle2_id.clone(),
                })
                .collect(),
            decisions: conflicts
                .iter()
                .map(|record| record.decision.clone())
                .collect(),
            priority_order: ids().map(|id| (id.clone(), schedule.rank(id))).collect(),
            waiting_times: ids()
                .map(|id| (id.clone(), schedule.waiting_time(id)))
                .collect(),
            conflicts,
            diagnostics,
            trace: None,
        }
    }

    pub fn rank(&self, id: &VehicleId) -> Option<u32> {
        self.priority_order.get(id).copied().flatten()
    }

    pub fn dump(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn dump_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
