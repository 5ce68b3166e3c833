use std::collections::HashSet;

use layout::Layout;

use crate::common::{UnrecognizedRoute, ValidationError};
use crate::observation::{VehicleId, VehicleObservation};
use crate::vehicle::VehicleState;

/**
 * The vehicles of one scenario, in input order, plus every route the layout did not recognize.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Built {
    pub states: Vec<VehicleState>,
    pub diagnostics: Vec<UnrecognizedRoute>,
}

/**
 * Validates and converts every observation of a scenario.
 *
 * Fails on the first invalid observation, or on an identifier that was already used earlier in
 * the scenario. Unrecognized routes are collected (and logged) instead of failing.
 */
pub fn build_vehicle_states<'a, I>(observations: I, layout: &Layout) -> Result<Built, ValidationError>
where
    I: IntoIterator<Item = &'a VehicleObservation>,
{
    let mut seen: HashSet<VehicleId> = HashSet::new();
    let mut built = Built {
        states: Vec::new(),
        diagnostics: Vec::new(),
    };

    for observation in observations {
        if !seen.insert(observation.vehicle_id.clone()) {
            return Err(ValidationError::DuplicateId(observation.vehicle_id.clone()));
        }

        let (state, unrecognized) = VehicleState::new(observation, layout)?;
        if let Some(unrecognized) = unrecognized {
            log::warn!("{}", unrecognized);
            built.diagnostics.push(unrecognized);
        }
        built.states.push(state);
    }

    Ok(built)
}
