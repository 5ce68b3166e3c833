use layout::Direction;
use serde::Serialize;

use crate::observation::VehicleId;

/**
 * An observation that cannot be turned into a vehicle. Fatal to the scenario being processed,
 * but never to other scenarios.
 */
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Vehicle {id} has negative speed: {speed}")]
    NegativeSpeed { id: VehicleId, speed: f64 },
    #[error("Vehicle {id} has negative distance to intersection: {distance}")]
    NegativeDistance { id: VehicleId, distance: f64 },
    #[error("Vehicle {id} has invalid direction '{direction}'")]
    InvalidDirection { id: VehicleId, direction: String },
    #[error("Vehicle ID cannot be empty")]
    EmptyId,
    #[error("Duplicate vehicle ID detected: {0}")]
    DuplicateId(VehicleId),
}

impl ValidationError {
    /**
     * Name of the observation field that failed validation.
     */
    pub fn field(&self) -> &'static str {
        match self {
            Self::NegativeSpeed { .. } => "speed",
            Self::NegativeDistance { .. } => "distance_to_intersection",
            Self::InvalidDirection { .. } => "direction",
            Self::EmptyId | Self::DuplicateId(_) => "vehicle_id",
        }
    }
}

/**
 * A route that the layout does not know about. This is recoverable: the vehicle is kept with an
 * unknown movement type, and is then never considered to conflict with anything.
 */
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnrecognizedRoute {
    #[error("Vehicle {vehicle_id} is in an unknown lane '{lane}' for direction '{direction}'")]
    UnknownLane {
        vehicle_id: VehicleId,
        direction: Direction,
        lane: String,
    },
    #[error(
        "Destination '{destination}' not accessible from lane '{lane}' for direction '{direction}' (vehicle {vehicle_id})"
    )]
    UnreachableDestination {
        vehicle_id: VehicleId,
        direction: Direction,
        lane: String,
        destination: String,
    },
    #[error("Vehicle {vehicle_id} has unknown movement type (lane '{lane}', destination #{position})")]
    UnknownMovement {
        vehicle_id: VehicleId,
        lane: String,
        position: usize,
    },
}

impl UnrecognizedRoute {
    pub fn vehicle_id(&self) -> &VehicleId {
        match self {
            Self::UnknownLane { vehicle_id, .. }
            | Self::UnreachableDestination { vehicle_id, .. }
            | Self::UnknownMovement { vehicle_id, .. } => vehicle_id,
        }
    }
}
