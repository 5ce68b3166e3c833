mod common;
mod movement;
mod observation;
mod validate;
mod vehicle;

pub use crate::common::{UnrecognizedRoute, ValidationError};
pub use crate::movement::{classify_movement, MovementType};
pub use crate::observation::{Scenario, VehicleId, VehicleObservation};
pub use crate::validate::{build_vehicle_states, Built};
pub use crate::vehicle::{meters_per_second, VehicleState};
