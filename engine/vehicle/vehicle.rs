use layout::{Direction, Layout};

use crate::common::{UnrecognizedRoute, ValidationError};
use crate::movement::{classify_movement, MovementType};
use crate::observation::{VehicleId, VehicleObservation};

/**
 * Converts km/h to m/s.
 */
pub fn meters_per_second(speed: f64) -> f64 {
    speed * 1000.0 / 3600.0
}

/**
 * A validated vehicle together with the values derived from it. Read-only once built.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    vehicle_id: VehicleId,
    lane: String,
    speed: f64,
    distance_to_intersection: f64,
    direction: Direction,
    destination: String,
    time_to_intersection: f64,
    movement_type: MovementType,
}

impl VehicleState {
    /**
     * Validates the observation and derives its arrival time and movement. An unrecognized route
     * is not an error: the state is still built, with an unknown movement type, and the reason
     * is returned alongside it.
     */
    pub fn new(
        observation: &VehicleObservation,
        layout: &Layout,
    ) -> Result<(Self, Option<UnrecognizedRoute>), ValidationError> {
        let direction = validate(observation)?;

        let (movement_type, unrecognized) = match classify_movement(
            layout,
            &observation.vehicle_id,
            direction,
            &observation.lane,
            &observation.destination,
        ) {
            Ok(movement_type) => (movement_type, None),
            Err(unrecognized) => (MovementType::Unknown, Some(unrecognized)),
        };

        let state = Self {
            vehicle_id: observation.vehicle_id.clone(),
            lane: observation.lane.clone(),
            speed: observation.speed,
            distance_to_intersection: observation.distance_to_intersection,
            direction,
            destination: observation.destination.clone(),
            time_to_intersection: time_to_intersection(
                observation.speed,
                observation.distance_to_intersection,
            ),
            movement_type,
        };

        Ok((state, unrecognized))
    }

    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    pub fn lane(&self) -> &str {
        &self.lane
    }

    /// km/h
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// meters
    pub fn distance_to_intersection(&self) -> f64 {
        self.distance_to_intersection
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /**
     * Seconds until the vehicle reaches the intersection at its current speed. Infinite for a
     * stopped vehicle.
     */
    pub fn time_to_intersection(&self) -> f64 {
        self.time_to_intersection
    }

    pub fn movement_type(&self) -> MovementType {
        self.movement_type
    }
}

impl std::fmt::Display for VehicleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vehicle {}: lane={}, speed={}, distance_to_intersection={}, direction={}, destination={}, movement_type={}, time_to_intersection={:.2}s",
            self.vehicle_id,
            self.lane,
            self.speed,
            self.distance_to_intersection,
            self.direction,
            self.destination,
            self.movement_type,
            self.time_to_intersection,
        )
    }
}

fn time_to_intersection(speed: f64, distance: f64) -> f64 {
    let speed = meters_per_second(speed);
    if speed == 0.0 {
        return f64::INFINITY;
    }
    // adding 0.0 turns a -0.0 distance into 0.0, so it sorts level with other zero times
    distance / speed + 0.0
}

/// Returns the parsed direction if every field is valid.
fn validate(observation: &VehicleObservation) -> Result<Direction, ValidationError> {
    let id = &observation.vehicle_id;

    // NOTE: written as negated comparisons so that NaN is rejected too
    if !(observation.speed >= 0.0) {
        return Err(ValidationError::NegativeSpeed {
            id: id.clone(),
            speed: observation.speed,
        });
    }
    if !(observation.distance_to_intersection >= 0.0) {
        return Err(ValidationError::NegativeDistance {
            id: id.clone(),
            distance: observation.distance_to_intersection,
        });
    }
    let direction = Direction::from_token(&observation.direction).ok_or_else(|| {
        ValidationError::InvalidDirection {
            id: id.clone(),
            direction: observation.direction.clone(),
        }
    })?;
    if id.is_empty() {
        return Err(ValidationError::EmptyId);
    }

    Ok(direction)
}
