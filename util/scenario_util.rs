use layout::{Direction, Layout};
use vehicle::{MovementType, VehicleObservation, VehicleState};

/// 36 km/h is exactly 10 m/s, which keeps arrival times exact in tests.
pub const TEST_SPEED: f64 = 36.0;

/**
 * A lane and destination in the default layout that produce the given movement. Panics for
 * `MovementType::Unknown`.
 */
pub fn route(direction: Direction, movement: MovementType) -> (&'static str, &'static str) {
    use Direction::*;
    use MovementType::*;
    match (direction, movement) {
        (North, Right) => ("1", "F"),
        (North, Straight) => ("1", "H"),
        (North, Left) => ("2", "E"),
        (East, Right) => ("3", "H"),
        (East, Straight) => ("3", "B"),
        (East, Left) => ("4", "G"),
        (South, Right) => ("5", "B"),
        (South, Straight) => ("5", "D"),
        (South, Left) => ("6", "A"),
        (West, Right) => ("7", "D"),
        (West, Straight) => ("7", "F"),
        (West, Left) => ("8", "C"),
        (_, Unknown) => panic!("no route for an unknown movement"),
    }
}

/**
 * An observation of a vehicle making `movement` from `direction`, arriving after `time` seconds.
 */
pub fn observation(
    id: &str,
    direction: Direction,
    movement: MovementType,
    time: f64,
) -> VehicleObservation {
    let (lane, destination) = route(direction, movement);
    VehicleObservation::new(
        id,
        lane,
        TEST_SPEED,
        time * vehicle::meters_per_second(TEST_SPEED),
        direction.to_string(),
        destination,
    )
}

/**
 * Like [observation], built against the default layout.
 */
pub fn state(id: &str, direction: Direction, movement: MovementType, time: f64) -> VehicleState {
    let (state, unrecognized) = VehicleState::new(
        &observation(id, direction, movement, time),
        &Layout::default(),
    )
    .expect("test observation should be valid");
    assert_eq!(unrecognized, None);
    state
}

/**
 * A stopped vehicle, `distance` meters from the intersection.
 */
pub fn stopped(id: &str, direction: Direction, movement: MovementType, distance: f64) -> VehicleState {
    let (lane, destination) = route(direction, movement);
    let observation =
        VehicleObservation::new(id, lane, 0.0, distance, direction.to_string(), destination);
    VehicleState::new(&observation, &Layout::default())
        .expect("test observation should be valid")
        .0
}

/**
 * A vehicle on a lane the default layout does not have.
 */
pub fn unrouted(id: &str, direction: Direction, time: f64) -> VehicleState {
    let observation = VehicleObservation::new(
        id,
        "9",
        TEST_SPEED,
        time * vehicle::meters_per_second(TEST_SPEED),
        direction.to_string(),
        "F",
    );
    VehicleState::new(&observation, &Layout::default())
        .expect("test observation should be valid")
        .0
}
