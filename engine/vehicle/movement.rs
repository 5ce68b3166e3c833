use layout::{Direction, LaneKind, Layout};
use serde::{Deserialize, Serialize};

use crate::common::UnrecognizedRoute;
use crate::observation::VehicleId;

/**
 * The maneuver a vehicle makes through the intersection.
 */
#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Straight,
    Left,
    Right,
    /// the route is not in the layout; such vehicles never conflict
    Unknown,
}

impl MovementType {
    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }

    pub fn is_turn(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use MovementType::*;
        match self {
            Straight => write!(f, "straight"),
            Left => write!(f, "left"),
            Right => write!(f, "right"),
            Unknown => write!(f, "unknown"),
        }
    }
}

/**
 * Derives the movement type from where the destination sits in the lane's destination list.
 *
 * Returns the reason as an error if the route cannot be classified; callers decide whether that
 * is fatal (it is not, for vehicle construction).
 */
pub fn classify_movement(
    layout: &Layout,
    vehicle_id: &VehicleId,
    direction: Direction,
    lane: &str,
    destination: &str,
) -> Result<MovementType, UnrecognizedRoute> {
    let destinations = match layout.destinations(direction, lane) {
        Some(destinations) if !destinations.is_empty() => destinations,
        _ => {
            return Err(UnrecognizedRoute::UnknownLane {
                vehicle_id: vehicle_id.clone(),
                direction,
                lane: lane.to_string(),
            })
        }
    };

    let position = destinations
        .iter()
        .position(|candidate| candidate == destination)
        .ok_or_else(|| UnrecognizedRoute::UnreachableDestination {
            vehicle_id: vehicle_id.clone(),
            direction,
            lane: lane.to_string(),
            destination: destination.to_string(),
        })?;

    match (LaneKind::of(lane), position) {
        (LaneKind::LeftTurn, _) => Ok(MovementType::Left),
        (LaneKind::Shared, 0) => Ok(MovementType::Right),
        (LaneKind::Shared, 1) => Ok(MovementType::Straight),
        (LaneKind::Shared, 2) => Ok(MovementType::Left),
        (LaneKind::Shared, _) | (LaneKind::Unclassified, _) => {
            Err(UnrecognizedRoute::UnknownMovement {
                vehicle_id: vehicle_id.clone(),
                lane: lane.to_string(),
                position,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use layout::{Direction::*, Layout};

    fn classify(direction: layout::Direction, lane: &str, destination: &str) -> MovementType {
        classify_movement(
            &Layout::default(),
            &VehicleId::from("V"),
            direction,
            lane,
            destination,
        )
        .unwrap_or(MovementType::Unknown)
    }

    #[test]
    fn shared_lanes() {
        assert_eq!(classify(North, "1", "F"), MovementType::Right);
        assert_eq!(classify(North, "1", "H"), MovementType::Straight);
        assert_eq!(classify(East, "3", "H"), MovementType::Right);
        assert_eq!(classify(East, "3", "B"), MovementType::Straight);
        assert_eq!(classify(South, "5", "B"), MovementType::Right);
        assert_eq!(classify(South, "5", "D"), MovementType::Straight);
        assert_eq!(classify(West, "7", "D"), MovementType::Right);
        assert_eq!(classify(West, "7", "F"), MovementType::Straight);
    }

    #[test]
    fn shared_lane_left_turn() {
        let layout = Layout::empty().with_lane(North, "1", ["F", "H", "D"]);
        let movement =
            classify_movement(&layout, &VehicleId::from("V"), North, "1", "D").unwrap();
        assert_eq!(movement, MovementType::Left);
    }

    #[test]
    fn left_turn_lanes() {
        // every position of a dedicated lane is a left turn
        for destination in ["E", "D", "C"] {
            assert_eq!(classify(North, "2", destination), MovementType::Left);
        }
        assert_eq!(classify(East, "4", "F"), MovementType::Left);
        assert_eq!(classify(South, "6", "A"), MovementType::Left);
        assert_eq!(classify(West, "8", "B"), MovementType::Left);
    }

    #[test]
    fn unknown_lane() {
        let result =
            classify_movement(&Layout::default(), &VehicleId::from("V069"), North, "9", "F");
        assert_eq!(
            result,
            Err(UnrecognizedRoute::UnknownLane {
                vehicle_id: VehicleId::from("V069"),
                direction: North,
                lane: "9".to_string(),
            })
        );

        // lane exists, but for another direction
        assert_eq!(classify(North, "3", "H"), MovementType::Unknown);
    }

    #[test]
    fn unreachable_destination() {
        let result =
            classify_movement(&Layout::default(), &VehicleId::from("V"), North, "1", "B");
        assert!(matches!(
            result,
            Err(UnrecognizedRoute::UnreachableDestination { .. })
        ));
    }

    #[test]
    fn shared_lane_past_left_turn() {
        let layout = Layout::empty().with_lane(West, "7", ["D", "F", "B", "A"]);
        let result = classify_movement(&layout, &VehicleId::from("V"), West, "7", "A");
        assert!(matches!(
            result,
            Err(UnrecognizedRoute::UnknownMovement { position: 3, .. })
        ));
    }

    #[test]
    fn unclassified_lane() {
        let layout = Layout::empty().with_lane(South, "bus", ["B"]);
        let result = classify_movement(&layout, &VehicleId::from("V"), South, "bus", "B");
        assert!(matches!(
            result,
            Err(UnrecognizedRoute::UnknownMovement { position: 0, .. })
        ));
    }

    #[test]
    fn empty_lane_is_unknown() {
        let layout = Layout::empty().with_lane(South, "5", Vec::<String>::new());
        let result = classify_movement(&layout, &VehicleId::from("V"), South, "5", "B");
        assert!(matches!(result, Err(UnrecognizedRoute::UnknownLane { .. })));
    }
}
