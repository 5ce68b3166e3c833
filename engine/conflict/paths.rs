use layout::Relation;
use vehicle::{MovementType, VehicleState};

/**
 * Which rule decided whether two paths cross.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    UnknownMovement,
    SameVehicle,
    SameApproach,
    ParallelStraight,
    OppositeLefts,
    OppositeRights,
    AdjacentRights,
    PerpendicularStraight,
    LeftTurn,
    RightIntoStraight,
    Clear,
}

impl Crossing {
    pub fn crosses(&self) -> bool {
        use Crossing::*;
        match self {
            PerpendicularStraight | LeftTurn | RightIntoStraight => true,
            UnknownMovement | SameVehicle | SameApproach | ParallelStraight | OppositeLefts
            | OppositeRights | AdjacentRights | Clear => false,
        }
    }
}

impl std::fmt::Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Crossing::*;
        match self {
            UnknownMovement => write!(f, "at least one vehicle has an unknown movement type"),
            SameVehicle => write!(f, "same vehicle"),
            SameApproach => write!(f, "vehicles come from the same direction"),
            ParallelStraight => write!(f, "going straight from opposite directions"),
            OppositeLefts => write!(f, "turning left from opposite directions"),
            OppositeRights => write!(f, "turning right from opposite directions"),
            AdjacentRights => write!(f, "turning right from adjacent directions"),
            PerpendicularStraight => write!(f, "going straight from perpendicular directions"),
            LeftTurn => write!(f, "at least one vehicle is turning left"),
            RightIntoStraight => {
                write!(f, "turning right across straight traffic from an adjacent direction")
            }
            Clear => write!(f, "paths do not cross"),
        }
    }
}

/**
 * Decides whether the paths of two vehicles cross, and why. The first matching rule wins, in
 * the order of the match arms.
 */
pub fn classify_crossing(first: &VehicleState, second: &VehicleState) -> Crossing {
    use Crossing::*;
    use MovementType::{Left, Right, Straight, Unknown};
    use Relation::*;

    let relation = first.direction().relation(second.direction());
    match (first.movement_type(), second.movement_type(), relation) {
        (Unknown, _, _) | (_, Unknown, _) => UnknownMovement,
        _ if first.vehicle_id() == second.vehicle_id() => SameVehicle,
        (_, _, Same) => SameApproach,
        (Straight, Straight, Opposite) => ParallelStraight,
        (Left, Left, Opposite) => OppositeLefts,
        (Right, Right, Opposite) => OppositeRights,
        (Right, Right, Adjacent) => AdjacentRights,
        (Straight, Straight, Adjacent) => PerpendicularStraight,
        (Left, _, _) | (_, Left, _) => LeftTurn,
        (Right, Straight, Adjacent) | (Straight, Right, Adjacent) => RightIntoStraight,
        (Right, Straight, Opposite) | (Straight, Right, Opposite) => Clear,
    }
}

pub fn paths_cross(first: &VehicleState, second: &VehicleState) -> bool {
    classify_crossing(first, second).crosses()
}

#[cfg(test)]
mod tests {
    use crate::*;
    use layout::{Direction, Direction::*, Relation, DIRECTIONS};
    use util::scenario_util::{state, stopped, unrouted};
    use vehicle::MovementType::{self, *};

    fn other(direction: Direction, relation: Relation) -> Direction {
        match relation {
            Relation::Same => direction,
            Relation::Opposite => direction.opposite(),
            Relation::Adjacent => direction.clockwise(),
        }
    }

    // (first movement, second movement, relation, paths cross)
    const TABLE: [(MovementType, MovementType, Relation, bool); 27] = [
        (Straight, Straight, Relation::Same, false),
        (Straight, Left, Relation::Same, false),
        (Straight, Right, Relation::Same, false),
        (Left, Straight, Relation::Same, false),
        (Left, Left, Relation::Same, false),
        (Left, Right, Relation::Same, false),
        (Right, Straight, Relation::Same, false),
        (Right, Left, Relation::Same, false),
        (Right, Right, Relation::Same, false),
        (Straight, Straight, Relation::Opposite, false),
        (Straight, Left, Relation::Opposite, true),
        (Straight, Right, Relation::Opposite, false),
        (Left, Straight, Relation::Opposite, true),
        (Left, Left, Relation::Opposite, false),
        (Left, Right, Relation::Opposite, true),
        (Right, Straight, Relation::Opposite, false),
        (Right, Left, Relation::Opposite, true),
        (Right, Right, Relation::Opposite, false),
        (Straight, Straight, Relation::Adjacent, true),
        (Straight, Left, Relation::Adjacent, true),
        (Straight, Right, Relation::Adjacent, true),
        (Left, Straight, Relation::Adjacent, true),
        (Left, Left, Relation::Adjacent, true),
        (Left, Right, Relation::Adjacent, true),
        (Right, Straight, Relation::Adjacent, true),
        (Right, Left, Relation::Adjacent, true),
        (Right, Right, Relation::Adjacent, false),
    ];

    #[test]
    fn every_cell() {
        for (first_movement, second_movement, relation, expected) in TABLE {
            for direction in DIRECTIONS {
                let first = state("A", direction, first_movement, 5.0);
                let second = state("B", other(direction, relation), second_movement, 5.0);
                assert_eq!(
                    paths_cross(&first, &second),
                    expected,
                    "{:?} from {} vs {:?} from {}",
                    first_movement,
                    first.direction(),
                    second_movement,
                    second.direction(),
                );
                // the table is symmetric, so the result must not depend on argument order
                assert_eq!(paths_cross(&second, &first), expected);
            }
        }
    }

    #[test]
    fn adjacent_counter_clockwise() {
        // adjacency on the other side gives the same answers
        for (first_movement, second_movement, relation, expected) in TABLE {
            if relation != Relation::Adjacent {
                continue;
            }
            let first = state("A", North, first_movement, 5.0);
            let second = state("B", West, second_movement, 5.0);
            assert_eq!(paths_cross(&first, &second), expected);
        }
    }

    #[test]
    fn rules() {
        let north_straight = state("A", North, Straight, 5.0);
        let south_straight = state("B", South, Straight, 5.0);
        let east_straight = state("C", East, Straight, 5.0);
        let east_right = state("D", East, Right, 5.0);
        let south_left = state("E", South, Left, 5.0);
        let north_left = state("F", North, Left, 5.0);
        let west_right = state("G", West, Right, 5.0);

        assert_eq!(
            classify_crossing(&north_straight, &south_straight),
            Crossing::ParallelStraight
        );
        assert_eq!(
            classify_crossing(&north_left, &south_left),
            Crossing::OppositeLefts
        );
        assert_eq!(
            classify_crossing(&east_right, &west_right),
            Crossing::OppositeRights
        );
        assert_eq!(
            classify_crossing(&east_right, &state("H", South, Right, 5.0)),
            Crossing::AdjacentRights
        );
        assert_eq!(
            classify_crossing(&north_straight, &east_straight),
            Crossing::PerpendicularStraight
        );
        assert_eq!(
            classify_crossing(&north_straight, &south_left),
            Crossing::LeftTurn
        );
        assert_eq!(
            classify_crossing(&north_straight, &east_right),
            Crossing::RightIntoStraight
        );
        assert_eq!(
            classify_crossing(&west_right, &east_straight),
            Crossing::Clear
        );
    }

    #[test]
    fn excluded_pairs() {
        let first = state("A", North, Straight, 5.0);
        assert_eq!(classify_crossing(&first, &first), Crossing::SameVehicle);
        assert_eq!(
            classify_crossing(&first, &state("B", North, Left, 5.0)),
            Crossing::SameApproach
        );

        let lost = unrouted("C", East, 5.0);
        assert_eq!(classify_crossing(&first, &lost), Crossing::UnknownMovement);
        assert_eq!(classify_crossing(&lost, &first), Crossing::UnknownMovement);
        assert!(!paths_cross(&lost, &first));
    }

    #[test]
    fn stopped_vehicle_paths_still_cross() {
        // crossing only looks at routes; arrival times are checked separately
        let first = stopped("A", North, Straight, 100.0);
        let second = state("B", East, Straight, 5.0);
        assert!(paths_cross(&first, &second));
    }
}
