use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vehicle::{MovementType, VehicleId, VehicleState};

/**
 * Why the winner of a conflict got right-of-way.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityReason {
    /// simultaneous arrival; going straight beats turning
    Straight,
    /// simultaneous arrival; turning right beats turning left
    RightOverLeft,
    /// simultaneous arrival; the vehicle approaching from the other's right goes first
    RightHandRule,
    /// the earlier vehicle goes first
    ArrivesFirst,
}

impl std::fmt::Display for PriorityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Straight => write!(f, "straight movement has priority over turning"),
            Self::RightOverLeft => write!(f, "right turn has priority over left turn"),
            Self::RightHandRule => write!(f, "right-hand rule"),
            Self::ArrivesFirst => write!(f, "arrives first"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub winner: &'a VehicleState,
    pub loser: &'a VehicleState,
    pub reason: PriorityReason,
}

impl<'a> Resolution<'a> {
    fn new(winner: &'a VehicleState, loser: &'a VehicleState, reason: PriorityReason) -> Self {
        Self {
            winner,
            loser,
            reason,
        }
    }

    pub fn decision(&self) -> String {
        format!(
            "Vehicle {} must yield to Vehicle {}",
            self.loser.vehicle_id(),
            self.winner.vehicle_id()
        )
    }

    /**
     * Priority ranks within the pair: the winner crosses first.
     */
    pub fn ranks(&self) -> BTreeMap<VehicleId, u32> {
        BTreeMap::from([
            (self.winner.vehicle_id().clone(), 1),
            (self.loser.vehicle_id().clone(), 2),
        ])
    }
}

/**
 * Decides which of two conflicting vehicles yields.
 *
 * Arrivals within `simultaneous_window` seconds are decided by movement type, and failing that by
 * the right-hand rule. Otherwise the earlier vehicle goes first.
 */
pub fn resolve_priority<'a>(
    first: &'a VehicleState,
    second: &'a VehicleState,
    simultaneous_window: f64,
) -> Resolution<'a> {
    use MovementType::{Left, Right, Straight};
    use PriorityReason::{ArrivesFirst, RightHandRule, RightOverLeft};

    let delta = (first.time_to_intersection() - second.time_to_intersection()).abs();
    if delta <= simultaneous_window {
        match (first.movement_type(), second.movement_type()) {
            (Straight, other) if other != Straight => {
                Resolution::new(first, second, PriorityReason::Straight)
            }
            (other, Straight) if other != Straight => {
                Resolution::new(second, first, PriorityReason::Straight)
            }
            (Right, Left) => Resolution::new(first, second, RightOverLeft),
            (Left, Right) => Resolution::new(second, first, RightOverLeft),
            _ => {
                if first.direction().has_on_right(second.direction()) {
                    Resolution::new(second, first, RightHandRule)
                } else {
                    Resolution::new(first, second, RightHandRule)
                }
            }
        }
    } else if first.time_to_intersection() > second.time_to_intersection() {
        Resolution::new(second, first, ArrivesFirst)
    } else {
        Resolution::new(first, second, ArrivesFirst)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use layout::Direction::*;
    use util::scenario_util::state;
    use vehicle::MovementType::*;

    fn winner(resolution: &Resolution) -> String {
        resolution.winner.vehicle_id().to_string()
    }

    #[test]
    fn straight_beats_turns() {
        let straight = state("S", North, Straight, 9.0);
        for (direction, movement) in [(East, Left), (West, Right), (South, Left)] {
            let turning = state("T", direction, movement, 9.5);
            for resolution in [
                resolve_priority(&straight, &turning, SIMULTANEOUS_WINDOW),
                resolve_priority(&turning, &straight, SIMULTANEOUS_WINDOW),
            ] {
                assert_eq!(winner(&resolution), "S");
                assert_eq!(resolution.reason, PriorityReason::Straight);
            }
        }
    }

    #[test]
    fn right_beats_left() {
        let right = state("R", West, Right, 6.0);
        let left = state("L", South, Left, 6.0);
        let resolution = resolve_priority(&left, &right, SIMULTANEOUS_WINDOW);
        assert_eq!(winner(&resolution), "R");
        assert_eq!(resolution.reason, PriorityReason::RightOverLeft);
        assert_eq!(resolution.decision(), "Vehicle L must yield to Vehicle R");
    }

    #[test]
    fn right_hand_rule() {
        // both straight: east is on north's right
        let north = state("N", North, Straight, 10.0);
        let east = state("E", East, Straight, 10.0);
        let resolution = resolve_priority(&north, &east, SIMULTANEOUS_WINDOW);
        assert_eq!(winner(&resolution), "E");
        assert_eq!(resolution.reason, PriorityReason::RightHandRule);
        assert_eq!(winner(&resolve_priority(&east, &north, SIMULTANEOUS_WINDOW)), "E");

        // both left: west is on south's right, north is on west's right
        let south = state("S", South, Left, 10.0);
        let west = state("W", West, Left, 10.0);
        assert_eq!(winner(&resolve_priority(&south, &west, SIMULTANEOUS_WINDOW)), "W");
        let north = state("N", North, Left, 10.0);
        assert_eq!(winner(&resolve_priority(&west, &north, SIMULTANEOUS_WINDOW)), "N");
    }

    #[test]
    fn right_hand_rule_opposite_falls_back_to_first() {
        let north = state("N", North, Left, 10.0);
        let south = state("S", South, Left, 10.0);
        assert_eq!(winner(&resolve_priority(&north, &south, SIMULTANEOUS_WINDOW)), "N");
        assert_eq!(winner(&resolve_priority(&south, &north, SIMULTANEOUS_WINDOW)), "S");
    }

    #[test]
    fn arrives_first() {
        // a turning vehicle arriving clearly earlier still goes first
        let early = state("A", East, Left, 8.0);
        let late = state("B", North, Straight, 10.0);
        let resolution = resolve_priority(&late, &early, SIMULTANEOUS_WINDOW);
        assert_eq!(winner(&resolution), "A");
        assert_eq!(resolution.reason, PriorityReason::ArrivesFirst);
        assert_eq!(resolution.decision(), "Vehicle B must yield to Vehicle A");

        let resolution = resolve_priority(&early, &late, SIMULTANEOUS_WINDOW);
        assert_eq!(winner(&resolution), "A");
    }

    #[test]
    fn window_is_inclusive() {
        let turning = state("T", East, Left, 9.0);
        let straight = state("S", North, Straight, 10.0);
        let resolution = resolve_priority(&turning, &straight, 1.0);
        assert_eq!(resolution.reason, PriorityReason::Straight);

        let resolution = resolve_priority(&turning, &straight, 0.5);
        assert_eq!(resolution.reason, PriorityReason::ArrivesFirst);
        assert_eq!(winner(&resolution), "T");
    }

    #[test]
    fn ranks() {
        let north = state("N", North, Straight, 10.0);
        let east = state("E", East, Straight, 10.0);
        let ranks = resolve_priority(&north, &east, SIMULTANEOUS_WINDOW).ranks();
        util::test_util::assert_entries(&ranks, &[("E", 1), ("N", 2)]);
    }
}
