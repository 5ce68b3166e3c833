use vehicle::VehicleState;

/**
 * Whether two vehicles reach the intersection within `threshold` seconds of each other. A stopped
 * vehicle (infinite arrival time) is never close to anything.
 */
pub fn arrival_time_close(first: &VehicleState, second: &VehicleState, threshold: f64) -> bool {
    let (first_time, second_time) = (first.time_to_intersection(), second.time_to_intersection());
    if first_time.is_infinite() || second_time.is_infinite() {
        return false;
    }
    (first_time - second_time).abs() <= threshold
}

#[cfg(test)]
mod tests {
    use crate::*;
    use layout::Direction::*;
    use util::scenario_util::{state, stopped};
    use vehicle::MovementType::*;

    #[test]
    fn threshold_is_inclusive() {
        let first = state("A", North, Straight, 10.0);
        assert!(arrival_time_close(&first, &state("B", East, Straight, 14.0), PROXIMITY_THRESHOLD));
        assert!(arrival_time_close(&first, &state("B", East, Straight, 6.0), PROXIMITY_THRESHOLD));
        assert!(!arrival_time_close(&first, &state("B", East, Straight, 14.5), PROXIMITY_THRESHOLD));
        assert!(!arrival_time_close(&first, &state("B", East, Straight, 14.5), 0.0));
        assert!(arrival_time_close(&first, &state("B", East, Straight, 10.0), 0.0));
    }

    #[test]
    fn stopped_vehicles_are_never_close() {
        let moving = state("A", East, Straight, 0.0);
        let waiting = stopped("B", North, Straight, 100.0);
        let parked = stopped("C", South, Straight, 0.0);
        assert!(!arrival_time_close(&moving, &waiting, f64::INFINITY));
        assert!(!arrival_time_close(&waiting, &moving, f64::INFINITY));
        assert!(!arrival_time_close(&waiting, &parked, f64::INFINITY));
    }

    #[test]
    fn symmetric() {
        let times = [0.0, 1.5, 3.0, 4.0, 7.5, 12.0];
        for a in times {
            for b in times {
                let first = state("A", North, Left, a);
                let second = state("B", West, Right, b);
                for threshold in [0.0, 1.0, PROXIMITY_THRESHOLD] {
                    assert_eq!(
                        arrival_time_close(&first, &second, threshold),
                        arrival_time_close(&second, &first, threshold),
                    );
                }
            }
        }
    }
}
