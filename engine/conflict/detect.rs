use itertools::Itertools;
use vehicle::VehicleState;

use crate::paths::{classify_crossing, Crossing};
use crate::priority::resolve_priority;
use crate::proximity::arrival_time_close;
use crate::record::ConflictRecord;
use crate::rules::Rules;

/**
 * Everything that was decided about one pair of vehicles.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct PairEvaluation {
    pub crossing: Crossing,
    /// only checked if the paths cross
    pub close: Option<bool>,
    pub record: Option<ConflictRecord>,
}

impl std::fmt::Display for PairEvaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.record, self.close) {
            (Some(record), _) => write!(
                f,
                "{}; {} ({})",
                self.crossing, record.decision, record.reason
            ),
            (None, Some(false)) => {
                write!(f, "{}; vehicles do not arrive close in time", self.crossing)
            }
            (None, _) => write!(f, "{}; no conflict", self.crossing),
        }
    }
}

/**
 * Checks a single pair. `first` is expected to come earlier in the scenario than `second`.
 */
pub fn evaluate_pair(first: &VehicleState, second: &VehicleState, rules: &Rules) -> PairEvaluation {
    let crossing = classify_crossing(first, second);
    if !crossing.crosses() {
        return PairEvaluation {
            crossing,
            close: None,
            record: None,
        };
    }

    let close = arrival_time_close(first, second, rules.proximity_threshold);
    let record = if close {
        let resolution = resolve_priority(first, second, rules.simultaneous_window);
        Some(ConflictRecord::new(
            first.vehicle_id().clone(),
            second.vehicle_id().clone(),
            &resolution,
            rules,
        ))
    } else {
        None
    };

    PairEvaluation {
        crossing,
        close: Some(close),
        record,
    }
}

/**
 * Evaluates every unordered pair of vehicles, in scenario order, and returns one record per
 * conflict.
 */
pub fn detect_conflicts(states: &[VehicleState], rules: &Rules) -> Vec<ConflictRecord> {
    detect_conflicts_with(states, rules, |first, second, evaluation| {
        log::trace!(
            "{} / {}: {}",
            first.vehicle_id(),
            second.vehicle_id(),
            evaluation
        )
    })
}

/**
 * Like [detect_conflicts], but hands every evaluated pair to `observe` before its record, if any,
 * is collected.
 */
pub fn detect_conflicts_with<F>(
    states: &[VehicleState],
    rules: &Rules,
    mut observe: F,
) -> Vec<ConflictRecord>
where
    F: FnMut(&VehicleState, &VehicleState, &PairEvaluation),
{
    states
        .iter()
        .tuple_combinations()
        .filter_map(|(first, second)| {
            let evaluation = evaluate_pair(first, second, rules);
            observe(first, second, &evaluation);
            evaluation.record
        })
        .collect()
}
