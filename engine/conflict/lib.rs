mod detect;
mod paths;
mod priority;
mod proximity;
mod record;
mod rules;
mod schedule;

pub use crate::detect::{detect_conflicts, detect_conflicts_with, evaluate_pair, PairEvaluation};
pub use crate::paths::{classify_crossing, paths_cross, Crossing};
pub use crate::priority::{resolve_priority, PriorityReason, Resolution};
pub use crate::proximity::arrival_time_close;
pub use crate::record::{ConflictRecord, Location};
pub use crate::rules::{Rules, PROXIMITY_THRESHOLD, SIMULTANEOUS_WINDOW, TRAVERSAL_TIME};
pub use crate::schedule::{schedule, Schedule};
