mod direction;
mod layout;

pub use crate::direction::{Direction, Relation, DIRECTIONS};
pub use crate::layout::{Error, LaneKind, Layout};
