pub mod config;
mod engine;
mod report;
mod trace;

pub use crate::config::Config;
pub use crate::engine::{Engine, Error};
pub use crate::report::{ConflictPair, ScenarioReport};
pub use crate::trace::Trace;

pub use conflict;
pub use layout;
pub use vehicle;
