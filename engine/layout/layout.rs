use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unknown direction '{0}' in intersection layout")]
    UnknownDirection(String),
    #[error("Direction '{0}' appears more than once in intersection layout")]
    DuplicateDirection(String),
}

/**
 * Lanes are identified by a fixed numbering convention: odd lanes are shared between right turns,
 * straight traffic and (if listed) left turns, even lanes are dedicated left-turn lanes.
 */
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum LaneKind {
    /// destination index 0 is a right turn, 1 is straight, 2 is a left turn
    Shared,
    /// every destination is reached by turning left
    LeftTurn,
    Unclassified,
}

impl LaneKind {
    pub fn of(lane: &str) -> Self {
        match lane {
            "1" | "3" | "5" | "7" => Self::Shared,
            "2" | "4" | "6" | "8" => Self::LeftTurn,
            _ => Self::Unclassified,
        }
    }
}

type LaneTable = BTreeMap<String, BTreeMap<String, Vec<String>>>;

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum LayoutDocument {
    Wrapped { intersection_layout: LaneTable },
    Bare(LaneTable),
}

/**
 * Legal lanes per approach direction, and the ordered destinations reachable from each lane.
 *
 * A layout is read-only once built, so a single instance can be shared between any number of
 * scenario evaluations.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    approaches: BTreeMap<Direction, BTreeMap<String, Vec<String>>>,
}

impl Layout {
    pub fn empty() -> Self {
        Self {
            approaches: BTreeMap::new(),
        }
    }

    /**
     * Adds (or replaces) a lane. Destinations are given in lane order, so for a shared lane the
     * right turn comes first.
     */
    pub fn with_lane<L, D, S>(mut self, direction: Direction, lane: L, destinations: D) -> Self
    where
        L: Into<String>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.approaches.entry(direction).or_default().insert(
            lane.into(),
            destinations.into_iter().map(Into::into).collect(),
        );
        self
    }

    /**
     * Accepts either `{"intersection_layout": {...}}` or the bare direction map.
     */
    pub fn load(data: &str) -> Result<Self, Error> {
        let table = match serde_json::from_str(data)? {
            LayoutDocument::Wrapped {
                intersection_layout,
            } => intersection_layout,
            LayoutDocument::Bare(table) => table,
        };

        let mut approaches = BTreeMap::new();
        for (token, lanes) in table {
            let direction = match Direction::from_token(&token) {
                Some(direction) => direction,
                None => return Err(Error::UnknownDirection(token)),
            };
            // keys differing only in case name the same approach
            if approaches.insert(direction, lanes).is_some() {
                return Err(Error::DuplicateDirection(token));
            }
        }
        Ok(Self { approaches })
    }

    pub fn load_file(path: &std::path::Path) -> Result<Self, Error> {
        Ok(Self::load(&std::fs::read_to_string(path)?)?)
    }

    pub fn dump(&self) -> Result<String, Error> {
        let table = self
            .approaches
            .iter()
            .map(|(direction, lanes)| (direction.to_string(), lanes.clone()))
            .collect();
        Ok(serde_json::to_string(&LayoutDocument::Wrapped {
            intersection_layout: table,
        })?)
    }

    pub fn dump_file(&self, path: &std::path::Path) -> Result<(), Error> {
        Ok(std::fs::write(path, self.dump()?)?)
    }

    /**
     * Lane identifiers for a direction, in ascending order.
     */
    pub fn lanes(&self, direction: Direction) -> impl Iterator<Item = &str> {
        self.approaches
            .get(&direction)
            .into_iter()
            .flat_map(|lanes| lanes.keys().map(String::as_str))
    }

    /**
     * The destinations reachable from a lane, or `None` if the lane does not exist for this
     * direction.
     */
    pub fn destinations(&self, direction: Direction, lane: &str) -> Option<&[String]> {
        self.approaches
            .get(&direction)
            .and_then(|lanes| lanes.get(lane))
            .map(Vec::as_slice)
    }
}

impl Default for Layout {
    /**
     * The standard four-way intersection with one shared and one left-turn lane per approach.
     */
    fn default() -> Self {
        use Direction::*;
        Self::empty()
            .with_lane(North, "1", ["F", "H"])
            .with_lane(North, "2", ["E", "D", "C"])
            .with_lane(East, "3", ["H", "B"])
            .with_lane(East, "4", ["G", "E", "F"])
            .with_lane(South, "5", ["B", "D"])
            .with_lane(South, "6", ["A", "G", "H"])
            .with_lane(West, "7", ["D", "F"])
            .with_lane(West, "8", ["B", "C", "A"])
    }
}
