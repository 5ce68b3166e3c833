use serde::{Deserialize, Serialize};

/**
 * The road a vehicle approaches the intersection from.
 */
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Clockwise order, used for the right-hand rule.
pub static DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/**
 * How two approach directions sit relative to each other.
 */
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Relation {
    Same,
    Opposite,
    /// perpendicular, neither equal nor opposite
    Adjacent,
}

impl Direction {
    /**
     * Parses a direction token, ignoring case. Surrounding whitespace is not accepted.
     */
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "north" => Some(Self::North),
            "east" => Some(Self::East),
            "south" => Some(Self::South),
            "west" => Some(Self::West),
            _ => None,
        }
    }

    /**
     * Position in the clockwise order starting from north.
     */
    pub fn index(&self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /**
     * The next direction in clockwise order.
     */
    pub fn clockwise(&self) -> Self {
        DIRECTIONS[(self.index() + 1) % DIRECTIONS.len()]
    }

    pub fn relation(&self, other: Direction) -> Relation {
        if *self == other {
            Relation::Same
        } else if self.opposite() == other {
            Relation::Opposite
        } else {
            Relation::Adjacent
        }
    }

    /**
     * Whether a vehicle approaching from `other` is on the right of a vehicle approaching from
     * this direction, i.e. `other` is exactly one step clockwise.
     */
    pub fn has_on_right(&self, other: Direction) -> bool {
        (other.index() + DIRECTIONS.len() - self.index()) % DIRECTIONS.len() == 1
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::East => write!(f, "east"),
            Self::South => write!(f, "south"),
            Self::West => write!(f, "west"),
        }
    }
}
