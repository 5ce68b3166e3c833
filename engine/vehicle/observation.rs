use serde::{Deserialize, Deserializer, Serialize};

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct VehicleId(String);

impl VehicleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/**
 * A raw observation of a vehicle approaching the intersection, as reported by the caller. Nothing
 * here has been validated yet.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleObservation {
    pub vehicle_id: VehicleId,
    /// lane identifier; may be given as a number in JSON
    #[serde(deserialize_with = "lane_token")]
    pub lane: String,
    /// km/h
    pub speed: f64,
    /// meters
    pub distance_to_intersection: f64,
    pub direction: String,
    pub destination: String,
}

impl VehicleObservation {
    pub fn new<I, L, D, T>(
        vehicle_id: I,
        lane: L,
        speed: f64,
        distance_to_intersection: f64,
        direction: D,
        destination: T,
    ) -> Self
    where
        I: Into<VehicleId>,
        L: Into<String>,
        D: Into<String>,
        T: Into<String>,
    {
        Self {
            vehicle_id: vehicle_id.into(),
            lane: lane.into(),
            speed,
            distance_to_intersection,
            direction: direction.into(),
            destination: destination.into(),
        }
    }
}

fn lane_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Token {
        Text(String),
        Number(u64),
    }

    Ok(match Token::deserialize(deserializer)? {
        Token::Text(text) => text,
        Token::Number(number) => number.to_string(),
    })
}

/**
 * The observations for one scenario, in the `{"vehicles_scenario": [...]}` document format.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub vehicles_scenario: Vec<VehicleObservation>,
}

impl Scenario {
    pub fn load(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    pub fn dump(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
