use serde::{Deserialize, Serialize};

use crate::trace::Trace;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error parsing TOML: {0}")]
    TomlParsingError(#[from] toml::de::Error),
    #[error("Error serializing TOML: {0}")]
    TomlSerializingError(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/**
 * Engine settings. Every key is optional in the TOML file; missing keys take their default.
 */
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /** Arrivals further apart than this many seconds never conflict. */
    pub proximity_threshold: f64,
    /** Arrivals at most this many seconds apart are resolved as simultaneous. */
    pub simultaneous_window: f64,
    /** Seconds a vehicle occupies the intersection while crossing. */
    pub traversal_time: f64,
    pub trace: Trace,
}

impl Default for Config {
    fn default() -> Self {
        let rules = conflict::Rules::default();
        Self {
            proximity_threshold: rules.proximity_threshold,
            simultaneous_window: rules.simultaneous_window,
            traversal_time: rules.traversal_time,
            trace: Trace::Off,
        }
    }
}

impl Config {
    pub fn load(data: &str) -> Result<Self, Error> {
        return Ok(toml::from_str(data)?);
    }

    pub fn load_file(path: &std::path::Path) -> Result<Self, Error> {
        return Ok(Self::load(&std::fs::read_to_string(path)?)?);
    }

    pub fn dump(&self) -> Result<String, Error> {
        return Ok(toml::to_string(self)?);
    }

    pub fn dump_file(&self, path: &std::path::Path) -> Result<(), Error> {
        return Ok(std::fs::write(path, self.dump()?)?);
    }

    pub fn rules(&self) -> conflict::Rules {
        conflict::Rules {
            proximity_threshold: self.proximity_threshold,
            simultaneous_window: self.simultaneous_window,
            traversal_time: self.traversal_time,
        }
    }
}
