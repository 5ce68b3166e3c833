use serde::{Deserialize, Serialize};

/**
 * How much of the decision process to record in a scenario report.
 */
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Trace {
    #[default]
    Off,
    /// every conflict and the final schedule
    Decisions,
    /// additionally, every pair of vehicles and the rule that settled it
    Pairs,
}

impl std::str::FromStr for Trace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "decisions" => Ok(Self::Decisions),
            "pairs" => Ok(Self::Pairs),
            other => Err(format!(
                "unknown trace level '{}', expected off, decisions or pairs",
                other
            )),
        }
    }
}

/// Collects trace lines for one evaluation.
pub(crate) struct Tracer {
    level: Trace,
    lines: Vec<String>,
}

impl Tracer {
    pub fn new(level: Trace) -> Self {
        Self {
            level,
            lines: Vec::new(),
        }
    }

    /// `msg` is only evaluated if `level` is enabled.
    pub fn log<F, S>(&mut self, level: Trace, msg: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        if level == Trace::Off || self.level < level {
            return;
        }
        let line = msg().into();
        log::info!("{}", line);
        self.lines.push(line);
    }

    pub fn finish(self) -> Option<Vec<String>> {
        match self.level {
            Trace::Off => None,
            _ => Some(self.lines),
        }
    }
}
