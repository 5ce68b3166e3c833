use conflict::{ConflictRecord, Rules, Schedule};
use layout::Layout;
use vehicle::{Built, Scenario, VehicleObservation, VehicleState};

use crate::config::{self, Config};
use crate::report::ScenarioReport;
use crate::trace::{Trace, Tracer};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(#[from] vehicle::ValidationError),
    #[error("Layout error: {0}")]
    LayoutError(#[from] layout::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] config::Error),
}

/**
 * Evaluates scenarios against a fixed intersection layout. An engine holds no per-scenario state,
 * so one instance can evaluate any number of scenarios, from any number of threads.
 */
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub layout: Layout,
    pub config: Config,
}

impl Engine {
    pub fn new(layout: Layout, config: Config) -> Self {
        Self { layout, config }
    }

    /**
     * Loads the layout and config files, falling back to the defaults for those not given.
     */
    pub fn load_files(
        layout: Option<&std::path::Path>,
        config: Option<&std::path::Path>,
    ) -> Result<Self, Error> {
        let layout = match layout {
            Some(path) => Layout::load_file(path)?,
            None => Layout::default(),
        };
        let config = match config {
            Some(path) => Config::load_file(path)?,
            None => Config::default(),
        };
        Ok(Self::new(layout, config))
    }

    pub fn rules(&self) -> Rules {
        self.config.rules()
    }

    pub fn build_vehicle_states<'a, I>(&self, observations: I) -> Result<Built, Error>
    where
        I: IntoIterator<Item = &'a VehicleObservation>,
    {
        Ok(vehicle::build_vehicle_states(observations, &self.layout)?)
    }

    pub fn detect_conflicts(&self, states: &[VehicleState]) -> Vec<ConflictRecord> {
        conflict::detect_conflicts(states, &self.rules())
    }

    pub fn schedule(&self, states: &[VehicleState], records: &[ConflictRecord]) -> Schedule {
        conflict::schedule(states, records, self.config.traversal_time)
    }

    /**
     * Runs the whole pipeline on the observations of one scenario. Fails only if an observation
     * is invalid; unrecognized routes end up in the report's diagnostics.
     */
    pub fn evaluate<'a, I>(&self, observations: I) -> Result<ScenarioReport, Error>
    where
        I: IntoIterator<Item = &'a VehicleObservation>,
    {
        let Built {
            states,
            diagnostics,
        } = self.build_vehicle_states(observations)?;
        let mut tracer = Tracer::new(self.config.trace);

        let conflicts =
            conflict::detect_conflicts_with(&states, &self.rules(), |first, second, evaluation| {
                tracer.log(Trace::Pairs, || {
                    format!("{} / {}: {}", first.vehicle_id(), second.vehicle_id(), evaluation)
                });
                if let Some(record) = &evaluation.record {
                    log::debug!("{}", record.decision);
                    tracer.log(Trace::Decisions, || {
                        format!("{} ({})", record.decision, record.reason)
                    });
                }
            });
        let schedule = self.schedule(&states, &conflicts);
        for id in &schedule.order {
            tracer.log(Trace::Decisions, || {
                format!(
                    "{} crosses with rank {} after waiting {}s",
                    id,
                    schedule.rank(id).unwrap_or_default(),
                    schedule.waiting_time(id)
                )
            });
        }

        log::debug!(
            "{} vehicles, {} conflicts, {} unrecognized routes",
            states.len(),
            conflicts.len(),
            diagnostics.len()
        );

        let mut report = ScenarioReport::new(&states, conflicts, &schedule, diagnostics);
        report.trace = tracer.finish();
        Ok(report)
    }

    pub fn evaluate_scenario(&self, scenario: &Scenario) -> Result<ScenarioReport, Error> {
        self.evaluate(&scenario.vehicles_scenario)
    }

    /**
     * Evaluates a scenario document, `{"vehicles_scenario": [...]}`.
     */
    pub fn evaluate_json(&self, data: &str) -> Result<ScenarioReport, Error> {
        self.evaluate_scenario(&Scenario::load(data)?)
    }

    pub fn evaluate_file(&self, path: &std::path::Path) -> Result<ScenarioReport, Error> {
        self.evaluate_json(&std::fs::read_to_string(path)?)
    }
}
