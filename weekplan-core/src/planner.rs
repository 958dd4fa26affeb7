//! Planner root: config loading and store access.

use std::path::PathBuf;

use ::config::{Config, File};

use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};
use crate::generator::Generator;
use crate::store::EventStore;

#[derive(Clone)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn load() -> PlannerResult<Self> {
        let config_path = PlannerConfig::config_path()?;

        if !config_path.exists() {
            PlannerConfig::create_default_config(&config_path)?;
        }

        let config: PlannerConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| PlannerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlannerError::Config(e.to_string()))?;

        Ok(Planner { config })
    }

    /// Where the durable record lives, with `~` expanded.
    pub fn planner_file(&self) -> PathBuf {
        let expanded =
            shellexpand::tilde(&self.config.planner_file.to_string_lossy()).into_owned();

        PathBuf::from(expanded)
    }

    /// Open the event store backed by the configured planner file.
    pub fn store(&self) -> EventStore {
        EventStore::load(self.planner_file())
    }

    /// The configured schedule generator, if any.
    pub fn generator(&self) -> Option<Generator> {
        self.config.generator.as_deref().map(Generator::from_name)
    }
}
