//! Global planner configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{PlannerError, PlannerResult};

static DEFAULT_PLANNER_FILE: &str = "~/planner/events.json";

fn default_planner_file() -> PathBuf {
    PathBuf::from(DEFAULT_PLANNER_FILE)
}

/// Global configuration at ~/.config/weekplan/config.toml
#[derive(Deserialize, Clone)]
pub struct PlannerConfig {
    /// Where the event record lives (may be `~`-relative).
    #[serde(default = "default_planner_file")]
    pub planner_file: PathBuf,

    /// Name of the schedule generator to use for `weekplan plan`
    /// (resolves to a `weekplan-generator-<name>` binary on PATH).
    pub generator: Option<String>,
}

impl PlannerConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".into()))?
            .join("weekplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> PlannerResult<()> {
        let contents = format!(
            "\
# weekplan configuration

# Where your events live:
# planner_file = \"{}\"

# Schedule generator for `weekplan plan` (runs weekplan-generator-<name>):
# generator = \"ollama\"
",
            DEFAULT_PLANNER_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
