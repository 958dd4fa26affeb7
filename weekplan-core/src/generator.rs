//! Generator subprocess protocol.
//!
//! This module handles communication with external generator binaries
//! (e.g., `weekplan-generator-ollama`) using JSON over stdin/stdout.
//!
//! The protocol is language-agnostic: any executable that speaks it can turn
//! a task list into a timed day plan. Generators manage their own model
//! access and credentials; core only passes the date and tasks along and
//! never calls a model itself.

use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::error::{PlannerError, PlannerResult};
use crate::merge::PlanEntry;
use crate::protocol::{Command as GeneratorCommand, Request, Response};

// Model-backed generation can take tens of seconds.
const GENERATOR_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct Generator(String);

impl Generator {
    pub fn from_name(name: &str) -> Self {
        Generator(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> PlannerResult<std::path::PathBuf> {
        let binary_name = format!("weekplan-generator-{}", self.0);
        which::which(&binary_name)
            .map_err(|_| PlannerError::GeneratorNotInstalled(self.0.clone()))
    }

    /// Ask the generator to turn `tasks` into timed entries for `date`.
    ///
    /// Entries come back exactly as the generator produced them; validation
    /// and de-duplication happen later, in the store's add path.
    pub async fn generate(
        &self,
        date: NaiveDate,
        tasks: &[String],
    ) -> PlannerResult<Vec<PlanEntry>> {
        let params = serde_json::json!({
            "date": date.format("%Y-%m-%d").to_string(),
            "weekday": date.format("%A").to_string(),
            "tasks": tasks,
        });

        timeout(
            GENERATOR_TIMEOUT,
            self.call(GeneratorCommand::GenerateSchedule, params),
        )
        .await
        .map_err(|_| PlannerError::GeneratorTimeout(GENERATOR_TIMEOUT.as_secs()))?
    }

    /// Call a generator command and return the decoded result.
    async fn call<R: DeserializeOwned>(
        &self,
        command: GeneratorCommand,
        params: serde_json::Value,
    ) -> PlannerResult<R> {
        let request = Request { command, params };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| PlannerError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = Command::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                PlannerError::Generator(format!(
                    "Failed to spawn {}: {}",
                    binary_path.display(),
                    e
                ))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(PlannerError::Generator(format!(
                "Generator exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.trim().is_empty() {
            return Err(PlannerError::Generator(
                "Generator returned no response".into(),
            ));
        }

        let response: Response<R> = serde_json::from_str(&response_str)
            .map_err(|e| PlannerError::Generator(format!("Failed to parse response: {}", e)))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(PlannerError::Generator(error)),
        }
    }
}
