//! Error types for the weekplan ecosystem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in weekplan operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The durable record could not be rewritten. The in-memory store still
    /// holds the mutation; only durability is lost.
    #[error("Could not write planner file {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Generator error: {0}")]
    Generator(String),

    #[error("Generator '{0}' not found in PATH. Install it with:\n  cargo install weekplan-generator-{0}")]
    GeneratorNotInstalled(String),

    #[error("Generator request timed out after {0}s")]
    GeneratorTimeout(u64),
}

/// Result type alias for weekplan operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
