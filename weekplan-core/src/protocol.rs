//! Generator protocol types.
//!
//! Defines the JSON protocol used for communication between the weekplan CLI
//! and generator binaries over stdin/stdout.

use serde::{Deserialize, Serialize};

/// Commands that generators must implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    GenerateSchedule,
}

/// Request sent from the CLI to a generator.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from a generator to the CLI.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::PlanEntry;

    #[test]
    fn test_success_response_decodes_plan_entries() {
        let json = r#"{"status":"success","data":[{"time":"09:00","description":"Standup"}]}"#;
        let response: Response<Vec<PlanEntry>> = serde_json::from_str(json).unwrap();

        match response {
            Response::Success { data } => {
                assert_eq!(data.len(), 1);
                assert_eq!(data[0].time, "09:00");
            }
            Response::Error { error } => panic!("unexpected error response: {error}"),
        }
    }

    #[test]
    fn test_error_response_carries_message() {
        let json = r#"{"status":"error","error":"model unavailable"}"#;
        let response: Response<Vec<PlanEntry>> = serde_json::from_str(json).unwrap();

        match response {
            Response::Error { error } => assert_eq!(error, "model unavailable"),
            Response::Success { .. } => panic!("expected error response"),
        }
    }
}
