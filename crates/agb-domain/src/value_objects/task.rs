//! Agent task request/result types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A unit of work handed to an agent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Natural-language or structured task description
    pub task: String,
    /// Free-form task parameters
    #[serde(default)]
    pub parameters: HashMap<String, serde_json::Value>,
}

impl TaskRequest {
    /// Create a request with no parameters
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            parameters: HashMap::new(),
        }
    }

    /// Attach a parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

/// Outcome of an agent task execution
///
/// Task failure is data, not an `Err`: agents report failures through
/// `success == false` so one misbehaving task cannot abort a caller that
/// fans work out across agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    /// Whether the task completed successfully
    pub success: bool,
    /// Task output when successful
    pub output: Option<String>,
    /// Failure description when unsuccessful
    pub error: Option<String>,
}

impl TaskResult {
    /// Successful result carrying output
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: Some(output.into()),
            error: None,
        }
    }

    /// Failed result carrying an error description
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }
}
