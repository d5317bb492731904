//! Echo agent
//!
//! Succeeds on any task by repeating it back, listing the parameters it
//! was given. The reference implementation of the agent surface.

use async_trait::async_trait;

use agb_domain::ports::Agent;
use agb_domain::value_objects::{TaskRequest, TaskResult};

/// Agent that echoes its task back
pub struct EchoAgent;

impl EchoAgent {
    /// Create the agent
    pub fn new() -> Self {
        EchoAgent
    }
}

impl Default for EchoAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for EchoAgent {
    fn name(&self) -> &str {
        "echo"
    }

    async fn execute_task(&self, request: TaskRequest) -> TaskResult {
        if request.task.trim().is_empty() {
            return TaskResult::fail("empty task");
        }

        let mut keys: Vec<&String> = request.parameters.keys().collect();
        keys.sort();
        if keys.is_empty() {
            TaskResult::ok(request.task)
        } else {
            let rendered: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
            TaskResult::ok(format!("{} [{}]", request.task, rendered.join(", ")))
        }
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use agb_application::registry::{AgentEntry, AGENTS};

#[linkme::distributed_slice(AGENTS)]
static ECHO_AGENT: AgentEntry = AgentEntry {
    name: "echo",
    description: "Echoes the task back, listing given parameters",
    factory: || Ok(std::sync::Arc::new(EchoAgent::new())),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_task_text() {
        let agent = EchoAgent::new();
        let result = agent.execute_task(TaskRequest::new("do the thing")).await;
        assert!(result.success);
        assert_eq!(result.output.as_deref(), Some("do the thing"));
    }

    #[tokio::test]
    async fn lists_parameters_in_stable_order() {
        let agent = EchoAgent::new();
        let request = TaskRequest::new("run")
            .with_parameter("b", serde_json::json!(2))
            .with_parameter("a", serde_json::json!(1));
        let result = agent.execute_task(request).await;
        assert_eq!(result.output.as_deref(), Some("run [a, b]"));
    }

    #[tokio::test]
    async fn empty_task_fails_in_result() {
        let agent = EchoAgent::new();
        let result = agent.execute_task(TaskRequest::new("  ")).await;
        assert!(!result.success);
        assert!(result.error.is_some());
    }
}
