//! Agent capability surface
//!
//! Any concrete type implementing [`Agent`] is eligible for catalog
//! registration and name-based lookup through the provider registry.

use crate::value_objects::{TaskRequest, TaskResult};
use async_trait::async_trait;

/// A named, task-executing capability
#[async_trait]
pub trait Agent: Send + Sync {
    /// Stable agent name used for registration and lookup
    fn name(&self) -> &str;

    /// Execute one task to completion
    ///
    /// Failures are reported inside the [`TaskResult`], not as an `Err`,
    /// so callers dispatching to many agents handle outcomes uniformly.
    async fn execute_task(&self, request: TaskRequest) -> TaskResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upcase;

    #[async_trait]
    impl Agent for Upcase {
        fn name(&self) -> &str {
            "upcase"
        }

        async fn execute_task(&self, request: TaskRequest) -> TaskResult {
            TaskResult::ok(request.task.to_uppercase())
        }
    }

    #[tokio::test]
    async fn agent_trait_is_object_safe() {
        let agent: Box<dyn Agent> = Box::new(Upcase);
        let result = agent.execute_task(TaskRequest::new("hi")).await;
        assert_eq!(result.output.as_deref(), Some("HI"));
    }
}
