//! Full-stack integration tests over the ignited framework
//!
//! Exercises the wired application the way an embedder sees it: built-in
//! providers and agents resolved through the registry, framework
//! singletons through the container, lifecycle events through the bus.

// Force linkme registration of the built-in providers and agents
extern crate agb_providers;

use std::sync::{Arc, Mutex};

use agb::domain::events::ApplicationStopping;
use agb::domain::value_objects::{ProviderCategory, TaskRequest};
use agb::infrastructure::bootstrap::{ignite_with_config, AppDescriptor};
use agb::infrastructure::config::AppConfig;
use agb::infrastructure::events::EventBus;
use agb::infrastructure::registry::ProviderRegistry;
use agb::providers::{EchoTextProvider, InMemoryStore, InProcessQueue};

#[tokio::test]
async fn built_in_providers_are_discovered_and_usable() {
    let ctx = ignite_with_config(
        &AppDescriptor::new("full-stack"),
        AppConfig::default(),
    )
    .unwrap();
    let registry = ctx.registry();

    let text = registry
        .get_provider(ProviderCategory::TextGeneration, "echo")
        .unwrap()
        .downcast_arc::<EchoTextProvider>()
        .ok()
        .unwrap();
    assert_eq!(text.complete("ping"), "ping");

    let memory = registry
        .get_provider(ProviderCategory::Memory, "in-memory")
        .unwrap()
        .downcast_arc::<InMemoryStore>()
        .ok()
        .unwrap();
    memory.remember("k", serde_json::json!("v"));
    assert_eq!(memory.recall("k"), Some(serde_json::json!("v")));

    let queue = registry
        .get_provider(ProviderCategory::Queue, "in-process")
        .unwrap()
        .downcast_arc::<InProcessQueue>()
        .ok()
        .unwrap();
    queue.enqueue("job-1").unwrap();
    assert_eq!(queue.dequeue().as_deref(), Some("job-1"));

    ctx.shutdown();
}

#[tokio::test]
async fn built_in_agent_executes_tasks() {
    let ctx = ignite_with_config(
        &AppDescriptor::new("agent-stack"),
        AppConfig::default(),
    )
    .unwrap();

    let agent = ctx.registry().get_agent("echo").unwrap();
    let result = agent
        .execute_task(TaskRequest::new("summarize the day"))
        .await;
    assert!(result.success);
    assert_eq!(result.output.as_deref(), Some("summarize the day"));

    ctx.shutdown();
}

#[tokio::test]
async fn framework_singletons_resolve_to_the_context_instances() {
    let ctx = ignite_with_config(
        &AppDescriptor::new("singleton-stack"),
        AppConfig::default(),
    )
    .unwrap();

    let bus = ctx.container().get_bean::<EventBus>().unwrap();
    assert!(Arc::ptr_eq(&bus, ctx.event_bus()));

    let registry = ctx.container().get_bean::<ProviderRegistry>().unwrap();
    assert!(Arc::ptr_eq(&registry, ctx.registry()));

    let config = ctx.container().get_bean::<AppConfig>().unwrap();
    assert_eq!(config.app.name, "singleton-stack");

    ctx.shutdown();
}

#[tokio::test]
async fn lifecycle_events_flow_through_the_bus() {
    let ctx = ignite_with_config(
        &AppDescriptor::new("lifecycle-stack"),
        AppConfig::default(),
    )
    .unwrap();

    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    ctx.event_bus()
        .subscribe::<ApplicationStopping, _>(move |event| {
            sink.lock().unwrap().push(event.name.clone());
        });

    ctx.shutdown();
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["lifecycle-stack".to_string()]
    );
    assert_eq!(ctx.event_bus().total_listener_count(), 0);
}
