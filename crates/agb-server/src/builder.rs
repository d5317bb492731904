//! Rocket assembly from an application context
//!
//! The container's handoff point: every registered controller is resolved
//! through the bean container and mounted. A controller whose
//! construction fails is a wiring defect and fails the build - unlike
//! provider materialization, there is no skip-and-continue here.

use agb_domain::error::{Error, Result};
use agb_domain::ports::BeanSource;
use agb_infrastructure::bootstrap::AppContext;
use agb_infrastructure::container::BeanResolver;
use rocket::{Build, Rocket};
use std::sync::Arc;
use tracing::info;

use crate::controller::scan_controllers;
use crate::handlers::{self, ServerState};

/// Build a Rocket instance for the given context
///
/// Binds address and port from the context's [`ServerConfig`]
/// (`agb_infrastructure::config::ServerConfig`), mounts the built-in
/// health endpoint, then resolves and mounts every discovered controller.
pub fn build_rocket(ctx: &AppContext) -> Result<Rocket<Build>> {
    let server = &ctx.config().server;
    let figment = rocket::Config::figment()
        .merge(("address", server.address.clone()))
        .merge(("port", server.port))
        .merge(("cli_colors", false));

    let mut rocket = rocket::custom(figment)
        .manage(ServerState {
            app_name: ctx.name().to_string(),
        })
        .mount("/", rocket::routes![handlers::health]);

    let resolver = BeanResolver::new(ctx.container());
    for entry in scan_controllers() {
        let controller = (entry.factory)(&resolver as &dyn BeanSource).map_err(|message| {
            Error::container(format!(
                "controller '{}' construction failed: {message}",
                entry.name
            ))
        })?;
        info!(
            "Mounting controller '{}' at {}",
            entry.name,
            controller.base_path()
        );
        let routes = controller.routes();
        let base_path = controller.base_path();
        rocket = Arc::clone(&controller).attach(rocket);
        rocket = rocket.mount(base_path, routes);
    }

    Ok(rocket)
}

/// Serve the context until the server exits, then shut the context down
///
/// Rocket installs its own signal handling, so ctrl-c resolves the launch
/// future and the context is released on the way out.
pub async fn serve(ctx: AppContext) -> Result<()> {
    let server = &ctx.config().server;
    info!(
        "HTTP server listening on {}:{}",
        server.address, server.port
    );

    let rocket = build_rocket(&ctx)?;
    let outcome = rocket.launch().await;
    ctx.shutdown();

    outcome
        .map(|_| ())
        .map_err(|err| Error::internal(format!("HTTP server failed: {err}")))
}
