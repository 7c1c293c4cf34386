// Start of file: src/main.rs

use std::sync::Arc;

use axum::{Router, serve};
use tokio::net::TcpListener;

use notification_gateway::config::{environment::EnvironmentVariables, state::AppState};
use notification_gateway::core::{logging, server};
use notification_gateway::database::DatabaseService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let environment: Arc<EnvironmentVariables> = Arc::new(EnvironmentVariables::load()?);

    // Pool is lazy: the service comes up even if the database is unreachable
    let database: DatabaseService = DatabaseService::new(&environment);
    let state: AppState = AppState::new(environment.clone(), Arc::new(database.clone()));

    let app: Router = server::create_app(state);
    let listener: TcpListener = server::setup_listener(&environment).await?;

    tracing::info!(
        "Server listening on {} (docs at {})",
        listener.local_addr()?,
        environment.base_path
    );

    serve(listener, server::into_make_service(app))
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    database.shutdown().await;

    Ok(())
}

// End of file: src/main.rs
