// Application server configuration and setup

use std::sync::Arc;

use axum::{
    Router,
    ServiceExt,
    middleware::from_fn,
    extract::{DefaultBodyLimit, Request},
    routing::IntoMakeService,
};
use tower::{Layer, ServiceBuilder};
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;

use crate::api::{api_routes, docs::routes::docs_routes};
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::utils::{
    error_handler::route_not_found,
    response_handler::response_wrapper,
};

/// Creates and configures the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    let env: Arc<EnvironmentVariables> = state.environment.clone();

    // Unsupported methods answer like unknown routes
    let api: Router<AppState> = api_routes().method_not_allowed_fallback(route_not_found);

    Router::new()
        .merge(docs_routes(&env.base_path))
        .nest(&env.api_prefix(), api)
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(from_fn(response_wrapper))
                .layer(DefaultBodyLimit::max(env.max_request_body_size))
        )
        .with_state(state)
}

/// The router as served: a trailing `/` is trimmed before routing, so
/// `{base}/api/notifications/` reaches the same handler as `{base}/api/notifications`
pub type AppService = IntoMakeService<NormalizePath<Router>>;

pub fn into_make_service(app: Router) -> AppService {
    ServiceExt::<Request>::into_make_service(NormalizePathLayer::trim_trailing_slash().layer(app))
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install TERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
