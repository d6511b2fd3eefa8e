//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, access log, limits)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{LimitsConfig, ServiceConfig};
use crate::http::handlers::{
    create_user, delete_user, get_user, invalid_route, list_users, update_user,
};
use crate::http::request::UuidRequestId;
use crate::http::response::ApiError;
use crate::observability::access_log;
use crate::users::UserStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState, limits: &LimitsConfig) -> Router {
    let routes = Router::new()
        .route("/users", get(list_users).fallback(invalid_route))
        .route("/users/{id}", get(get_user).fallback(invalid_route))
        .route("/user", post(create_user).fallback(invalid_route))
        .route(
            "/user/{id}",
            put(update_user).delete(delete_user).fallback(invalid_route),
        )
        .fallback(invalid_route)
        .with_state(state)
        .layer(DefaultBodyLimit::max(limits.max_body_bytes));

    with_request_timeout(routes, Duration::from_secs(limits.request_timeout_secs))
        .layer(middleware::from_fn(access_log))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
}

/// Bound the time spent in `router`; an expired request gets a JSON 408.
#[allow(deprecated)]
pub fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::map_response(timeout_as_json))
}

// Handlers never answer 408 themselves, so every 408 here is the timeout layer's.
async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        ApiError::Timeout.into_response()
    } else {
        response
    }
}

/// HTTP server for the user registry.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    store: Arc<UserStore>,
}

impl HttpServer {
    /// Create a new HTTP server with a store built from the configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let strategy = config.store.id_strategy;
        let store = if config.store.seed {
            UserStore::seeded(strategy)
        } else {
            UserStore::new(strategy)
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<UserStore>) -> Self {
        let router = build_router(AppState::new(store.clone()), &config.limits);
        Self {
            router,
            config,
            store,
        }
    }

    /// Run the server until the shutdown signal fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            users = self.store.len(),
            id_strategy = ?self.store.strategy(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get a handle to the backing store.
    pub fn store(&self) -> Arc<UserStore> {
        self.store.clone()
    }
}
