//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all dispatch handler
//! - Wire up middleware (request id, tracing, timeout, body limit)
//! - Serve on the bound listener with graceful shutdown
//! - Dispatch requests through the prefix route table

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderName, Request};
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::schema::{LimitsConfig, ServiceConfig};
use crate::http::handlers;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::observability::metrics;
use crate::routing::{Endpoint, RouteTable};
use crate::store::UserStore;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub routes: Arc<RouteTable>,
    pub limits: LimitsConfig,
}

/// HTTP server for the user service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The store is created here, once, and shared with every handler.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            store: Arc::new(UserStore::new()),
            routes: Arc::new(RouteTable::new()),
            limits: config.limits.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let request_id_header = HeaderName::from_static(X_REQUEST_ID);

        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(
                        request_id_header.clone(),
                        MakeRequestUuid,
                    ))
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::new(request_id_header)),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Catch-all handler: resolve the endpoint from the prefix table, run it,
/// and record the outcome.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let path = request.uri().path().to_string();
    let endpoint = state.routes.match_path(&path);

    tracing::debug!(
        endpoint = endpoint.name(),
        method = %request.method(),
        path = %path,
        "Endpoint hit"
    );

    let response = match endpoint {
        Endpoint::Home => handlers::home().await,
        Endpoint::GetUser => handlers::get_user(&state, &path).await,
        Endpoint::PostUser => {
            let body = read_body(request, state.limits.max_body_bytes).await;
            handlers::post_user(&state, &body).await
        }
        Endpoint::DeleteUser => handlers::delete_user(&state, &path).await,
        Endpoint::PatchUser => {
            let body = read_body(request, state.limits.max_body_bytes).await;
            handlers::patch_user(&state, &path, &body).await
        }
        Endpoint::ListUsers => handlers::list_users(&state).await,
    };

    metrics::record_request(endpoint.name(), response.status().as_u16(), start);
    response
}

/// Buffer the request body up to the configured limit.
///
/// A failed read decodes downstream the same as an empty body.
async fn read_body(request: Request<Body>, limit: usize) -> axum::body::Bytes {
    axum::body::to_bytes(request.into_body(), limit)
        .await
        .unwrap_or_default()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
