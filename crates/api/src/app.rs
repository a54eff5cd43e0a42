use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::trace_id;
use crate::routes::{deployment, health, sale, terminal_config, verification, void_check};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Internal routes, hit by the cloud-side triggers
    let internal_routes = Router::new()
        .route("/internal/config", post(terminal_config::register_config))
        .route("/internal/check-void", post(void_check::check_void))
        .route("/internal/sale", post(sale::register_sale))
        .route("/internal/deploy", post(deployment::register_deployment))
        .route("/internal/otp/send", post(verification::send_otp))
        .route("/internal/otp/verify", post(verification::verify_internal));

    // Terminal-facing routes, hit by the point-of-sale hardware
    let terminal_routes = Router::new()
        .route(
            "/v1/terminal/:mid/:tid/integrated-mode-config",
            get(terminal_config::get_config),
        )
        .route(
            "/v1/terminal/:mid/:tid/allow-void",
            get(void_check::allow_void_check),
        )
        .route("/v1/sale-request", post(sale::sale_request))
        .route("/:terminal_sno/deploy", post(deployment::fetch_deployment))
        .route(
            "/verification/:workflow_id/dispatch",
            post(verification::dispatch_otp),
        )
        .route(
            "/verification/:workflow_id/verify",
            post(verification::verify_otp),
        );

    // Public routes (liveness/readiness)
    let public_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready));

    // The terminal fleet calls from embedded webviews and kiosk browsers;
    // origins are not constrained.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(internal_routes)
        .merge(terminal_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
