use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use domain::services::{ReferenceDirectory, RegistrationGateway, RegistrationService};
use persistence::gateway::PgRegistrationGateway;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{health, reference, users};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registration: RegistrationService,
    pub reference: Arc<dyn ReferenceDirectory>,
    /// `None` when running against a non-SQL gateway.
    pub pool: Option<PgPool>,
}

impl AppState {
    /// State backed by PostgreSQL.
    pub fn postgres(config: Config, pool: PgPool) -> Self {
        let mut state = Self::with_gateway(config, PgRegistrationGateway::new(pool.clone()));
        state.pool = Some(pool);
        state
    }

    /// State backed by any gateway, e.g. `InMemoryGateway` in tests.
    pub fn with_gateway<G>(config: Config, gateway: G) -> Self
    where
        G: RegistrationGateway + ReferenceDirectory + 'static,
    {
        let gateway = Arc::new(gateway);
        Self {
            config: Arc::new(config),
            registration: RegistrationService::new(gateway.clone()),
            reference: gateway,
            pool: None,
        }
    }
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    router(AppState::postgres(config, pool))
}

pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api_routes = Router::new()
        .route("/api/users/newuser", post(users::register_user))
        .route("/api/companies", get(reference::list_companies))
        .route(
            "/api/years-of-experience",
            get(reference::list_years_of_experience),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
