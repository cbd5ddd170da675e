//! Router assembly and middleware stack.

use crate::errors::AppError;
use crate::handlers::{self, AppState};
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Builds the application router.
///
/// `rate_limited` attaches the per-IP governor to the API routes. The governor
/// keys on the client address, so it needs the connect-info service that
/// `main` installs; in-process tests build the router without it.
pub fn build_app(state: Arc<AppState>, rate_limited: bool) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/api/v1/analyze", post(handlers::analyze_lead))
        .route("/api/v1/analyze/sample", get(handlers::analyze_sample))
        .route("/api/v1/agents", get(handlers::list_agents))
        .route("/api/v1/agents/:kind/execute", post(handlers::execute_agent))
        // Paths kept for clients of the first release
        .route("/analyze", post(handlers::analyze_lead))
        .route("/test", get(handlers::analyze_sample))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_bytes));

    let api_routes = if rate_limited {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(state.config.rate_limit_per_second)
                .burst_size(state.config.rate_limit_burst)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?,
        );
        api_routes.layer(ServiceBuilder::new().layer(GovernorLayer {
            config: governor_conf,
        }))
    } else {
        api_routes
    };

    // Health check bypasses rate limiting
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    Ok(app)
}

/// Turns a handler panic into the standard 500 body; no partial result leaks.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::InternalError(detail).into_response()
}
