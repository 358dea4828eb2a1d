//! API routes

pub mod domains;
pub mod health;
pub mod tenant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{routing::host_dispatch, state::AppState};

/// Create all routes, wrapped in host dispatch.
///
/// The inner router is mounted as the outer router's fallback service so the
/// host dispatch layer rewrites the URI before the inner router matches.
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness));

    let domain_routes = Router::new()
        .route("/domains", post(domains::add_domain).get(domains::domain_status))
        .route("/domains/dns", get(domains::dns_records))
        // Path used by earlier dashboard builds
        .route("/api/add-domain", post(domains::add_domain).get(domains::domain_status));

    let app = Router::new()
        .merge(health_routes)
        .merge(domain_routes)
        .fallback(tenant::tenant_page)
        .with_state(state.clone());

    Router::new()
        .fallback_service(app)
        .layer(middleware::from_fn_with_state(
            state.resolver.clone(),
            host_dispatch,
        ))
        .layer(TraceLayer::new_for_http())
}
