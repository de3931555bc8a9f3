//! Application setup and server configuration.

use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::ServerDeps;
use crate::server::routes::{
    create_waitlist_entry_handler, get_provider_handler, health_handler, list_agencies_handler,
    list_providers_handler, list_waitlist_handler, root_handler,
};

/// CORS policy: any origin unless specific origins are configured
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, config: &Config) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/providers", get(list_providers_handler))
        .route("/providers/:id", get(get_provider_handler))
        .route("/agencies", get(list_agencies_handler))
        .route(
            "/waitlist",
            get(list_waitlist_handler).post(create_waitlist_entry_handler),
        )
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(deps)
}
