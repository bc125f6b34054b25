//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    create_post_handler, delete_post_handler, engagement_action_handler, engagement_handler,
    get_post_handler, health_handler, login_handler, post_ids_handler, posts_list_handler,
    update_post_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// An empty `allowed_origins` list allows any origin.
pub fn build_app(server_deps: ServerDeps, allowed_origins: &[String]) -> Router {
    let jwt_service_for_middleware = server_deps.jwt_service.clone();

    let app_state = AxumAppState {
        server_deps: Arc::new(server_deps),
    };

    let cors = CorsLayer::new()
        .allow_origin(cors_origins(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        // Post repository
        .route("/posts-list", get(posts_list_handler))
        .route("/post-ids", get(post_ids_handler))
        .route(
            "/post",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route("/create-post", post(create_post_handler))
        // Engagement
        .route(
            "/engagement",
            get(engagement_handler).post(engagement_action_handler),
        )
        // Editor login
        .route("/auth/login", post(login_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_origins(allowed_origins: &[String]) -> AllowOrigin {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        Any.into()
    } else {
        AllowOrigin::list(origins)
    }
}
