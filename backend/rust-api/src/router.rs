use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::auth_middleware;
use crate::websocket;
use crate::AppState;

/// Full HTTP surface. `/realtime` authenticates from its query string, so it sits outside the auth layer.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/auth/session", get(handlers::current_session))
        .route("/api/profiles/:id", get(handlers::get_profile))
        .route("/api/events", get(handlers::list_events).post(handlers::create_event))
        .route(
            "/api/events/:id",
            put(handlers::update_event).delete(handlers::delete_event),
        )
        .route(
            "/api/registrations",
            get(handlers::list_registrations).post(handlers::create_registration),
        )
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/signup", post(handlers::signup))
        .route("/api/auth/login", post(handlers::login))
        .route("/realtime", get(websocket::websocket_handler))
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
