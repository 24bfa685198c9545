use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{health, interviews},
    middleware::auth::auth_middleware,
    services::interview::InterviewService,
    AppState,
};

pub fn router<S: InterviewService>(state: AppState<S>) -> Router {
    let protected_routes = Router::new()
        .route(
            "/interviews",
            get(interviews::get_interviews::<S>).post(interviews::create_interview::<S>),
        )
        .layer(from_fn_with_state(state.clone(), auth_middleware::<S>));

    Router::new()
        .route("/health", get(health::health))
        .route("/docs/openapi.json", get(health::openapi))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
