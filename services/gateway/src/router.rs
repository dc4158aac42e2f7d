use crate::handlers::{health, reference, risk};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/risk/score", post(risk::score))
        .route("/risk/report", post(risk::report))
        .route("/rules", get(reference::rules))
        .route("/reference/ranges", get(reference::normal_ranges))
        .route("/reference/inputs", get(reference::input_bounds));

    Router::new()
        .route("/health", get(health::health))
        .nest("/v1", api_routes)
        .fallback(health::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
