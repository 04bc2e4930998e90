use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::random::SharedRng;
use crate::weather_routes;

// Anything that goes in here must be a handle or pointer that can be cloned.
// The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub rng: SharedRng,
    pub max_days: Option<u32>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .nest("/weather", weather_routes::routes(state))
        .layer(TraceLayer::new_for_http())
}

async fn get_health() -> &'static str {
    "ok"
}
