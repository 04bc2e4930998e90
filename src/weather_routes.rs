use axum::{
    Router,
    extract::{Json, State},
    routing::post,
};
use chrono::Local;

use crate::app::AppState;
use crate::error::ForecastError;
use crate::forecast::{ForecastRequest, ForecastResponse, generate_forecast};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(get_forecast))
        .with_state(state)
}

async fn get_forecast(
    State(state): State<AppState>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, ForecastError> {
    log::debug!(
        "Forecast requested for {:?}, {} days in {}",
        request.location,
        request.days,
        request.units
    );

    if let Some(limit) = state.max_days {
        if i64::from(request.days) > i64::from(limit) {
            return Err(ForecastError::TooManyDays {
                requested: request.days,
                limit,
            });
        }
    }

    let today = Local::now().date_naive();
    let mut rng = state.rng.lock().await;
    Ok(Json(generate_forecast(request, today, &mut *rng)))
}
