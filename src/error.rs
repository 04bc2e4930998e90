use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("tls needs both a key file and a cert file, {missing} is missing")]
    IncompleteTls { missing: &'static str },
}

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to load tls configuration: {0}")]
    Tls(std::io::Error),
    #[error("server stopped: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum ForecastError {
    #[error("requested {requested} days but at most {limit} are served")]
    TooManyDays { requested: i32, limit: u32 },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ForecastError {
    fn into_response(self) -> Response {
        warn!("Rejecting forecast request: {}", self);
        let status = match self {
            ForecastError::TooManyDays { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
