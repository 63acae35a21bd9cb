use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Generic text sent to callers when the failure detail is not meant for them
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

/// Everything a weather route can fail with
#[derive(Debug, Error)]
pub enum WeatherError {
    /// `CWA_API_KEY` was not provided at startup
    #[error("CWA API key is not configured")]
    MissingApiKey,

    /// Upstream answered but had no record for the location
    #[error("No weather data found for city: {0}")]
    CityNotFound(String),

    /// Upstream answered with a non-success status
    #[error("Upstream request failed with status {status}: {}", .message.as_deref().unwrap_or(FETCH_FAILED_MESSAGE))]
    Upstream { status: u16, message: Option<String> },

    /// Network failure, timeout or undecodable body
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Path segment that could not be decoded
    #[error("Invalid request path: {0}")]
    BadPath(#[from] PathRejection),

    /// Location record without a usable time axis
    #[error("Malformed upstream data: {0}")]
    MalformedData(String),
}

impl WeatherError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            Self::CityNotFound(_) => StatusCode::NOT_FOUND,
            Self::BadPath(rejection) => rejection.status(),
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Transport(_) | Self::MalformedData(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn category(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "configuration error",
            Self::CityNotFound(_) => "not found",
            Self::BadPath(_) => "bad request",
            Self::Upstream { .. } => "upstream error",
            Self::Transport(_) | Self::MalformedData(_) => "server error",
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::MissingApiKey | Self::CityNotFound(_) => self.to_string(),
            Self::BadPath(rejection) => rejection.body_text(),
            Self::Upstream { message, .. } => message
                .clone()
                .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string()),
            Self::Transport(_) | Self::MalformedData(_) => FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        error_response(status, self.category(), self.public_message())
    }
}

/// Builds the `{error, message}` body shared by every failure path
pub fn error_response(status: StatusCode, category: &str, message: impl Into<String>) -> Response {
    let body = json!({
        "error": category,
        "message": message.into(),
    });
    (status, Json(body)).into_response()
}
