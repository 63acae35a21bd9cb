//! Route handlers. Every failure leaves here as a `WeatherError` response.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{Method, StatusCode, Uri},
    response::Response,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::constants::{CITY_REGISTRY, KAOHSIUNG};
use crate::errors::{error_response, WeatherError};
use crate::routes::AppState;

/// `GET /`
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Taiwan weather forecast proxy",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "allCities": "/api/weather/all",
            "kaohsiung": "/api/weather/kaohsiung",
            "city": "/api/weather/:city",
        },
    }))
}

/// `GET /api/health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// `GET /api/weather/:city`
pub async fn city_weather(
    State(state): State<AppState>,
    city: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, WeatherError> {
    let Path(city) = city?;
    respond_with_city(&state, &city).await
}

/// `GET /api/weather/kaohsiung`
pub async fn kaohsiung_weather(State(state): State<AppState>) -> Result<Json<Value>, WeatherError> {
    respond_with_city(&state, KAOHSIUNG).await
}

async fn respond_with_city(state: &AppState, city: &str) -> Result<Json<Value>, WeatherError> {
    let report = state.service.city_report(city).await?;

    Ok(Json(json!({
        "success": true,
        "data": report,
    })))
}

/// `GET /api/weather/all`
pub async fn all_cities_weather(
    State(state): State<AppState>,
) -> Result<Json<Value>, WeatherError> {
    let reports = state.service.city_reports(&CITY_REGISTRY).await?;
    tracing::info!(
        "Resolved {} of {} cities",
        reports.len(),
        CITY_REGISTRY.len()
    );

    Ok(Json(json!({
        "success": true,
        "count": reports.len(),
        "data": reports,
    })))
}

/// Fallback for unmatched paths
pub async fn not_found(method: Method, uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "not found",
        format!("Route {} {} not found", method, uri.path()),
    )
}

/// Last-resort body for a handler that panicked
pub fn internal_error(message: String) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error", message)
}
