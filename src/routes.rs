use std::any::Any;

use axum::{response::Response, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::errors::WeatherError;
use crate::handlers::{
    all_cities_weather, city_weather, health, index, internal_error, kaohsiung_weather, not_found,
};
use crate::service::ForecastService;

/// State shared by every handler; read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub service: ForecastService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        Ok(Self {
            service: ForecastService::new(config)?,
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/weather/all", get(all_cities_weather))
        .route("/api/weather/kaohsiung", get(kaohsiung_weather))
        .route("/api/weather/:city", get(city_weather))
        .fallback(not_found)
        .with_state(state);

    with_middleware(router)
}

/// Request tracing outermost, so responses built from a panic are logged too
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown error".to_string()
    };

    tracing::error!("Handler panicked: {}", message);
    internal_error(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn explode() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn test_panicking_handler_becomes_json_500() {
        let app = with_middleware(Router::new().route("/explode", get(explode)));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let response = reqwest::get(format!("http://{}/explode", addr)).await.unwrap();
        assert_eq!(response.status().as_u16(), 500);

        let body = response.json::<Value>().await.unwrap();
        assert_eq!(
            body,
            json!({ "error": "internal server error", "message": "boom" })
        );
    }

    #[test]
    fn test_non_string_panic_payload() {
        let response = handle_panic(Box::new(7_u8));
        assert_eq!(response.status().as_u16(), 500);
    }
}
