//! HTTP proxy that reshapes the CWA 36-hour forecast into flat per-city JSON.

pub mod config;
pub mod constants;
pub mod errors;
pub mod formatters;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;

pub use config::Config;
pub use errors::WeatherError;
pub use routes::{create_router, AppState};
