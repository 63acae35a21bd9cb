use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;

use crate::config::Config;
use crate::constants::{FORECAST_DATASET, USER_AGENT};
use crate::errors::WeatherError;
use crate::formatters::format_city_report;
use crate::models::{CityWeatherReport, DatasetResponse, UpstreamErrorBody};

/// Client for the CWA forecast dataset
#[derive(Clone)]
pub struct ForecastService {
    client: Arc<Client>,
    base_url: String,
    api_key: Option<String>,
}

impl ForecastService {
    /// Creates a new service from the startup configuration
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Checked before any request is built
    fn api_key(&self) -> Result<&str, WeatherError> {
        self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)
    }

    /// Fetches the forecast dataset filtered to a single location name
    pub async fn fetch_dataset(&self, location_name: &str) -> Result<DatasetResponse, WeatherError> {
        let api_key = self.api_key()?;
        let url = format!("{}/v1/rest/datastore/{}", self.base_url, FORECAST_DATASET);

        let response = self
            .client
            .get(&url)
            .query(&[("Authorization", api_key), ("locationName", location_name)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let data = response.json::<DatasetResponse>().await?;
        Ok(data)
    }

    /// Resolves one city into its flattened report
    pub async fn city_report(&self, city: &str) -> Result<CityWeatherReport, WeatherError> {
        tracing::info!("Fetching forecast for {}", city);

        let dataset = self.fetch_dataset(city).await?;
        let location = dataset
            .records
            .location
            .first()
            .ok_or_else(|| WeatherError::CityNotFound(city.to_string()))?;

        format_city_report(&dataset.records.dataset_description, location)
    }

    /// Resolves every city concurrently, dropping the ones that fail.
    ///
    /// Results keep the order of `cities`. Only a missing key fails the whole batch.
    pub async fn city_reports(&self, cities: &[&str]) -> Result<Vec<CityWeatherReport>, WeatherError> {
        self.api_key()?;

        let lookups = cities.iter().map(|city| async move {
            match self.city_report(city).await {
                Ok(report) => Some(report),
                Err(e) => {
                    tracing::warn!("Skipping {} in batch: {}", city, e);
                    None
                }
            }
        });

        Ok(join_all(lookups).await.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        // Unroutable base URL: reaching the network would surface as Transport instead
        let config = Config {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Config::from_lookup(|_| None)
        };
        let service = ForecastService::new(&config).unwrap();

        let err = service.fetch_dataset("臺北市").await.unwrap_err();
        assert!(matches!(err, WeatherError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_batch_without_key_fails_as_a_whole() {
        let config = Config {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Config::from_lookup(|_| None)
        };
        let service = ForecastService::new(&config).unwrap();

        let err = service.city_reports(&["臺北市", "高雄市"]).await.unwrap_err();
        assert!(matches!(err, WeatherError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_batch_tolerates_every_city_failing() {
        // Nothing listens on the discard port, so each lookup is a transport failure
        let config = Config {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            ..Config::from_lookup(|_| None)
        };
        let service = ForecastService::new(&config).unwrap();

        let reports = service.city_reports(&["臺北市", "高雄市"]).await.unwrap();
        assert!(reports.is_empty());
    }
}
