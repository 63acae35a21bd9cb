use serde::{Deserialize, Serialize};

// ============================================================================
// CWA Open Data API Models
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DatasetResponse {
    pub success: Option<String>,
    pub records: Records,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Records {
    pub dataset_description: String,
    pub location: Vec<LocationRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationRecord {
    pub location_name: String,
    pub weather_element: Vec<WeatherElement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeatherElement {
    pub element_name: String,
    pub time: Vec<TimeSlot>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
    pub parameter: Parameter,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameter {
    pub parameter_name: String,
    pub parameter_value: Option<String>,
    pub parameter_unit: Option<String>,
}

/// Error payload returned by the CWA gateway on non-success statuses
#[derive(Debug, Deserialize)]
pub struct UpstreamErrorBody {
    pub message: Option<String>,
}

// ============================================================================
// Proxy Response Models
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInterval {
    pub start_time: String,
    pub end_time: String,
    pub weather: String,
    pub rain: String,
    pub min_temp: String,
    pub max_temp: String,
    pub comfort: String,
    pub wind_speed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityWeatherReport {
    pub city: String,
    pub update_time: String,
    pub forecasts: Vec<ForecastInterval>,
}
