use crate::errors::WeatherError;
use crate::models::{CityWeatherReport, ForecastInterval, LocationRecord, WeatherElement};

/// Weather element tags the proxy knows how to place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Weather,
    RainChance,
    MinTemp,
    MaxTemp,
    Comfort,
    WindSpeed,
}

impl ElementKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Wx" => Some(Self::Weather),
            "PoP" => Some(Self::RainChance),
            "MinT" => Some(Self::MinTemp),
            "MaxT" => Some(Self::MaxTemp),
            "CI" => Some(Self::Comfort),
            "WS" => Some(Self::WindSpeed),
            _ => None,
        }
    }

    fn apply(self, interval: &mut ForecastInterval, raw: &str) {
        match self {
            Self::Weather => interval.weather = raw.to_string(),
            Self::RainChance => interval.rain = format!("{}%", raw),
            Self::MinTemp => interval.min_temp = format!("{}\u{00b0}C", raw),
            Self::MaxTemp => interval.max_temp = format!("{}\u{00b0}C", raw),
            Self::Comfort => interval.comfort = raw.to_string(),
            Self::WindSpeed => interval.wind_speed = raw.to_string(),
        }
    }
}

/// Flattens a location's element time series into one entry per time slot.
///
/// The first element defines the time axis; the others are read by index
/// without checking that their slots line up.
pub fn format_forecasts(location: &LocationRecord) -> Result<Vec<ForecastInterval>, WeatherError> {
    let axis = location.weather_element.first().ok_or_else(|| {
        WeatherError::MalformedData(format!(
            "location {} has no weather elements",
            location.location_name
        ))
    })?;

    let forecasts = axis
        .time
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let mut interval = ForecastInterval {
                start_time: slot.start_time.clone(),
                end_time: slot.end_time.clone(),
                ..Default::default()
            };
            for element in &location.weather_element {
                fill_from_element(&mut interval, element, i);
            }
            interval
        })
        .collect();

    Ok(forecasts)
}

fn fill_from_element(interval: &mut ForecastInterval, element: &WeatherElement, index: usize) {
    let Some(kind) = ElementKind::from_name(&element.element_name) else {
        return;
    };

    match element.time.get(index) {
        Some(slot) => kind.apply(interval, &slot.parameter.parameter_name),
        None => tracing::debug!(
            "Element {} has no slot {}, leaving field empty",
            element.element_name,
            index
        ),
    }
}

/// Builds the per-city payload served to callers
pub fn format_city_report(
    update_time: &str,
    location: &LocationRecord,
) -> Result<CityWeatherReport, WeatherError> {
    Ok(CityWeatherReport {
        city: location.location_name.clone(),
        update_time: update_time.to_string(),
        forecasts: format_forecasts(location)?,
    })
}
