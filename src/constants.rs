/// User agent string for HTTP requests
pub const USER_AGENT: &str = "taiwan-weather-proxy/0.1.0";

/// Central Weather Administration open data API base URL
pub const CWA_API_BASE: &str = "https://opendata.cwa.gov.tw/api";

/// 36-hour forecast dataset for every county and city
pub const FORECAST_DATASET: &str = "F-C0032-001";

/// Administrative name served by the legacy `/api/weather/kaohsiung` route
pub const KAOHSIUNG: &str = "高雄市";

/// Regions queried by the all-cities endpoint, in response order.
pub const CITY_REGISTRY: [&str; 22] = [
    "宜蘭縣", "花蓮縣", "臺東縣", "澎湖縣", "金門縣", "連江縣",
    "臺北市", "新北市", "桃園市", "臺中市", "臺南市", "高雄市",
    "基隆市", "新竹縣", "新竹市", "苗栗縣", "彰化縣", "南投縣",
    "雲林縣", "嘉義縣", "嘉義市", "屏東縣",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_entries_are_unique() {
        let unique: HashSet<_> = CITY_REGISTRY.iter().collect();
        assert_eq!(unique.len(), CITY_REGISTRY.len());
    }

    #[test]
    fn test_registry_contains_alias_target() {
        assert!(CITY_REGISTRY.contains(&KAOHSIUNG));
    }
}
