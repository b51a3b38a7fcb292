//! Core data models for the Taiwan weather dashboard
//!
//! This module contains the wire types of the forecast API and the set of
//! supported locations.

pub mod forecast;
pub mod location;

pub use forecast::{ForecastClient, ForecastError, ForecastSource, API_WEATHER_URL};
pub use location::{all_locations, get_location_by_id, Location};

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::advice::parse_leading_int;

/// A numeric reading kept exactly as the API sent it
///
/// The API is loose about types: temperatures and rain chances arrive as
/// JSON strings (sometimes with a unit suffix) or as plain numbers. The raw
/// text is shown verbatim in the UI; numeric use goes through [`Measure::value`].
/// A `null` reading becomes empty text, which `value` rejects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMeasure")]
pub struct Measure(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeasure {
    Text(String),
    Number(serde_json::Number),
    Null,
}

impl From<RawMeasure> for Measure {
    fn from(raw: RawMeasure) -> Self {
        match raw {
            RawMeasure::Text(text) => Measure(text),
            RawMeasure::Number(number) => Measure(number.to_string()),
            RawMeasure::Null => Measure(String::new()),
        }
    }
}

impl Measure {
    pub fn new(raw: impl Into<String>) -> Self {
        Measure(raw.into())
    }

    /// The reading as received
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer value of the reading, truncating any non-numeric suffix
    ///
    /// # Arguments
    /// * `field` - Name of the field, used in the validation error
    ///
    /// # Returns
    /// * `Ok(i64)` - The leading integer
    /// * `Err(ForecastError::InvalidNumber)` - If the reading has no numeric prefix
    pub fn value(&self, field: &'static str) -> Result<i64, ForecastError> {
        parse_leading_int(&self.0).ok_or_else(|| ForecastError::InvalidNumber {
            field,
            value: self.0.clone(),
        })
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One forecast window
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// Start of the window, in local wall-clock time
    #[serde(deserialize_with = "deserialize_start_time")]
    pub start_time: NaiveDateTime,
    /// Free-text condition, e.g. "晴時多雲"
    #[serde(default)]
    pub weather: Option<String>,
    /// Chance of rain in percent
    pub rain: Measure,
    /// Highest temperature in Celsius
    pub max_temp: Measure,
    /// Lowest temperature in Celsius
    pub min_temp: Measure,
}

/// Payload carried by a successful response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastData {
    /// Forecast windows in chronological order; the first one is "now"
    pub forecasts: Vec<ForecastPeriod>,
}

/// Top-level API response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ForecastData>,
}

impl ForecastResponse {
    /// Parses a response body
    pub fn from_json(body: &str) -> Result<Self, ForecastError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Unwraps the payload of a response that reports success
    ///
    /// # Returns
    /// * `Ok(ForecastData)` - When `success` is true and data is present
    /// * `Err(ForecastError::ApiFailure)` - When the API reports failure
    /// * `Err(ForecastError::MissingField)` - When `success` is true but `data` is absent
    pub fn into_data(self) -> Result<ForecastData, ForecastError> {
        if !self.success {
            return Err(ForecastError::ApiFailure);
        }
        self.data
            .ok_or_else(|| ForecastError::MissingField("data".to_string()))
    }
}

/// Parses a forecast timestamp into local wall-clock time
///
/// Accepts "2024-07-15 09:00:00", "2024-07-15T09:00:00", "2024-07-15T09:00"
/// and RFC 3339 timestamps with an offset, which are converted to the local
/// timezone.
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn deserialize_start_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_start_time(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid startTime: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    const SAMPLE: &str = r#"{
        "success": true,
        "data": {
            "city": "高雄市",
            "forecasts": [
                {
                    "startTime": "2024-07-15 06:00:00",
                    "endTime": "2024-07-15 18:00:00",
                    "weather": "晴時多雲",
                    "rain": "10",
                    "maxTemp": "30",
                    "minTemp": "24"
                },
                {
                    "startTime": "2024-07-15 18:00:00",
                    "weather": "多雲",
                    "rain": 20,
                    "maxTemp": 29.5,
                    "minTemp": 25
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_sample_response() {
        let response = ForecastResponse::from_json(SAMPLE).expect("Failed to parse sample");
        assert!(response.success);

        let data = response.into_data().expect("Should contain data");
        assert_eq!(data.forecasts.len(), 2);

        let first = &data.forecasts[0];
        assert_eq!(first.weather.as_deref(), Some("晴時多雲"));
        assert_eq!(first.rain.as_str(), "10");
        assert_eq!(first.start_time.hour(), 6);
        assert_eq!(
            first.start_time.date(),
            NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
        );
    }

    #[test]
    fn test_numeric_readings_keep_their_text() {
        let data = ForecastResponse::from_json(SAMPLE)
            .unwrap()
            .into_data()
            .unwrap();
        let second = &data.forecasts[1];
        assert_eq!(second.rain.as_str(), "20");
        assert_eq!(second.max_temp.as_str(), "29.5");
        assert_eq!(second.max_temp.value("maxTemp").unwrap(), 29);
    }

    #[test]
    fn test_failure_response_has_no_data() {
        let response = ForecastResponse::from_json(r#"{"success": false}"#).unwrap();
        assert!(matches!(response.into_data(), Err(ForecastError::ApiFailure)));
    }

    #[test]
    fn test_success_without_data_is_missing_field() {
        let response = ForecastResponse::from_json(r#"{"success": true}"#).unwrap();
        match response.into_data() {
            Err(ForecastError::MissingField(field)) => assert_eq!(field, "data"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = ForecastResponse::from_json("{ not json }");
        assert!(matches!(result, Err(ForecastError::ParseError(_))));
    }

    #[test]
    fn test_invalid_start_time_is_parse_error() {
        let body = r#"{"success": true, "data": {"forecasts": [
            {"startTime": "tomorrow", "weather": "晴", "rain": "0", "maxTemp": "25", "minTemp": "20"}
        ]}}"#;
        assert!(matches!(
            ForecastResponse::from_json(body),
            Err(ForecastError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_weather_is_allowed() {
        let body = r#"{"success": true, "data": {"forecasts": [
            {"startTime": "2024-07-15T12:00", "rain": "0", "maxTemp": "25", "minTemp": "20"}
        ]}}"#;
        let data = ForecastResponse::from_json(body).unwrap().into_data().unwrap();
        assert!(data.forecasts[0].weather.is_none());
    }

    #[test]
    fn test_null_reading_is_empty_and_not_numeric() {
        let body = r#"{"success": true, "data": {"forecasts": [
            {"startTime": "2024-07-15 09:00:00", "weather": "晴", "rain": null, "maxTemp": "30", "minTemp": "24"}
        ]}}"#;
        let data = ForecastResponse::from_json(body).unwrap().into_data().unwrap();
        let rain = &data.forecasts[0].rain;

        assert_eq!(rain.as_str(), "");
        assert!(matches!(
            rain.value("rain"),
            Err(ForecastError::InvalidNumber { field: "rain", .. })
        ));
    }

    #[test]
    fn test_parse_start_time_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(parse_start_time("2024-07-15 09:00:00"), Some(expected));
        assert_eq!(parse_start_time("2024-07-15T09:00:00"), Some(expected));
        assert_eq!(parse_start_time("2024-07-15T09:00"), Some(expected));
        assert_eq!(parse_start_time("2024-07-15 09:00"), Some(expected));
        assert!(parse_start_time("2024-07-15T09:00:00+08:00").is_some());
        assert!(parse_start_time("not a time").is_none());
    }

    #[test]
    fn test_measure_value_rejects_non_numeric() {
        let measure = Measure::new("N/A");
        match measure.value("rain") {
            Err(ForecastError::InvalidNumber { field, value }) => {
                assert_eq!(field, "rain");
                assert_eq!(value, "N/A");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_measure_value_truncates_suffix() {
        assert_eq!(Measure::new("45%").value("rain").unwrap(), 45);
        assert_eq!(Measure::new(" 28°C").value("maxTemp").unwrap(), 28);
    }
}
