//! Open-Meteo forecast shaping
//!
//! Turns an Open-Meteo `/v1/forecast` hourly response into ordered
//! [`HourlyWeatherSample`]s with trends derived. Fetching is left to the
//! caller; this module only describes the request and parses the reply.
//!
//! The response is column-oriented: `hourly.time` holds the timestamps and
//! each requested variable is a parallel array that may contain nulls.

use crate::core_types::geo::Coordinate;
use crate::core_types::units::{
    Celsius, Degrees, Hectopascals, KilometersPerHour, Meters, Millimeters, Percent,
};
use crate::core_types::weather::{derive_trends, HourlyWeatherSample};
use crate::error::{FalloutError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Longest horizon the forecast API serves
pub const MAX_FORECAST_DAYS: u8 = 16;

/// Hourly variables the scorers and displays consume
pub const HOURLY_VARIABLES: [&str; 12] = [
    "temperature_2m",
    "apparent_temperature",
    "precipitation_probability",
    "precipitation",
    "weather_code",
    "pressure_msl",
    "cloud_cover",
    "cloud_cover_low",
    "visibility",
    "wind_speed_10m",
    "wind_direction_10m",
    "wind_gusts_10m",
];

/// Query parameters for a forecast request.
///
/// `days` is capped at [`MAX_FORECAST_DAYS`]; times come back in UTC.
pub fn forecast_query(coord: Coordinate, days: u8) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", coord.lat().to_string()),
        ("longitude", coord.lon().to_string()),
        ("hourly", HOURLY_VARIABLES.join(",")),
        ("forecast_days", days.min(MAX_FORECAST_DAYS).to_string()),
        ("timezone", "UTC".to_string()),
    ]
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub hourly: HourlyColumns,
}

/// Column arrays of the `hourly` block; absent columns are empty
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HourlyColumns {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub apparent_temperature: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub weather_code: Vec<Option<u8>>,
    pub pressure_msl: Vec<Option<f64>>,
    pub cloud_cover: Vec<Option<f64>>,
    pub cloud_cover_low: Vec<Option<f64>>,
    pub visibility: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub wind_direction_10m: Vec<Option<f64>>,
    pub wind_gusts_10m: Vec<Option<f64>>,
}

/// Parse a raw response body into derived samples.
pub fn parse_forecast(body: &str) -> Result<Vec<HourlyWeatherSample>> {
    let response: ForecastResponse = serde_json::from_str(body)?;
    response.into_samples()
}

impl ForecastResponse {
    /// Convert the column arrays into ordered samples with trends derived.
    ///
    /// Fails if a timestamp does not parse or the times are not strictly
    /// ascending. Short or missing variable columns only leave fields empty.
    pub fn into_samples(self) -> Result<Vec<HourlyWeatherSample>> {
        let columns = self.hourly;
        columns.warn_short_columns();

        let mut samples = Vec::with_capacity(columns.time.len());
        for (i, raw_time) in columns.time.iter().enumerate() {
            let forecast_time = parse_hour(raw_time)?;
            if let Some(previous) = samples.last().map(|s: &HourlyWeatherSample| s.forecast_time) {
                if forecast_time <= previous {
                    return Err(FalloutError::MalformedForecast(format!(
                        "hourly times not ascending at index {i}: {raw_time}"
                    )));
                }
            }

            samples.push(HourlyWeatherSample {
                temperature_2m: cell(&columns.temperature_2m, i).map(Celsius::new),
                apparent_temperature: cell(&columns.apparent_temperature, i).map(Celsius::new),
                wind_speed_10m: cell(&columns.wind_speed_10m, i).map(KilometersPerHour::new),
                wind_direction_10m: cell(&columns.wind_direction_10m, i).map(Degrees::new),
                wind_gusts_10m: cell(&columns.wind_gusts_10m, i).map(KilometersPerHour::new),
                pressure_msl: cell(&columns.pressure_msl, i).map(Hectopascals::new),
                precipitation_probability: cell(&columns.precipitation_probability, i)
                    .map(Percent::new),
                precipitation_mm: cell(&columns.precipitation, i).map(Millimeters::new),
                cloud_cover_total: cell(&columns.cloud_cover, i).map(Percent::new),
                cloud_cover_low: cell(&columns.cloud_cover_low, i).map(Percent::new),
                visibility_m: cell(&columns.visibility, i).map(Meters::new),
                weather_code: cell(&columns.weather_code, i),
                ..HourlyWeatherSample::new(forecast_time)
            });
        }

        derive_trends(&mut samples);
        debug!(
            hours = samples.len(),
            latitude = self.latitude,
            longitude = self.longitude,
            "parsed forecast"
        );
        Ok(samples)
    }
}

impl HourlyColumns {
    fn warn_short_columns(&self) {
        let expected = self.time.len();
        let lengths = [
            ("temperature_2m", self.temperature_2m.len()),
            ("apparent_temperature", self.apparent_temperature.len()),
            ("precipitation_probability", self.precipitation_probability.len()),
            ("precipitation", self.precipitation.len()),
            ("weather_code", self.weather_code.len()),
            ("pressure_msl", self.pressure_msl.len()),
            ("cloud_cover", self.cloud_cover.len()),
            ("cloud_cover_low", self.cloud_cover_low.len()),
            ("visibility", self.visibility.len()),
            ("wind_speed_10m", self.wind_speed_10m.len()),
            ("wind_direction_10m", self.wind_direction_10m.len()),
            ("wind_gusts_10m", self.wind_gusts_10m.len()),
        ];
        for (name, len) in lengths {
            if len < expected {
                warn!(variable = name, len, expected, "forecast column shorter than time axis");
            }
        }
    }
}

#[inline]
fn cell<T: Copy>(column: &[Option<T>], i: usize) -> Option<T> {
    column.get(i).copied().flatten()
}

/// Parse an hourly timestamp as UTC.
///
/// Accepts the API's `YYYY-MM-DDTHH:MM`, the same with seconds, and full
/// RFC 3339 with an offset.
pub fn parse_hour(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| FalloutError::MalformedForecast(format!("unparseable time {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Timelike};

    const BODY: &str = r#"{
        "latitude": 29.56,
        "longitude": -94.39,
        "hourly": {
            "time": ["2025-04-20T00:00", "2025-04-20T01:00", "2025-04-20T02:00", "2025-04-20T03:00"],
            "temperature_2m": [24.1, 23.8, null, 22.0],
            "pressure_msl": [1011.0, 1010.2, 1009.1, 1007.6],
            "precipitation_probability": [10, 20, 55, 85],
            "wind_speed_10m": [12.0, 14.5],
            "weather_code": [1, 2, 61, 95]
        }
    }"#;

    #[test]
    fn test_parses_columns_and_derives_trends() {
        let samples = parse_forecast(BODY).unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(
            samples[0].forecast_time,
            Utc.with_ymd_and_hms(2025, 4, 20, 0, 0, 0).unwrap()
        );
        assert!(samples[2].temperature_2m.is_none());
        assert_eq!(samples[3].precipitation_probability, Some(Percent::new(85.0)));
        assert_eq!(samples[3].weather_code, Some(95));

        // Short wind column leaves the tail empty
        assert!(samples[1].wind_speed_10m.is_some());
        assert!(samples[2].wind_speed_10m.is_none());
        // Missing column entirely
        assert!(samples.iter().all(|s| s.visibility_m.is_none()));

        let delta = samples[3].pressure_delta_3h.unwrap();
        assert_abs_diff_eq!(*delta, -3.4, epsilon = 1e-9);
        assert!(samples[3].is_frontal_passage);
    }

    #[test]
    fn test_time_formats() {
        assert_eq!(parse_hour("2025-09-01T06:00").unwrap().hour(), 6);
        assert_eq!(parse_hour("2025-09-01T06:00:00").unwrap().hour(), 6);
        assert_eq!(parse_hour("2025-09-01T06:00:00Z").unwrap().hour(), 6);
        assert_eq!(parse_hour("2025-09-01T06:00:00-05:00").unwrap().hour(), 11);
        assert!(matches!(
            parse_hour("yesterday"),
            Err(FalloutError::MalformedForecast(_))
        ));
    }

    #[test]
    fn test_rejects_unordered_times() {
        let body = r#"{"hourly":{"time":["2025-04-20T01:00","2025-04-20T00:00"]}}"#;
        assert!(matches!(
            parse_forecast(body),
            Err(FalloutError::MalformedForecast(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        assert!(matches!(parse_forecast("{not json"), Err(FalloutError::Json(_))));
    }

    #[test]
    fn test_missing_hourly_block_is_empty() {
        assert!(parse_forecast("{}").unwrap().is_empty());
    }

    #[test]
    fn test_query_caps_days() {
        let coord = Coordinate::new(30.2528, -88.1089).unwrap();
        let query = forecast_query(coord, 30);
        assert!(query.contains(&("forecast_days", "16".to_string())));
        assert!(query.contains(&("timezone", "UTC".to_string())));
        let hourly = &query.iter().find(|(k, _)| *k == "hourly").unwrap().1;
        assert_eq!(hourly.split(',').count(), HOURLY_VARIABLES.len());
    }
}
