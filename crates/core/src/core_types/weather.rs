//! Hourly forecast samples and their derived pressure/temperature trends
//!
//! A forecast arrives as an ordered list of hourly samples. Three trends are
//! derived from the sample's own history in that list:
//! - pressure change over the trailing 3 hours
//! - pressure change over the trailing 24 hours
//! - temperature change over the trailing 24 hours
//!
//! A trend is absent (not zero) until the series holds enough history, and
//! also absent when either endpoint lacks the underlying reading.

use crate::core_types::units::{
    Celsius, CelsiusDelta, Degrees, HectopascalDelta, Hectopascals, KilometersPerHour, Meters,
    Millimeters, Percent,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A 3-hour pressure change below this marks a likely frontal passage (hPa)
pub const FRONTAL_PASSAGE_DROP_HPA: f64 = -3.0;

/// Lookback for the short pressure tendency (samples, one per hour)
pub const SHORT_TREND_HOURS: usize = 3;

/// Lookback for the daily pressure and temperature trends
pub const DAILY_TREND_HOURS: usize = 24;

/// One forecast hour
///
/// Every measured field is optional because the upstream model may return
/// nulls for any variable. Field names follow the forecast JSON so samples
/// round-trip through serde unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyWeatherSample {
    /// Start of the forecast hour (UTC)
    pub forecast_time: DateTime<Utc>,

    /// Air temperature at 2 m
    #[serde(default)]
    pub temperature_2m: Option<Celsius>,

    /// Perceived temperature including wind chill and humidity
    #[serde(default)]
    pub apparent_temperature: Option<Celsius>,

    /// Sustained wind speed at 10 m
    #[serde(default)]
    pub wind_speed_10m: Option<KilometersPerHour>,

    /// Direction the wind blows from
    #[serde(default)]
    pub wind_direction_10m: Option<Degrees>,

    /// Peak gust at 10 m
    #[serde(default)]
    pub wind_gusts_10m: Option<KilometersPerHour>,

    /// Mean-sea-level pressure
    #[serde(default)]
    pub pressure_msl: Option<Hectopascals>,

    #[serde(default)]
    pub precipitation_probability: Option<Percent>,

    #[serde(default)]
    pub precipitation_mm: Option<Millimeters>,

    #[serde(default)]
    pub cloud_cover_total: Option<Percent>,

    #[serde(default)]
    pub cloud_cover_low: Option<Percent>,

    #[serde(default)]
    pub visibility_m: Option<Meters>,

    /// WMO weather interpretation code (display only, never scored)
    #[serde(default)]
    pub weather_code: Option<u8>,

    /// Pressure change since 3 hours earlier
    #[serde(default)]
    pub pressure_delta_3h: Option<HectopascalDelta>,

    /// Pressure change since 24 hours earlier
    #[serde(default)]
    pub pressure_delta_24h: Option<HectopascalDelta>,

    /// Temperature change since 24 hours earlier
    #[serde(default)]
    pub temperature_delta_24h: Option<CelsiusDelta>,

    /// True when the 3-hour pressure drop exceeds [`FRONTAL_PASSAGE_DROP_HPA`]
    #[serde(default)]
    pub is_frontal_passage: bool,
}

impl HourlyWeatherSample {
    /// Create a sample with no readings for the given hour.
    pub fn new(forecast_time: DateTime<Utc>) -> Self {
        Self {
            forecast_time,
            temperature_2m: None,
            apparent_temperature: None,
            wind_speed_10m: None,
            wind_direction_10m: None,
            wind_gusts_10m: None,
            pressure_msl: None,
            precipitation_probability: None,
            precipitation_mm: None,
            cloud_cover_total: None,
            cloud_cover_low: None,
            visibility_m: None,
            weather_code: None,
            pressure_delta_3h: None,
            pressure_delta_24h: None,
            temperature_delta_24h: None,
            is_frontal_passage: false,
        }
    }

    /// How eventful this hour is, used to pick one representative hour per day.
    ///
    /// `|3h pressure change| + precipitation probability / 10`, missing values
    /// counting as zero.
    pub fn significance(&self) -> f64 {
        let pressure = self.pressure_delta_3h.map_or(0.0, HectopascalDelta::magnitude);
        let precipitation = self.precipitation_probability.map_or(0.0, |p| *p);
        pressure + precipitation / 10.0
    }
}

/// Fill in the trend fields of an ordered hourly series.
///
/// Samples must be sorted ascending by time, one per hour. Existing trend
/// values are overwritten.
pub fn derive_trends(samples: &mut [HourlyWeatherSample]) {
    for i in 0..samples.len() {
        let pressure_now = samples[i].pressure_msl;
        let temperature_now = samples[i].temperature_2m;

        let pressure_delta_3h = i
            .checked_sub(SHORT_TREND_HOURS)
            .and_then(|j| pressure_change(pressure_now, samples[j].pressure_msl));
        let pressure_delta_24h = i
            .checked_sub(DAILY_TREND_HOURS)
            .and_then(|j| pressure_change(pressure_now, samples[j].pressure_msl));
        let temperature_delta_24h = i
            .checked_sub(DAILY_TREND_HOURS)
            .and_then(|j| Some((temperature_now? - samples[j].temperature_2m?).rounded()));

        let sample = &mut samples[i];
        sample.pressure_delta_3h = pressure_delta_3h;
        sample.pressure_delta_24h = pressure_delta_24h;
        sample.temperature_delta_24h = temperature_delta_24h;
        sample.is_frontal_passage =
            pressure_delta_3h.is_some_and(|d| *d < FRONTAL_PASSAGE_DROP_HPA);
    }
}

fn pressure_change(
    now: Option<Hectopascals>,
    earlier: Option<Hectopascals>,
) -> Option<HectopascalDelta> {
    Some((now? - earlier?).rounded())
}
