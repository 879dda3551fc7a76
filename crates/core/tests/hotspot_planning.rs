//! Forecast JSON through to hotspot rankings and the trip planner
//!
//! Run tests with: cargo test --test hotspot_planning

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use fallout_core::hotspots::FALLOUT_HOTSPOTS;
use fallout_core::open_meteo::parse_forecast;
use fallout_core::planner::planning_dates;
use fallout_core::{score_hotspots, top_predictions, Hotspot, HourlyWeatherSample, TripPlan};
use serde_json::json;

/// Open-Meteo style body for 72 hours from 2025-04-20. `front_day` selects
/// which day (0-2) gets a pressure crash and heavy rain, if any.
fn forecast_body(front_day: Option<i64>) -> String {
    let start = Utc.with_ymd_and_hms(2025, 4, 20, 0, 0, 0).unwrap();
    let mut time = Vec::new();
    let mut pressure = Vec::new();
    let mut rain = Vec::new();

    for h in 0..72 {
        time.push((start + Duration::hours(h)).format("%Y-%m-%dT%H:%M").to_string());
        let stormy = front_day.is_some_and(|day| h >= day * 24 + 6 && h < day * 24 + 18);
        pressure.push(if stormy { 1004.0 - f64::from((h % 24) as i32 - 6) } else { 1016.0 });
        rain.push(if stormy { 90 } else { 5 });
    }

    json!({
        "latitude": 0.0,
        "longitude": 0.0,
        "hourly": {
            "time": time,
            "pressure_msl": pressure,
            "precipitation_probability": rain,
            "temperature_2m": vec![json!(null); 72],
        }
    })
    .to_string()
}

fn forecasts() -> Vec<(Hotspot, Vec<HourlyWeatherSample>)> {
    FALLOUT_HOTSPOTS
        .iter()
        .enumerate()
        .map(|(i, hotspot)| {
            // High Island sites get the front on day 1, Magee Marsh on day 2,
            // everyone else stays quiet.
            let front_day = match i {
                0 | 1 => Some(1),
                6 => Some(2),
                _ => None,
            };
            let samples = parse_forecast(&forecast_body(front_day)).unwrap();
            (hotspot.clone(), samples)
        })
        .collect()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
}

#[test]
fn test_parsed_forecast_feeds_every_hotspot() {
    let now = Utc.with_ymd_and_hms(2025, 4, 20, 0, 0, 0).unwrap();
    let sites = score_hotspots(forecasts(), now);

    assert_eq!(sites.len(), FALLOUT_HOTSPOTS.len());
    for (site, hotspot) in sites.iter().zip(FALLOUT_HOTSPOTS.iter()) {
        assert_eq!(site.hotspot.name, hotspot.name);
        assert_eq!(site.predictions.len(), 3);
    }

    let high_island = &sites[0].predictions[1];
    assert!(high_island.overall_score > 0);
    assert!(high_island.factors.front.description.contains("Frontal passage"));
    assert_eq!(sites[5].predictions[1].overall_score, 0);
}

#[test]
fn test_top_sites_for_front_day() {
    let now = Utc.with_ymd_and_hms(2025, 4, 20, 0, 0, 0).unwrap();
    let sites = score_hotspots(forecasts(), now);

    let top = top_predictions(&sites, day(21), 3);
    assert_eq!(top.len(), 3);
    // Both High Island sites share identical weather; input order breaks the tie.
    assert_eq!(top[0].hotspot.name, FALLOUT_HOTSPOTS[0].name);
    assert_eq!(top[1].hotspot.name, FALLOUT_HOTSPOTS[1].name);
    assert!(top[0].prediction.overall_score >= top[2].prediction.overall_score);
    assert!(top.iter().all(|r| r.prediction.prediction_date == day(21)));

    let magee_day = top_predictions(&sites, day(22), 1);
    assert_eq!(magee_day[0].hotspot.name, "Magee Marsh");
}

#[test]
fn test_trip_plan_over_parsed_forecasts() {
    let now = Utc.with_ymd_and_hms(2025, 4, 20, 0, 0, 0).unwrap();
    let sites = score_hotspots(forecasts(), now);
    let plan = TripPlan::build(&sites, planning_dates(day(20), 5));

    assert_eq!(plan.rows.len(), FALLOUT_HOTSPOTS.len());
    // Forecast covers three of the five planning days.
    assert!(plan.rows.iter().all(|row| row.cells[3].is_none() && row.cells[4].is_none()));
    assert!(plan.best_by_date[&day(24)].is_none());

    let best = plan.best_overall.as_ref().unwrap();
    assert_eq!(best.hotspot, FALLOUT_HOTSPOTS[0].name);
    assert_eq!(best.date, day(21));

    assert_eq!(
        plan.best_by_date[&day(22)].as_ref().unwrap().hotspot,
        "Magee Marsh"
    );
    assert!(plan.best_by_hotspot["Point Pelee"].is_none());

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["rows"][0]["hotspot"]["name"], FALLOUT_HOTSPOTS[0].name.as_ref());
    assert!(json["rows"][0]["cells"][4].is_null());
}
