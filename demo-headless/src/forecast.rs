//! Forecast files on disk

use fallout_core::hotspots::FALLOUT_HOTSPOTS;
use fallout_core::open_meteo::parse_forecast;
use fallout_core::{FalloutError, Hotspot, HourlyWeatherSample};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {source}")]
    Forecast {
        path: PathBuf,
        #[source]
        source: FalloutError,
    },

    #[error("No hotspot forecasts found in {0}")]
    NoForecasts(PathBuf),

    #[error(transparent)]
    Engine(#[from] FalloutError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Read and parse one Open-Meteo response.
pub fn load_forecast(path: &Path) -> Result<Vec<HourlyWeatherSample>, CliError> {
    let body = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_forecast(&body).map_err(|source| CliError::Forecast {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `<dir>/<slug>.json` for every catalog hotspot.
///
/// Missing files are skipped with a warning; any other read or parse
/// failure aborts. Fails when no hotspot has a forecast.
pub fn load_hotspot_forecasts(
    dir: &Path,
) -> Result<Vec<(Hotspot, Vec<HourlyWeatherSample>)>, CliError> {
    let mut forecasts = Vec::new();

    for hotspot in &FALLOUT_HOTSPOTS {
        let path = dir.join(format!("{}.json", hotspot.slug()));
        match load_forecast(&path) {
            Ok(samples) => {
                debug!(hotspot = %hotspot.name, hours = samples.len(), "loaded forecast");
                forecasts.push((hotspot.clone(), samples));
            }
            Err(CliError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                warn!(hotspot = %hotspot.name, path = %path.display(), "no forecast file, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    if forecasts.is_empty() {
        return Err(CliError::NoForecasts(dir.to_path_buf()));
    }
    Ok(forecasts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const BODY: &str = r#"{"hourly":{"time":["2025-04-20T00:00","2025-04-20T01:00"],"pressure_msl":[1012.0,1011.0]}}"#;

    #[test]
    fn test_missing_hotspot_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cape-may-point.json"), BODY).unwrap();

        let forecasts = load_hotspot_forecasts(dir.path()).unwrap();
        assert_eq!(forecasts.len(), 1);
        assert_eq!(forecasts[0].0.name, "Cape May Point");
        assert_eq!(forecasts[0].1.len(), 2);
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_hotspot_forecasts(dir.path()),
            Err(CliError::NoForecasts(_))
        ));
    }

    #[test]
    fn test_bad_forecast_aborts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("magee-marsh.json"), "{nope").unwrap();

        let err = load_hotspot_forecasts(dir.path()).unwrap_err();
        assert!(matches!(err, CliError::Forecast { .. }));
        assert!(err.to_string().contains("magee-marsh.json"));
    }

    #[test]
    fn test_missing_single_forecast_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_forecast(&path).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
