use fallout_core::open_meteo::parse_forecast;
use fallout_core::{derive_trends, generate_predictions, FalloutError, HourlyWeatherSample};
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use crate::error::{DefaultFalloutError, FalloutErrorCode};
use crate::helpers::{
    coordinate, handle_ffi_result_error, into_c_string, str_from_ptr, timestamp, track_error,
};

/// Parse and validate a JSON array of hourly samples, recomputing trends.
fn samples_from_json(json: &str) -> Result<Vec<HourlyWeatherSample>, DefaultFalloutError> {
    let mut samples: Vec<HourlyWeatherSample> =
        serde_json::from_str(json).map_err(FalloutError::from)?;
    if let Some(pair) = samples
        .windows(2)
        .find(|pair| pair[1].forecast_time <= pair[0].forecast_time)
    {
        return Err(FalloutError::MalformedForecast(format!(
            "samples not ascending at {}",
            pair[1].forecast_time
        ))
        .into());
    }
    derive_trends(&mut samples);
    Ok(samples)
}

/// Shared body of the two predict entry points.
///
/// # Safety
/// Same contract as [`fallout_predict_json`].
unsafe fn predict_into(
    lat: f64,
    lon: f64,
    now_unix_secs: i64,
    input: *const c_char,
    input_name: &str,
    out_json: *mut *mut c_char,
    load: fn(&str) -> Result<Vec<HourlyWeatherSample>, DefaultFalloutError>,
) -> FalloutErrorCode {
    if out_json.is_null() {
        return track_error(&DefaultFalloutError::null_pointer("out_json"));
    }
    unsafe {
        *out_json = ptr::null_mut();
    }

    handle_ffi_result_error(|| {
        let coord = coordinate(lat, lon)?;
        let now = timestamp(now_unix_secs)?;
        let text = unsafe { str_from_ptr(input, input_name)? };
        let samples = load(text)?;

        let predictions = generate_predictions(coord, &samples, now);
        let json = serde_json::to_string(&predictions).map_err(FalloutError::from)?;
        let raw = into_c_string(json)?;
        unsafe {
            *out_json = raw;
        }
        Ok::<(), DefaultFalloutError>(())
    })
}

#[no_mangle]
/// Score a JSON array of hourly samples for one location.
///
/// - `lat`/`lon` are decimal degrees.
/// - `now_unix_secs` is the reference time used for the confidence tag.
/// - `samples_json` is a JSON array of samples in ascending time order. Trend
///   fields in the input are ignored and recomputed.
/// - On success `out_json` receives an owned JSON array of daily
///   predictions; free it with `fallout_string_free`. On failure it is null.
///
/// Returns
/// - `FalloutErrorCode::Ok` (0) on success
/// - `FalloutErrorCode::NullPointer` if `samples_json` or `out_json` is null
/// - `FalloutErrorCode::InvalidUtf8` if `samples_json` is not UTF-8
/// - `FalloutErrorCode::InvalidCoordinate` if `lat`/`lon` are out of range
/// - `FalloutErrorCode::MalformedInput` if the samples cannot be parsed
/// - `FalloutErrorCode::InvalidParameter` if `now_unix_secs` is out of range
///
/// # Safety
///
/// - `samples_json` must be null or a valid null-terminated C string.
/// - `out_json` must be null or a valid pointer to a `char*` that this function will write to.
///
/// # Example Usage (C)
/// ```c
/// char* json = NULL;
/// if (fallout_predict_json(29.5647, -94.3912, time(NULL), samples, &json) == Ok) {
///     puts(json);
///     fallout_string_free(json);
/// }
/// ```
pub unsafe extern "C" fn fallout_predict_json(
    lat: f64,
    lon: f64,
    now_unix_secs: i64,
    samples_json: *const c_char,
    out_json: *mut *mut c_char,
) -> FalloutErrorCode {
    unsafe {
        predict_into(
            lat,
            lon,
            now_unix_secs,
            samples_json,
            "samples_json",
            out_json,
            samples_from_json,
        )
    }
}

#[no_mangle]
/// Score a raw Open-Meteo forecast response for one location.
///
/// Identical to `fallout_predict_json` except that `response_json` is the
/// body of an Open-Meteo `/v1/forecast` hourly request.
///
/// # Safety
///
/// - `response_json` must be null or a valid null-terminated C string.
/// - `out_json` must be null or a valid pointer to a `char*` that this function will write to.
pub unsafe extern "C" fn fallout_predict_open_meteo(
    lat: f64,
    lon: f64,
    now_unix_secs: i64,
    response_json: *const c_char,
    out_json: *mut *mut c_char,
) -> FalloutErrorCode {
    unsafe {
        predict_into(
            lat,
            lon,
            now_unix_secs,
            response_json,
            "response_json",
            out_json,
            |body| Ok(parse_forecast(body)?),
        )
    }
}

#[no_mangle]
/// Free a string returned by this library. Null is ignored.
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned through an `out_json`
/// parameter, and must not be freed twice.
pub unsafe extern "C" fn fallout_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}
