use crate::error::{with_last_error_mut, DefaultFalloutError, FalloutErrorCode, FalloutFfiError};
use chrono::{DateTime, Utc};
use fallout_core::Coordinate;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Set the thread-local error message and code.
/// Accepts any type implementing `FalloutFfiError` trait.
pub(crate) fn set_last_error(error: &impl FalloutFfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FalloutFfiError) -> FalloutErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = FalloutErrorCode::Ok;
    });
}

/// Run a fallible FFI body, recording the error on failure and clearing it
/// on success.
pub(crate) fn handle_ffi_result_error<F, E>(f: F) -> FalloutErrorCode
where
    F: FnOnce() -> Result<(), E>,
    E: FalloutFfiError,
{
    match f() {
        Ok(()) => {
            clear_last_error();
            FalloutErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow a C string argument as UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a null-terminated string that stays valid
/// for the returned lifetime.
pub(crate) unsafe fn str_from_ptr<'a>(
    ptr: *const c_char,
    param_name: &str,
) -> Result<&'a str, DefaultFalloutError> {
    if ptr.is_null() {
        return Err(DefaultFalloutError::null_pointer(param_name));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| DefaultFalloutError::invalid_utf8(param_name))
}

/// Validate a coordinate pair coming from C.
pub(crate) fn coordinate(lat: f64, lon: f64) -> Result<Coordinate, DefaultFalloutError> {
    Ok(Coordinate::new(lat, lon)?)
}

/// Unix seconds to a UTC timestamp.
pub(crate) fn timestamp(unix_secs: i64) -> Result<DateTime<Utc>, DefaultFalloutError> {
    DateTime::from_timestamp(unix_secs, 0).ok_or_else(|| {
        DefaultFalloutError::invalid_parameter(format!(
            "Timestamp {unix_secs} is outside the representable range"
        ))
    })
}

/// Hand an owned string to C. Release it with `fallout_string_free`.
pub(crate) fn into_c_string(text: String) -> Result<*mut c_char, DefaultFalloutError> {
    CString::new(text)
        .map(CString::into_raw)
        .map_err(|_| DefaultFalloutError::invalid_parameter("Output contains a NUL byte".into()))
}
