use fallout_core::FalloutError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// This trait provides a unified way to handle errors across the FFI boundary,
/// allowing both simple error codes and custom error messages.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait FalloutFfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> FalloutErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `FalloutFfiError` for common FFI error scenarios.
///
/// Wraps a `FalloutErrorCode` with a message and provides constructors for
/// each failure (except Ok, which represents success).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFalloutError {
    code: FalloutErrorCode,
    msg: String,
}

impl DefaultFalloutError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"samples_json"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: FalloutErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a C string that is not valid UTF-8.
    pub fn invalid_utf8(param_name: &str) -> Self {
        Self {
            code: FalloutErrorCode::InvalidUtf8,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// Create error for invalid parameter.
    ///
    /// # Arguments
    /// * `message` - Description of the error
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: FalloutErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl From<FalloutError> for DefaultFalloutError {
    fn from(error: FalloutError) -> Self {
        let code = match error {
            FalloutError::InvalidLatitude(_) | FalloutError::InvalidLongitude(_) => {
                FalloutErrorCode::InvalidCoordinate
            }
            FalloutError::MalformedForecast(_) | FalloutError::Json(_) => {
                FalloutErrorCode::MalformedInput
            }
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl FalloutFfiError for DefaultFalloutError {
    fn code(&self) -> FalloutErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by fallout functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FalloutErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// A C string argument is not valid UTF-8.
    InvalidUtf8 = 2,

    /// Latitude or longitude is out of range or not finite.
    InvalidCoordinate = 3,

    /// Forecast input is not valid JSON or has the wrong shape.
    MalformedInput = 4,

    /// Invalid parameter passed to function.
    InvalidParameter = 5,
}

impl std::fmt::Display for FalloutErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FalloutErrorCode::Ok => write!(f, "Operation completed successfully"),
            FalloutErrorCode::NullPointer => {
                write!(f, "Null pointer passed where non-null required")
            }
            FalloutErrorCode::InvalidUtf8 => write!(f, "String argument is not valid UTF-8"),
            FalloutErrorCode::InvalidCoordinate => write!(f, "Invalid coordinate"),
            FalloutErrorCode::MalformedInput => write!(f, "Malformed forecast input"),
            FalloutErrorCode::InvalidParameter => write!(f, "Invalid parameter passed to function"),
        }
    }
}

impl From<DefaultFalloutError> for FalloutErrorCode {
    fn from(error: DefaultFalloutError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// Allows callers to retrieve diagnostic information after a failed call.
    static LAST_ERROR: RefCell<(Option<CString>, FalloutErrorCode)> = const { RefCell::new((None, FalloutErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, FalloutErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, FalloutErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call succeeded or the message cannot be converted to a C string.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage), so this is thread-safe.
/// Each thread has its own independent error state.
///
/// # Lifetime
/// The returned pointer is valid until:
/// - The next FFI call on this thread that sets or clears the error
/// - The thread terminates
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// char* json = nullptr;
/// FalloutErrorCode err = fallout_predict_json(29.56, -94.39, now, samples, &json);
/// if (err != FalloutErrorCode::Ok) {
///     const char* error = fallout_get_last_error();
///     if (error) {
///         printf("Prediction failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn fallout_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `FalloutErrorCode::Ok` (0) if the last call succeeded
/// - The specific error code from the last failed operation
///
/// # Thread Safety
/// Error codes are stored per-thread (thread-local storage), so this is thread-safe.
#[no_mangle]
pub extern "C" fn fallout_get_last_error_code() -> FalloutErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
