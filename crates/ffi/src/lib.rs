//! C ABI for the fallout prediction engine
//!
//! Forecasts go in and predictions come out as JSON strings, so callers in
//! C, C++ or C# need no knowledge of the engine's types. Every fallible call
//! returns a [`FalloutErrorCode`] and records a message retrievable with
//! [`fallout_get_last_error`] on the same thread.
//!
//! The header `FalloutFFI.h` is generated at the workspace root by
//! `build.rs`.

mod error;
mod helpers;
mod predictions;
mod queries;

pub use error::{fallout_get_last_error, fallout_get_last_error_code, FalloutErrorCode};
pub use predictions::{fallout_predict_json, fallout_predict_open_meteo, fallout_string_free};
pub use queries::{fallout_factor_max_score, fallout_score_label, FalloutFactor, FalloutScoreLabel};
