//! Core types and utilities

pub mod geo;
pub mod units;
pub mod weather;

pub use geo::Coordinate;
pub use units::*;
pub use weather::{derive_trends, HourlyWeatherSample};
