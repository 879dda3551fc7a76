//! Geographic migration corridors
//!
//! Corridors are approximate lat/lon boxes around the funnels where migrants
//! concentrate. Membership only feeds the corridor × season score multiplier.

use crate::core_types::geo::Coordinate;
use crate::season::Season;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corridor {
    GulfCoast,
    Atlantic,
    GreatLakes,
}

/// Axis-aligned lat/lon rectangle, inclusive on all four edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.lat_min..=self.lat_max).contains(&coord.lat())
            && (self.lon_min..=self.lon_max).contains(&coord.lon())
    }
}

const GULF_COAST_BOX: BoundingBox = BoundingBox {
    lat_min: 25.0,
    lat_max: 31.0,
    lon_min: -98.0,
    lon_max: -80.0,
};

/// Corridors in lookup order. Atlantic and Great Lakes overlap around
/// Pennsylvania/New York; the earlier entry wins.
pub const CORRIDORS: [(Corridor, BoundingBox); 3] = [
    (Corridor::GulfCoast, GULF_COAST_BOX),
    (
        Corridor::Atlantic,
        BoundingBox {
            lat_min: 35.0,
            lat_max: 45.0,
            lon_min: -77.0,
            lon_max: -70.0,
        },
    ),
    (
        Corridor::GreatLakes,
        BoundingBox {
            lat_min: 41.0,
            lat_max: 47.0,
            lon_min: -92.0,
            lon_max: -76.0,
        },
    ),
];

/// First corridor whose box contains the point, if any.
pub fn classify_corridor(coord: Coordinate) -> Option<Corridor> {
    CORRIDORS
        .iter()
        .find(|(_, bounds)| bounds.contains(coord))
        .map(|(corridor, _)| *corridor)
}

/// Coarse "near the coast" heuristic.
///
/// True inside the Gulf Coast box, anywhere west of 117°W (Pacific-facing),
/// or south of 45°N and east of 77°W (Atlantic-facing). This is a band test
/// over North America, not a coastline lookup: inland points in those bands
/// count as coastal.
pub fn is_coastal(coord: Coordinate) -> bool {
    GULF_COAST_BOX.contains(coord)
        || coord.lon() <= -117.0
        || (coord.lat() <= 45.0 && coord.lon() >= -77.0)
}

impl Corridor {
    /// Score multiplier for this corridor in the given season.
    ///
    /// Gulf Coast in spring (trans-Gulf arrivals) and Atlantic in fall are
    /// boosted; every other pairing is neutral.
    pub fn multiplier(self, season: Season) -> f64 {
        match (self, season) {
            (Corridor::GulfCoast, Season::Spring) => 1.2,
            (Corridor::Atlantic, Season::Fall) => 1.15,
            _ => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Corridor::GulfCoast => "gulf_coast",
            Corridor::Atlantic => "atlantic",
            Corridor::GreatLakes => "great_lakes",
        }
    }
}

/// Multiplier for an optional corridor; no corridor is neutral.
pub fn corridor_multiplier(corridor: Option<Corridor>, season: Season) -> f64 {
    corridor.map_or(1.0, |c| c.multiplier(season))
}

impl fmt::Display for Corridor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
