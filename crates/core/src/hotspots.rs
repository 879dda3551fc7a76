//! Well-known fallout hotspots
//!
//! The engine only needs a coordinate; name, state and description are
//! carried through for ranking and display.

use crate::core_types::geo::Coordinate;
use serde::Serialize;
use std::borrow::Cow;

/// A named birding location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    pub name: Cow<'static, str>,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// State or province code
    pub state: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

impl Hotspot {
    const fn catalog(
        name: &'static str,
        lat: f64,
        lon: f64,
        state: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            coordinate: Coordinate::from_static(lat, lon),
            state: Cow::Borrowed(state),
            description: Cow::Borrowed(description),
        }
    }

    /// A user-supplied location. The coordinate is already validated.
    pub fn custom(
        name: impl Into<String>,
        coordinate: Coordinate,
        state: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            coordinate,
            state: Cow::Owned(state.into()),
            description: Cow::Owned(description.into()),
        }
    }

    /// File-name friendly form of the name: lowercase ASCII alphanumerics
    /// separated by single dashes.
    ///
    /// # Example
    /// ```
    /// use fallout_core::hotspots::FALLOUT_HOTSPOTS;
    ///
    /// assert_eq!(FALLOUT_HOTSPOTS[0].slug(), "high-island-boy-scout-woods");
    /// ```
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }
}

/// Classic North American fallout sites
pub static FALLOUT_HOTSPOTS: [Hotspot; 10] = [
    Hotspot::catalog(
        "High Island - Boy Scout Woods",
        29.5647,
        -94.3912,
        "TX",
        "Premier Gulf Coast fallout site",
    ),
    Hotspot::catalog(
        "High Island - Smith Oaks",
        29.5589,
        -94.3867,
        "TX",
        "Classic fallout location with rookery",
    ),
    Hotspot::catalog(
        "South Padre Island",
        26.1044,
        -97.1650,
        "TX",
        "Lower Texas coast migrant trap",
    ),
    Hotspot::catalog(
        "Dauphin Island",
        30.2528,
        -88.1089,
        "AL",
        "Gulf Coast barrier island",
    ),
    Hotspot::catalog(
        "Fort Morgan",
        30.2283,
        -88.0242,
        "AL",
        "Alabama coast migrant concentration",
    ),
    Hotspot::catalog(
        "Point Pelee",
        41.9628,
        -82.5181,
        "ON",
        "Great Lakes migration funnel",
    ),
    Hotspot::catalog(
        "Magee Marsh",
        41.6189,
        -83.1978,
        "OH",
        "Warbler Capital of the World",
    ),
    Hotspot::catalog(
        "Cape May Point",
        38.9331,
        -74.9597,
        "NJ",
        "Atlantic coast fall hotspot",
    ),
    Hotspot::catalog(
        "Central Park Ramble",
        40.7794,
        -73.9686,
        "NY",
        "Urban migrant trap",
    ),
    Hotspot::catalog(
        "Galveston Island",
        29.2044,
        -94.9692,
        "TX",
        "Gulf Coast barrier island",
    ),
];
