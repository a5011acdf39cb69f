//! Coarse population lookup for impact sites.

use serde::Serialize;

/// Populated place near an impact site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationSite {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub population: f64,
}

/// Name reported when no known city lies near the site.
pub const OPEN_AREA: &str = "Ocean/Rural Area";

/// Sites further than this (in degrees, measured on the lat/lng plane) do not match.
pub const MATCH_RADIUS_DEG: f64 = 1.0;

const CITIES: &[PopulationSite] = &[
    PopulationSite { name: "New York", lat: 40.7128, lng: -74.006, population: 8_000_000.0 },
    PopulationSite { name: "London", lat: 51.5074, lng: -0.1278, population: 9_000_000.0 },
    PopulationSite { name: "Tokyo", lat: 35.6762, lng: 139.6503, population: 14_000_000.0 },
    PopulationSite { name: "Los Angeles", lat: 34.0522, lng: -118.2437, population: 4_000_000.0 },
    PopulationSite { name: "Paris", lat: 48.8566, lng: 2.3522, population: 2_200_000.0 },
    PopulationSite { name: "Mumbai", lat: 19.076, lng: 72.8777, population: 20_000_000.0 },
];

/// Built-in city table.
pub fn known_sites() -> &'static [PopulationSite] {
    CITIES
}

/// First known city within [`MATCH_RADIUS_DEG`] of the point, or an empty open area.
pub fn population_at(lat: f64, lng: f64) -> PopulationSite {
    CITIES
        .iter()
        .find(|city| {
            let d_lat = lat - city.lat;
            let d_lng = lng - city.lng;
            (d_lat * d_lat + d_lng * d_lng).sqrt() < MATCH_RADIUS_DEG
        })
        .cloned()
        .unwrap_or(PopulationSite {
            name: OPEN_AREA,
            lat,
            lng,
            population: 0.0,
        })
}
