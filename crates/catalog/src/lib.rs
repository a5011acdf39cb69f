//! Near-earth-object catalog: feed decoding, a cached fetcher, and the offline list
//! served whenever the feed cannot be reached.

pub mod cache;
pub mod fallback;
pub mod feed;

pub use cache::{CatalogCache, SnapshotOrigin};
pub use fallback::fallback_asteroids;
pub use feed::{FeedWindow, NeoFeedClient, NeoSource, parse_feed, select_hazardous};

use impact_effects::{AsteroidParams, Density};
use serde::Serialize;
use thiserror::Error;

/// Maximum number of hazardous objects kept from a feed response.
pub const MAX_HAZARDOUS: usize = 10;

/// Entry angle assumed when turning a catalog object into impact parameters.
pub const DEFAULT_ENTRY_ANGLE_DEG: f64 = 45.0;

/// Normalized close-approach record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    pub is_hazardous: bool,
    /// `YYYY-MM-DD` as reported by the feed.
    pub close_approach_date: String,
    pub miss_distance_km: f64,
}

impl NeoRecord {
    /// Impact parameters for a hypothetical strike by this object: rocky, 45° entry.
    pub fn to_params(&self) -> AsteroidParams {
        AsteroidParams {
            diameter: self.diameter_m,
            velocity: self.velocity_km_s,
            angle: DEFAULT_ENTRY_ANGLE_DEG,
            density: Density::Rocky,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("feed request failed with HTTP status {0}")]
    Status(u16),
    #[error("failed to decode feed: {0}")]
    Decode(#[from] serde_json::Error),
}
