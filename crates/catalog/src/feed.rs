//! Feed decoding and the HTTP client.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, Utc};
use impact_config::CatalogSettings;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{CatalogError, MAX_HAZARDOUS, NeoRecord};

/// Anything able to produce close-approach records for a date window.
pub trait NeoSource {
    fn fetch(&self, window: FeedWindow) -> Result<Vec<NeoRecord>, CatalogError>;
}

/// Inclusive date range requested from the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FeedWindow {
    /// Window beginning on `start` and spanning `days` days.
    pub fn starting(start: NaiveDate, days: i64) -> Self {
        let end = start
            .checked_add_days(Days::new(days.max(0) as u64))
            .unwrap_or(start);
        Self { start, end }
    }

    /// Window beginning today (UTC).
    pub fn from_today(days: i64) -> Self {
        Self::starting(Utc::now().date_naive(), days)
    }

    fn query(&self) -> [(&'static str, String); 2] {
        [
            ("start_date", self.start.format("%Y-%m-%d").to_string()),
            ("end_date", self.end.format("%Y-%m-%d").to_string()),
        ]
    }
}

/// Blocking client for the NASA NeoWs feed endpoint.
#[derive(Debug, Clone)]
pub struct NeoFeedClient {
    client: Client,
    feed_url: String,
    api_key: String,
}

impl NeoFeedClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        Ok(Self {
            client: Client::builder().build()?,
            feed_url: settings.feed_url.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

impl NeoSource for NeoFeedClient {
    fn fetch(&self, window: FeedWindow) -> Result<Vec<NeoRecord>, CatalogError> {
        let response = self
            .client
            .get(&self.feed_url)
            .query(&window.query())
            .query(&[("api_key", self.api_key.as_str())])
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        let body = response.text()?;
        parse_feed(&body)
    }
}

#[derive(Deserialize)]
struct FeedResponse {
    near_earth_objects: BTreeMap<String, Vec<FeedObject>>,
}

#[derive(Deserialize)]
struct FeedObject {
    id: String,
    name: String,
    #[serde(default)]
    estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
}

#[derive(Deserialize)]
struct EstimatedDiameter {
    meters: Option<DiameterRange>,
}

#[derive(Deserialize)]
struct DiameterRange {
    estimated_diameter_min: f64,
    estimated_diameter_max: f64,
}

#[derive(Deserialize)]
struct CloseApproach {
    close_approach_date: String,
    relative_velocity: RelativeVelocity,
    miss_distance: MissDistance,
}

// The feed encodes these numbers as strings.
#[derive(Deserialize)]
struct RelativeVelocity {
    kilometers_per_second: String,
}

#[derive(Deserialize)]
struct MissDistance {
    kilometers: String,
}

/// Decode a feed response body into normalized records.
///
/// Objects without a metric diameter estimate or a close approach are skipped,
/// as are objects whose velocity or miss distance is not a number.
pub fn parse_feed(body: &str) -> Result<Vec<NeoRecord>, CatalogError> {
    let response: FeedResponse = serde_json::from_str(body)?;
    let mut records = Vec::new();

    for object in response.near_earth_objects.into_values().flatten() {
        let Some(range) = object.estimated_diameter.and_then(|d| d.meters) else {
            debug!(id = %object.id, "skipping object without diameter estimate");
            continue;
        };
        let Some(approach) = object.close_approach_data.into_iter().next() else {
            debug!(id = %object.id, "skipping object without close approach data");
            continue;
        };
        let velocity = approach.relative_velocity.kilometers_per_second.trim().parse::<f64>();
        let miss = approach.miss_distance.kilometers.trim().parse::<f64>();
        let (Ok(velocity_km_s), Ok(miss_distance_km)) = (velocity, miss) else {
            debug!(id = %object.id, "skipping object with non-numeric approach data");
            continue;
        };

        records.push(NeoRecord {
            id: object.id,
            name: object.name,
            diameter_m: mean_diameter_m(&range),
            velocity_km_s,
            is_hazardous: object.is_potentially_hazardous_asteroid,
            close_approach_date: approach.close_approach_date,
            miss_distance_km,
        });
    }

    Ok(records)
}

/// Hazardous records only, closest approach first, capped at [`MAX_HAZARDOUS`].
pub fn select_hazardous(records: Vec<NeoRecord>) -> Vec<NeoRecord> {
    let mut hazardous: Vec<NeoRecord> = records.into_iter().filter(|r| r.is_hazardous).collect();
    hazardous.sort_by(|a, b| a.miss_distance_km.total_cmp(&b.miss_distance_km));
    hazardous.truncate(MAX_HAZARDOUS);
    hazardous
}

fn mean_diameter_m(range: &DiameterRange) -> f64 {
    ((range.estimated_diameter_min + range.estimated_diameter_max) / 2.0).round()
}
