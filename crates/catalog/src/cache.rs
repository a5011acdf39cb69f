//! Time-windowed cache in front of a [`NeoSource`].

use std::time::{Duration, Instant};

use impact_config::CatalogSettings;
use tracing::{debug, warn};

use crate::fallback::fallback_asteroids;
use crate::feed::{FeedWindow, NeoSource, select_hazardous};
use crate::NeoRecord;

/// Where the current snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOrigin {
    Feed,
    Fallback,
}

#[derive(Debug)]
struct Snapshot {
    records: Vec<NeoRecord>,
    refreshed_at: Instant,
    origin: SnapshotOrigin,
}

/// Holds one snapshot of hazardous objects and the instant it was taken.
///
/// Fetch failures never reach callers: the fallback list is cached instead
/// and the error is logged.
#[derive(Debug)]
pub struct CatalogCache<S> {
    source: S,
    ttl: Duration,
    window_days: i64,
    snapshot: Option<Snapshot>,
}

impl<S: NeoSource> CatalogCache<S> {
    pub fn new(source: S, ttl: Duration, window_days: i64) -> Self {
        Self {
            source,
            ttl,
            window_days,
            snapshot: None,
        }
    }

    pub fn from_settings(source: S, settings: &CatalogSettings) -> Self {
        Self::new(
            source,
            Duration::from_secs(settings.cache_ttl_secs),
            settings.window_days,
        )
    }

    /// Cached records, refreshing first if the snapshot is missing or stale.
    pub fn get(&mut self) -> &[NeoRecord] {
        self.get_at(Instant::now())
    }

    /// [`get`](Self::get) evaluated at an explicit instant.
    pub fn get_at(&mut self, now: Instant) -> &[NeoRecord] {
        if self.is_fresh_at(now) {
            debug!("serving cached asteroid catalog");
        } else {
            self.refresh_at(now);
        }
        self.records()
    }

    /// Fetch a new snapshot regardless of age.
    pub fn refresh(&mut self) -> &[NeoRecord] {
        self.refresh_at(Instant::now())
    }

    /// [`refresh`](Self::refresh) evaluated at an explicit instant.
    pub fn refresh_at(&mut self, now: Instant) -> &[NeoRecord] {
        let window = FeedWindow::from_today(self.window_days);
        let (records, origin) = match self.source.fetch(window) {
            Ok(records) => {
                let hazardous = select_hazardous(records);
                if hazardous.is_empty() {
                    debug!("feed returned no hazardous objects, using fallback list");
                    (fallback_asteroids(), SnapshotOrigin::Fallback)
                } else {
                    debug!(count = hazardous.len(), "refreshed asteroid catalog");
                    (hazardous, SnapshotOrigin::Feed)
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch asteroid feed, using fallback list");
                (fallback_asteroids(), SnapshotOrigin::Fallback)
            }
        };

        self.snapshot = Some(Snapshot {
            records,
            refreshed_at: now,
            origin,
        });
        self.records()
    }

    /// Whether a snapshot exists and is younger than the TTL at `now`.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|s| now.saturating_duration_since(s.refreshed_at) < self.ttl)
    }

    pub fn origin(&self) -> Option<SnapshotOrigin> {
        self.snapshot.as_ref().map(|s| s.origin)
    }

    /// Drop the snapshot so the next `get` refreshes.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn records(&self) -> &[NeoRecord] {
        self.snapshot
            .as_ref()
            .map(|s| s.records.as_slice())
            .unwrap_or(&[])
    }
}
