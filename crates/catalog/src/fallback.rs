//! Offline asteroid list.

use crate::NeoRecord;

struct FallbackEntry {
    id: &'static str,
    name: &'static str,
    diameter_m: f64,
    velocity_km_s: f64,
    close_approach_date: &'static str,
    miss_distance_km: f64,
}

const FALLBACK: &[FallbackEntry] = &[
    FallbackEntry {
        id: "2021277",
        name: "277 Elvis",
        diameter_m: 450.0,
        velocity_km_s: 35.2,
        close_approach_date: "2025-11-15",
        miss_distance_km: 7_500_000.0,
    },
    FallbackEntry {
        id: "433",
        name: "433 Eros",
        diameter_m: 340.0,
        velocity_km_s: 24.8,
        close_approach_date: "2026-01-31",
        miss_distance_km: 4_200_000.0,
    },
    FallbackEntry {
        id: "99942",
        name: "99942 Apophis",
        diameter_m: 370.0,
        velocity_km_s: 30.7,
        close_approach_date: "2029-04-13",
        miss_distance_km: 31_000.0,
    },
    FallbackEntry {
        id: "101955",
        name: "101955 Bennu",
        diameter_m: 490.0,
        velocity_km_s: 28.6,
        close_approach_date: "2135-09-25",
        miss_distance_km: 750_000.0,
    },
    FallbackEntry {
        id: "1950DA",
        name: "29075 (1950 DA)",
        diameter_m: 1_100.0,
        velocity_km_s: 15.3,
        close_approach_date: "2880-03-16",
        miss_distance_km: 8_000_000.0,
    },
    FallbackEntry {
        id: "2340",
        name: "2340 Hathor",
        diameter_m: 210.0,
        velocity_km_s: 41.5,
        close_approach_date: "2026-10-21",
        miss_distance_km: 12_000_000.0,
    },
    FallbackEntry {
        id: "4179",
        name: "4179 Toutatis",
        diameter_m: 520.0,
        velocity_km_s: 35.0,
        close_approach_date: "2028-12-08",
        miss_distance_km: 18_000_000.0,
    },
    FallbackEntry {
        id: "2062",
        name: "2062 Aten",
        diameter_m: 900.0,
        velocity_km_s: 26.4,
        close_approach_date: "2030-08-19",
        miss_distance_km: 25_000_000.0,
    },
    FallbackEntry {
        id: "1862",
        name: "1862 Apollo",
        diameter_m: 1_400.0,
        velocity_km_s: 31.2,
        close_approach_date: "2027-05-06",
        miss_distance_km: 16_000_000.0,
    },
    FallbackEntry {
        id: "1566",
        name: "1566 Icarus",
        diameter_m: 1_300.0,
        velocity_km_s: 42.8,
        close_approach_date: "2029-06-14",
        miss_distance_km: 9_500_000.0,
    },
];

/// The fixed ten-object list served when the feed is unavailable.
///
/// Entries are kept in their curated order, not sorted by miss distance.
pub fn fallback_asteroids() -> Vec<NeoRecord> {
    FALLBACK
        .iter()
        .map(|entry| NeoRecord {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            diameter_m: entry.diameter_m,
            velocity_km_s: entry.velocity_km_s,
            is_hazardous: true,
            close_approach_date: entry.close_approach_date.to_string(),
            miss_distance_km: entry.miss_distance_km,
        })
        .collect()
}
