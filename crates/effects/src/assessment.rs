//! Interpretation helpers for [`ImpactResults`]: energy comparisons, damage rings,
//! and a plain-language list of environmental consequences.

use crate::calculator::ImpactResults;
use impact_core::units::m_to_km;
use serde::Serialize;

/// Well-known energy release used to put an impact in perspective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceEvent {
    pub name: &'static str,
    pub megatons: f64,
}

const REFERENCE_EVENTS: &[ReferenceEvent] = &[
    ReferenceEvent { name: "Hiroshima Bomb", megatons: 0.015 },
    ReferenceEvent { name: "Tsar Bomba", megatons: 50.0 },
    ReferenceEvent { name: "Krakatoa Eruption", megatons: 200.0 },
    ReferenceEvent { name: "Tunguska Event", megatons: 15.0 },
    ReferenceEvent { name: "Mt. St. Helens", megatons: 24.0 },
];

const RANKED_EVENTS: &[ReferenceEvent] = &[
    ReferenceEvent { name: "Hiroshima", megatons: 0.015 },
    ReferenceEvent { name: "Tunguska", megatons: 15.0 },
    ReferenceEvent { name: "Mt St Helens", megatons: 24.0 },
    ReferenceEvent { name: "Tsar Bomba", megatons: 50.0 },
];

/// Label given to the evaluated impact inside [`energy_ranking`].
pub const THIS_IMPACT: &str = "This Impact";

/// Reference events used for the "closest comparison" figure.
pub fn reference_events() -> &'static [ReferenceEvent] {
    REFERENCE_EVENTS
}

/// Event whose energy is nearest to `tnt_equivalent`. Ties keep the earlier entry.
pub fn closest_reference_event(tnt_equivalent: f64) -> ReferenceEvent {
    let mut best = REFERENCE_EVENTS[0];
    for event in &REFERENCE_EVENTS[1..] {
        if (event.megatons - tnt_equivalent).abs() < (best.megatons - tnt_equivalent).abs() {
            best = *event;
        }
    }
    best
}

/// Benchmark events plus this impact, sorted by ascending energy.
pub fn energy_ranking(tnt_equivalent: f64) -> Vec<ReferenceEvent> {
    let mut ranking: Vec<ReferenceEvent> = RANKED_EVENTS.to_vec();
    ranking.push(ReferenceEvent {
        name: THIS_IMPACT,
        megatons: tnt_equivalent,
    });
    ranking.sort_by(|a, b| a.megatons.total_cmp(&b.megatons));
    ranking
}

/// Concentric damage ring; `width_km` is the radial extent beyond the previous ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageZone {
    pub name: &'static str,
    pub width_km: f64,
}

/// Fireball, thermal, and air-blast rings. Rings with no positive width are dropped.
pub fn damage_zones(results: &ImpactResults) -> Vec<DamageZone> {
    [
        DamageZone {
            name: "Fireball",
            width_km: m_to_km(results.fireball),
        },
        DamageZone {
            name: "Thermal Radiation",
            width_km: m_to_km(results.thermal_radiation - results.fireball),
        },
        DamageZone {
            name: "Air Blast",
            width_km: m_to_km(results.air_blast - results.thermal_radiation),
        },
    ]
    .into_iter()
    .filter(|zone| zone.width_km > 0.0)
    .collect()
}

/// Consequences worth calling out for an impact of this size.
pub fn environmental_effects(results: &ImpactResults) -> Vec<String> {
    let tnt = results.tnt_equivalent;
    let mut effects = Vec::new();

    if tnt > 1.0 {
        effects.push("Severe local fires and forest destruction".to_string());
    }
    if tnt > 10.0 {
        effects.push("Regional atmospheric disturbance".to_string());
    }
    if tnt > 100.0 {
        effects.push("Global dust cloud affecting climate".to_string());
    }
    if tnt > 1_000.0 {
        effects.push("Mass extinction event possible".to_string());
    }
    if results.seismic_magnitude > 5.0 {
        effects.push(format!(
            "Magnitude {:.1} earthquake",
            results.seismic_magnitude
        ));
    }

    if effects.is_empty() {
        effects.push("Localized damage only".to_string());
    }
    effects
}

/// Crater diameter expressed in 100 m football fields.
pub fn crater_in_football_fields(results: &ImpactResults) -> f64 {
    results.crater_diameter / 100.0
}
