//! Historical impacts used for comparison in reports.

use serde::Serialize;

/// A documented impact or airburst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoricalImpact {
    pub name: &'static str,
    /// Calendar year; negative values are years BCE.
    pub year: i64,
    pub diameter_m: f64,
    pub energy_mt: f64,
    pub location: &'static str,
    pub effect: &'static str,
}

impl HistoricalImpact {
    /// Human-readable year, e.g. `1908` or `65,000,000 BCE`.
    pub fn year_label(&self) -> String {
        if self.year >= 0 {
            self.year.to_string()
        } else {
            format!("{} BCE", group_thousands(self.year.unsigned_abs()))
        }
    }
}

static HISTORICAL_IMPACTS: [HistoricalImpact; 4] = [
    HistoricalImpact {
        name: "Chicxulub Impact",
        year: -65_000_000,
        diameter_m: 10_000.0,
        energy_mt: 100_000_000.0,
        location: "Yucatan Peninsula, Mexico",
        effect: "Dinosaur extinction event",
    },
    HistoricalImpact {
        name: "Tunguska Event",
        year: 1908,
        diameter_m: 60.0,
        energy_mt: 15.0,
        location: "Siberia, Russia",
        effect: "2,000 km² of forest destroyed",
    },
    HistoricalImpact {
        name: "Chelyabinsk Meteor",
        year: 2013,
        diameter_m: 20.0,
        energy_mt: 0.5,
        location: "Chelyabinsk, Russia",
        effect: "1,500 injuries, widespread damage",
    },
    HistoricalImpact {
        name: "Meteor Crater",
        year: -50_000,
        diameter_m: 50.0,
        energy_mt: 10.0,
        location: "Arizona, USA",
        effect: "1.2 km crater formed",
    },
];

/// The fixed reference list, always in the same order.
pub fn list_historical_impacts() -> &'static [HistoricalImpact] {
    &HISTORICAL_IMPACTS
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
