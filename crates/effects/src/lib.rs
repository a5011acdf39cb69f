//! Impact effects façade: the calculator plus the helpers that interpret its output.

pub mod assessment;
pub mod calculator;
pub mod population;

pub use calculator::{
    AsteroidParams, ImpactError, ImpactResults, compute_impact, compute_impact_checked,
};
pub use impact_core::Density;
