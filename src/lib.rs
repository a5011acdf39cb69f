//! Asteroid impact physics and mitigation toolkit.
//!
//! The physics lives in small member crates re-exported here so that every
//! front-end (CLI today, anything else later) shares one implementation.

pub mod scenario;

pub use impact_catalog as catalog;
pub use impact_config as config;
pub use impact_core as common;
pub use impact_effects as effects;
pub use impact_export as export;
pub use impact_history as history;
pub use impact_mitigation as mitigation;

pub use impact_effects::{AsteroidParams, Density, ImpactResults, compute_impact};
pub use impact_history::list_historical_impacts;
pub use impact_mitigation::{MitigationResult, Strategy, evaluate_mitigation};
