//! Property-based checks of the model's invariants.

use impact_lab::mitigation::Strategy as Deflection;
use impact_lab::{AsteroidParams, Density, compute_impact, evaluate_mitigation};
use proptest::prelude::*;

fn density() -> impl Strategy<Value = Density> {
    prop_oneof![
        Just(Density::Rocky),
        Just(Density::Metallic),
        Just(Density::Icy),
    ]
}

fn deflection() -> impl Strategy<Value = Deflection> {
    prop_oneof![
        Just(Deflection::Kinetic),
        Just(Deflection::Nuclear),
        Just(Deflection::Gravity),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_effects_are_non_negative(
        diameter in 0.01f64..5_000.0,
        velocity in 0.01f64..80.0,
        angle in 0.0f64..=90.0,
        density in density(),
        population in 0.0f64..5.0e7,
    ) {
        let params = AsteroidParams { diameter, velocity, angle, density };
        let r = compute_impact(&params, population);

        prop_assert!(r.mass > 0.0);
        prop_assert!(r.impact_energy >= 0.0);
        prop_assert!(r.tnt_equivalent >= 0.0);
        prop_assert!(r.crater_diameter >= 0.0);
        prop_assert!(r.affected_area_radius >= 0.0);
        prop_assert!(r.fireball >= 0.0);
        prop_assert!(r.thermal_radiation >= 0.0);
        prop_assert!(r.air_blast >= 0.0);
        prop_assert!(r.seismic_magnitude >= 0.0);
        prop_assert_eq!(r.crater_depth, r.crater_diameter / 3.0);
    }

    #[test]
    fn prop_seismic_never_negative_even_for_odd_angles(
        diameter in 0.001f64..1_000.0,
        velocity in 0.0001f64..70.0,
        angle in -720.0f64..720.0,
        density in density(),
    ) {
        let r = compute_impact(&AsteroidParams { diameter, velocity, angle, density }, 0.0);
        prop_assert!(r.seismic_magnitude >= 0.0);
    }

    #[test]
    fn prop_vertical_entry_is_pure_kinetic_energy(
        diameter in 1.0f64..1_000.0,
        velocity in 10.0f64..70.0,
        density in density(),
    ) {
        let r = compute_impact(&AsteroidParams { diameter, velocity, angle: 90.0, density }, 0.0);
        let v = velocity * 1_000.0;
        prop_assert_eq!(r.impact_energy, 0.5 * r.mass * v.powi(2));
    }

    #[test]
    fn prop_success_probability_is_bounded(
        energy_mt in 0.0f64..1.0e9,
        days in 0.001f64..1.0e5,
        strategy in deflection(),
    ) {
        let m = evaluate_mitigation(energy_mt, days, strategy);
        prop_assert!((5.0..=95.0).contains(&m.success_probability));
        prop_assert!(m.deflection_needed >= 0.0);
    }

    #[test]
    fn prop_more_warning_never_hurts(
        energy_mt in 0.0f64..2_000.0,
        days in 1.0f64..5_000.0,
        extra in 0.0f64..5_000.0,
        strategy in deflection(),
    ) {
        let sooner = evaluate_mitigation(energy_mt, days, strategy);
        let later = evaluate_mitigation(energy_mt, days + extra, strategy);
        prop_assert!(later.success_probability >= sooner.success_probability);
        prop_assert!(later.deflection_needed <= sooner.deflection_needed);
    }
}
