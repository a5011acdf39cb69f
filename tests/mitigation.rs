use approx::assert_relative_eq;
use impact_lab::mitigation::{
    MitigationError, SuccessTier, compare_strategies, evaluate_mitigation_checked,
};
use impact_lab::{Strategy, evaluate_mitigation};

#[test]
fn gravity_tractor_with_a_decade_of_warning_for_negligible_energy() {
    let m = evaluate_mitigation(0.0, 3_650.0, Strategy::Gravity);
    // 3650 days is exactly 10 years, which is not more than 10.
    assert_eq!(m.success_probability, 50.0);

    let m = evaluate_mitigation(0.0, 3_651.0, Strategy::Gravity);
    assert_eq!(m.success_probability, 95.0);
    assert_eq!(m.deflection_needed, 0.0);
}

#[test]
fn thousand_megatons_floors_success() {
    let m = evaluate_mitigation(1_000.0, 365.0, Strategy::Kinetic);
    assert_eq!(m.success_probability, 5.0);

    let m = evaluate_mitigation(5_000.0, 3_000.0, Strategy::Nuclear);
    assert_eq!(m.success_probability, 5.0);
}

#[test]
fn energy_factor_scales_linearly() {
    let m = evaluate_mitigation(500.0, 4_000.0, Strategy::Nuclear);
    assert_relative_eq!(m.success_probability, 45.0, max_relative = 1e-12);
}

#[test]
fn step_boundaries_are_exclusive() {
    let cases = [
        (Strategy::Kinetic, 365.0, 10.0),
        (Strategy::Kinetic, 366.0, 35.0),
        (Strategy::Kinetic, 730.0, 35.0),
        (Strategy::Kinetic, 731.0, 60.0),
        (Strategy::Kinetic, 1_825.0, 60.0),
        (Strategy::Kinetic, 1_826.0, 85.0),
        (Strategy::Nuclear, 182.5, 20.0),
        (Strategy::Nuclear, 183.0, 45.0),
        (Strategy::Nuclear, 365.0, 45.0),
        (Strategy::Nuclear, 366.0, 70.0),
        (Strategy::Nuclear, 1_095.0, 70.0),
        (Strategy::Nuclear, 1_096.0, 90.0),
        (Strategy::Gravity, 1_825.0, 15.0),
        (Strategy::Gravity, 1_826.0, 50.0),
    ];
    for (strategy, days, expected) in cases {
        let m = evaluate_mitigation(0.0, days, strategy);
        assert_eq!(
            m.success_probability, expected,
            "{strategy} at {days} days"
        );
    }
}

#[test]
fn deflection_grows_with_energy_and_shrinks_with_time() {
    let m = evaluate_mitigation(100.0, 365.0, Strategy::Kinetic);
    assert_relative_eq!(m.deflection_needed, 0.001, max_relative = 1e-12);

    let later = evaluate_mitigation(100.0, 730.0, Strategy::Kinetic);
    assert_relative_eq!(later.deflection_needed, 0.0005, max_relative = 1e-12);

    let bigger = evaluate_mitigation(400.0, 365.0, Strategy::Kinetic);
    assert_relative_eq!(bigger.deflection_needed, 0.002, max_relative = 1e-12);
}

#[test]
fn descriptions_are_fixed_per_strategy() {
    assert_eq!(
        evaluate_mitigation(1.0, 100.0, Strategy::Kinetic).description,
        "Launch spacecraft to collide with asteroid, changing its momentum"
    );
    assert_eq!(
        evaluate_mitigation(1.0, 100.0, Strategy::Nuclear).description,
        "Detonate nuclear device near asteroid to vaporize surface material"
    );
    assert_eq!(
        evaluate_mitigation(1.0, 100.0, Strategy::Gravity).description,
        "Position spacecraft near asteroid to gradually alter trajectory via gravity"
    );
}

#[test]
fn checked_variant_rejects_zero_warning() {
    assert_eq!(
        evaluate_mitigation_checked(10.0, 0.0, Strategy::Kinetic),
        Err(MitigationError::InvalidWarningTime(0.0))
    );
    assert_eq!(
        evaluate_mitigation_checked(-1.0, 10.0, Strategy::Kinetic),
        Err(MitigationError::InvalidEnergy(-1.0))
    );
    assert!(evaluate_mitigation_checked(10.0, 10.0, Strategy::Gravity).is_ok());
}

#[test]
fn tiers_follow_probability_bands() {
    assert_eq!(SuccessTier::from_probability(95.0), SuccessTier::High);
    assert_eq!(SuccessTier::from_probability(70.0), SuccessTier::High);
    assert_eq!(SuccessTier::from_probability(69.9), SuccessTier::Moderate);
    assert_eq!(SuccessTier::from_probability(40.0), SuccessTier::Moderate);
    assert_eq!(SuccessTier::from_probability(5.0), SuccessTier::Low);
    assert_eq!(
        evaluate_mitigation(0.0, 4_000.0, Strategy::Gravity).tier(),
        SuccessTier::High
    );
}

#[test]
fn comparison_covers_every_strategy_in_order() {
    let all = compare_strategies(10.0, 1_000.0);
    let order: Vec<Strategy> = all.iter().map(|(s, _)| *s).collect();
    assert_eq!(order, Strategy::ALL.to_vec());
    for (strategy, result) in all {
        assert_eq!(result, evaluate_mitigation(10.0, 1_000.0, strategy));
    }
}

#[test]
fn profiles_and_labels() {
    assert_eq!(Strategy::Kinetic.profile().name, "Kinetic Impact");
    assert_eq!(Strategy::Nuclear.profile().pros.len(), 3);
    assert_eq!(
        Strategy::Gravity.profile().cons,
        &["Requires decades of warning", "Only works on smaller asteroids"]
    );
    assert_eq!("NUCLEAR".parse::<Strategy>(), Ok(Strategy::Nuclear));
    assert!("laser".parse::<Strategy>().is_err());
}
