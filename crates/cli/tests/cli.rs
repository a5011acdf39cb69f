use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn impact_prints_report_for_flags() {
    Command::cargo_bin("impact")
        .unwrap()
        .args(["--diameter", "100", "--velocity", "30", "--angle", "45"])
        .args(["--strategy", "nuclear", "--warning-days", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Impact Report: cli ==="))
        .stdout(predicate::str::contains("closest to Krakatoa Eruption"))
        .stdout(predicate::str::contains("Nuclear Deflection"));
}

#[test]
fn impact_looks_up_population_from_coordinates() {
    Command::cargo_bin("impact")
        .unwrap()
        .args(["--lat", "51.5", "--lng", "-0.12", "--density", "metallic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("London"));
}

#[test]
fn impact_runs_named_scenario_and_writes_csv_to_stdout() {
    Command::cargo_bin("impact")
        .unwrap()
        .args(["--scenario", "tunguska replay"])
        .args(["--scenarios", "../../configs/scenarios.yaml"])
        .args(["--csv", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tunguska Replay"))
        .stdout(predicate::str::contains("scenario,site,population"));
}

#[test]
fn impact_writes_json_and_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    Command::cargo_bin("impact")
        .unwrap()
        .arg("--json")
        .arg(&path)
        .arg("--history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chicxulub Impact"))
        .stdout(predicate::str::contains("65,000,000 BCE"));
    assert!(path.exists());
}

#[test]
fn impact_rejects_unknown_scenario() {
    Command::cargo_bin("impact")
        .unwrap()
        .args(["--scenario", "nowhere"])
        .args(["--scenarios", "../../configs/scenarios.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn impact_rejects_non_positive_diameter() {
    Command::cargo_bin("impact")
        .unwrap()
        .args(["--diameter", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("diameter must be positive"));
}

#[test]
fn impact_clamps_warning_time_with_flag() {
    Command::cargo_bin("impact")
        .unwrap()
        .args(["--strategy", "gravity", "--warning-days", "9000", "--clamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with 3650 days (10.0 years) warning"));

    Command::cargo_bin("impact")
        .unwrap()
        .args(["--strategy", "gravity", "--warning-days", "9000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with 9000 days"));
}
