use std::fs;

use impact_lab::config::{
    CatalogSettings, ConfigError, find_scenario, load_catalog_settings, load_scenarios,
};
use impact_lab::Density;
use tempfile::tempdir;

#[test]
fn shipped_scenarios_load() {
    let scenarios = load_scenarios("configs/scenarios.yaml").expect("scenarios yaml");
    assert!(scenarios.len() >= 4);

    let default = find_scenario(&scenarios, "default").expect("default scenario");
    assert_eq!(default.diameter_m, 100.0);
    assert_eq!(default.density, Density::Rocky);

    let iron = find_scenario(&scenarios, "Iron Over Manhattan").expect("iron scenario");
    assert_eq!(iron.density, Density::Metallic);
    assert!(iron.site.is_some());
    assert_eq!(iron.mitigation.as_ref().map(|m| m.strategy.as_str()), Some("kinetic"));

    let apophis = find_scenario(&scenarios, "apophis strike").expect("apophis scenario");
    assert_eq!(apophis.angle_deg, 45.0);
}

#[test]
fn toml_directory_is_read_in_name_order() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("b_second.toml"),
        "name = \"Second\"\ndiameter_m = 20.0\nvelocity_km_s = 15.0\ndensity = \"icy\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("a_first.toml"),
        "name = \"First\"\ndiameter_m = 10.0\nvelocity_km_s = 12.0\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let scenarios = load_scenarios(dir.path()).expect("toml dir");
    let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
    assert_eq!(scenarios[0].density, Density::Rocky);
    assert_eq!(scenarios[1].density, Density::Icy);
}

#[test]
fn invalid_scenarios_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.yaml");
    fs::write(
        &path,
        "- name: Broken\n  diameter_m: -5\n  velocity_km_s: 20\n",
    )
    .unwrap();

    match load_scenarios(&path) {
        Err(ConfigError::Invalid { name, .. }) => assert_eq!(name, "Broken"),
        other => panic!("expected invalid scenario error, got {other:?}"),
    }

    fs::write(
        &path,
        "- name: NoWarning\n  diameter_m: 5\n  velocity_km_s: 20\n  mitigation:\n    strategy: gravity\n    warning_days: 0\n",
    )
    .unwrap();
    assert!(matches!(load_scenarios(&path), Err(ConfigError::Invalid { .. })));
}

#[test]
fn unknown_strategy_is_rejected_at_load() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("laser.yaml");
    fs::write(
        &path,
        "- name: Laser\n  diameter_m: 5\n  velocity_km_s: 20\n  mitigation:\n    strategy: laser\n    warning_days: 400\n",
    )
    .unwrap();

    match load_scenarios(&path) {
        Err(ConfigError::Invalid { name, reason }) => {
            assert_eq!(name, "Laser");
            assert!(reason.contains("unknown strategy 'laser'"));
        }
        other => panic!("expected invalid scenario error, got {other:?}"),
    }
}

#[test]
fn unknown_density_fails_to_parse() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("weird.yaml");
    fs::write(
        &path,
        "- name: Weird\n  diameter_m: 5\n  velocity_km_s: 20\n  density: granite\n",
    )
    .unwrap();
    assert!(matches!(load_scenarios(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn catalog_settings_fill_defaults() {
    let shipped = load_catalog_settings("configs/catalog.toml").expect("catalog toml");
    assert_eq!(shipped, CatalogSettings::default());

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "api_key = \"abc123\"\ncache_ttl_secs = 60\n").unwrap();
    let settings = load_catalog_settings(&path).expect("partial settings");
    assert_eq!(settings.api_key, "abc123");
    assert_eq!(settings.cache_ttl_secs, 60);
    assert_eq!(settings.window_days, 7);
    assert_eq!(settings.feed_url, "https://api.nasa.gov/neo/rest/v1/feed");

    assert!(matches!(
        load_catalog_settings(dir.path().join("missing.toml")),
        Err(ConfigError::Io(_))
    ));
}
