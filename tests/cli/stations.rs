use crate::cli::support::{toml_file, transit_graph};
use predicates::prelude::*;

#[test]
fn test_stations_reference_network() {
    transit_graph()
        .arg("stations")
        .assert()
        .success()
        .stdout(predicate::str::contains("10 stations, 10 connections"))
        .stdout(predicate::str::contains(
            "Центр (degree 3): Парк, Ринок, Університет",
        ))
        .stdout(predicate::str::contains("Аеропорт (degree 1): Вокзал"));
}

#[test]
fn test_stations_quiet_omits_header() {
    transit_graph()
        .args(["stations", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stations,").not());
}

#[test]
fn test_stations_json() {
    let output = transit_graph()
        .args(["--format", "json", "stations"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stations = json.as_array().unwrap();
    assert_eq!(stations.len(), 10);
    assert_eq!(stations[0]["station"], "Центр");
    assert_eq!(stations[0]["degree"], 3);
    assert_eq!(stations[0]["neighbors"][0], "Парк");
}

#[test]
fn test_stations_from_network_file() {
    let network = toml_file(
        r#"
stations = ["North", "South"]

[[connections]]
from = "North"
to = "South"
distance_km = 4.5
"#,
    );

    transit_graph()
        .arg("--network")
        .arg(network.path())
        .arg("stations")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 stations, 1 connections"))
        .stdout(predicate::str::contains("North (degree 1): South"));
}
