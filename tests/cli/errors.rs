use crate::cli::support::{toml_file, transit_graph};
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    transit_graph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: transit-graph"))
        .stdout(predicate::str::contains("metrics"))
        .stdout(predicate::str::contains("all-pairs"));
}

#[test]
fn test_no_command_prints_version() {
    transit_graph()
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "transit-graph ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_unknown_station_is_usage_error() {
    transit_graph()
        .args(["path", "Центр", "Порт"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown station: Порт"));
}

#[test]
fn test_unknown_station_json_envelope() {
    let output = transit_graph()
        .args(["--format", "json", "shortest", "Порт"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "unknown_node");
}

#[test]
fn test_quiet_suppresses_error_text() {
    transit_graph()
        .args(["--quiet", "path", "Центр", "Порт"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_parse_error_json_envelope() {
    let output = transit_graph()
        .args(["--format", "json", "teleport"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_format_rejected() {
    transit_graph()
        .args(["--format", "xml", "metrics"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_duplicate_connection_is_data_error() {
    let network = toml_file(
        r#"
stations = ["A", "B"]

[[connections]]
from = "A"
to = "B"
distance_km = 1.0

[[connections]]
from = "B"
to = "A"
distance_km = 2.0
"#,
    );

    transit_graph()
        .arg("--network")
        .arg(network.path())
        .arg("stations")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate connection B - A"));
}

#[test]
fn test_non_positive_distance_is_data_error() {
    let network = toml_file(
        r#"
stations = ["A", "B"]

[[connections]]
from = "A"
to = "B"
distance_km = 0.0
"#,
    );

    transit_graph()
        .arg("--network")
        .arg(network.path())
        .arg("metrics")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid connection A - B"));
}

#[test]
fn test_unknown_endpoint_is_data_error() {
    let network = toml_file(
        r#"
stations = ["A"]

[[connections]]
from = "A"
to = "Z"
distance_km = 1.0
"#,
    );

    transit_graph()
        .arg("--network")
        .arg(network.path())
        .arg("metrics")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown station Z"));
}

#[test]
fn test_malformed_network_file() {
    let network = toml_file("stations = [\"A\"\n");

    transit_graph()
        .arg("--network")
        .arg(network.path())
        .arg("stations")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_missing_network_file() {
    transit_graph()
        .args(["--network", "/nonexistent/network.toml", "stations"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_zero_limit_is_invalid_config() {
    let config = toml_file("[limits]\ntime_budget_ms = 0\n");

    transit_graph()
        .arg("--config")
        .arg(config.path())
        .arg("all-pairs")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config"));
}
