use crate::cli::support::{stdout_json, toml_file, transit_graph, two_islands};
use predicates::prelude::*;

#[test]
fn test_shortest_single_route() {
    transit_graph()
        .args(["shortest", "Центр", "--to", "Аеропорт"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Аеропорт: 12.0 km (Центр -> Ринок -> Вокзал -> Аеропорт)",
        ));
}

#[test]
fn test_shortest_all_routes_from_source() {
    transit_graph()
        .args(["shortest", "Центр"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest routes from Центр:"))
        .stdout(predicate::str::contains("Університет: 3.0 km (Центр -> Університет)"))
        .stdout(predicate::str::contains("Лікарня: 7.0 km"));
}

#[test]
fn test_shortest_json() {
    let output = transit_graph()
        .args(["--format", "json", "shortest", "Центр", "--to", "Аеропорт"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["distance"], 12.0);
    assert_eq!(json["from"], "Центр");
    assert_eq!(json["path"].as_array().unwrap().len(), 4);
}

#[test]
fn test_shortest_lists_unreachable() {
    let network = two_islands();

    transit_graph()
        .arg("--network")
        .arg(network.path())
        .args(["shortest", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B: 1.0 km (A -> B)"))
        .stdout(predicate::str::contains("C: unreachable"));
}

#[test]
fn test_shortest_no_path() {
    let network = two_islands();

    transit_graph()
        .arg("--network")
        .arg(network.path())
        .args(["shortest", "A", "--to", "D"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no path from A to D"));
}

#[test]
fn test_shortest_settled_limit() {
    let config = toml_file("[limits]\nmax_settled = 2\n");

    let output = transit_graph()
        .arg("--config")
        .arg(config.path())
        .args(["--format", "json", "shortest", "Центр"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "timeout");
}
