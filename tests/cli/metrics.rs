use crate::cli::support::{stdout_json, transit_graph, two_islands};
use predicates::prelude::*;

#[test]
fn test_metrics_human() {
    transit_graph()
        .arg("metrics")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 10"))
        .stdout(predicate::str::contains("Edges: 10"))
        .stdout(predicate::str::contains("Average degree: 2.00"))
        .stdout(predicate::str::contains("Density: 0.2222"))
        .stdout(predicate::str::contains("Diameter: 5"))
        .stdout(predicate::str::contains("Average path length: 2.6222"))
        .stdout(predicate::str::contains("1. Парк 0.333"));
}

#[test]
fn test_metrics_top_limits_ranking() {
    transit_graph()
        .args(["metrics", "--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Парк 0.333"))
        .stdout(predicate::str::contains("2. Ринок 0.333"))
        .stdout(predicate::str::contains("3. Університет").not());
}

#[test]
fn test_metrics_json() {
    let output = transit_graph()
        .args(["metrics", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["node_count"], 10);
    assert_eq!(json["edge_count"], 10);
    assert_eq!(json["diameter"], 5);
    assert_eq!(json["average_clustering"], 0.0);
    assert_eq!(json["stations"][0]["station"], "Центр");
    assert_eq!(json["stations"][0]["degree"], 3);
    assert_eq!(json["centrality_ranking"][0][0], "Парк");
}

#[test]
fn test_metrics_disconnected_network() {
    let network = two_islands();

    transit_graph()
        .arg("--network")
        .arg(network.path())
        .arg("metrics")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("disconnected"))
        .stderr(predicate::str::contains("4 unreachable"));
}
