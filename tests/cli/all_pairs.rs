use crate::cli::support::{stdout_json, transit_graph, two_islands};
use predicates::prelude::*;

#[test]
fn test_all_pairs_reference() {
    transit_graph()
        .arg("all-pairs")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Центр -> Аеропорт: 12.0 km (Центр -> Ринок -> Вокзал -> Аеропорт)",
        ))
        .stdout(predicate::str::contains("Mean shortest distance: 6.9 km"))
        .stdout(predicate::str::contains("Unreachable").not());
}

#[test]
fn test_all_pairs_json() {
    let output = transit_graph()
        .args(["all-pairs", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["routes"].as_array().unwrap().len(), 90);
    assert_eq!(json["unreachable_pairs"], 0);
    let mean = json["mean_distance_km"].as_f64().unwrap();
    assert!((mean - 622.0 / 90.0).abs() < 1e-9);
}

#[test]
fn test_all_pairs_disconnected() {
    let network = two_islands();

    transit_graph()
        .arg("--network")
        .arg(network.path())
        .arg("all-pairs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean shortest distance: 1.5 km"))
        .stdout(predicate::str::contains("Unreachable pairs: 8"));
}
