use crate::cli::support::{stdout_json, transit_graph};
use predicates::prelude::*;

#[test]
fn test_path_compare_reference() {
    transit_graph()
        .args(["path", "Центр", "Аеропорт"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DFS: Центр -> Ринок -> Вокзал -> Аеропорт (3 hops, 7 stations visited)",
        ))
        .stdout(predicate::str::contains(
            "BFS: Центр -> Ринок -> Вокзал -> Аеропорт (3 hops, 10 stations visited)",
        ))
        .stdout(predicate::str::contains("Both paths have 3 hops"));
}

#[test]
fn test_path_compare_reports_difference() {
    transit_graph()
        .args(["path", "Університет", "Парк"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS path is shorter by 2 hops"));
}

#[test]
fn test_path_bfs_json() {
    let output = transit_graph()
        .args(["--format", "json", "path", "Центр", "Аеропорт", "--algorithm", "bfs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(
        json["path"],
        serde_json::json!(["Центр", "Ринок", "Вокзал", "Аеропорт"])
    );
    assert_eq!(json["visited"].as_array().unwrap().len(), 10);
}

#[test]
fn test_path_dfs_only() {
    transit_graph()
        .args(["path", "Університет", "Парк", "-a", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DFS: Університет -> Торговий центр -> Ринок -> Центр -> Парк",
        ))
        .stdout(predicate::str::contains("BFS").not());
}

#[test]
fn test_path_compare_json() {
    let output = transit_graph()
        .args(["path", "Університет", "Парк", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["hop_difference"], 2);
    assert_eq!(json["same_length"], false);
    assert_eq!(json["bfs"]["path"].as_array().unwrap().len(), 3);
}
