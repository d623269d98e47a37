use std::io::Write;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::NamedTempFile;

/// Get a Command for transit-graph
pub fn transit_graph() -> Command {
    cargo_bin_cmd!("transit-graph")
}

/// Write a TOML document to a temporary file that lives as long as the handle
pub fn toml_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Two disconnected pairs: A - B and C - D
pub fn two_islands() -> NamedTempFile {
    toml_file(
        r#"
stations = ["A", "B", "C", "D"]

[[connections]]
from = "A"
to = "B"
distance_km = 1.0

[[connections]]
from = "C"
to = "D"
distance_km = 2.0
"#,
    )
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
