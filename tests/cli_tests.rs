//! Integration tests for the graphbench CLI
//!
//! These tests run the graphbench binary and verify its output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for graphbench
fn graphbench() -> Command {
    cargo_bin_cmd!("graphbench")
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    graphbench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphbench"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    graphbench()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphbench"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    graphbench()
        .assert()
        .success()
        .stdout(predicate::str::contains("graphbench --help"));
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_writes_results_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("results.csv");

    graphbench()
        .args(["run", "--runs", "2", "--sizes", "4,6", "--densities", "0.5", "--seed", "7"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("PERFORMANCE TESTING OF GRAPH SEARCH ALGORITHMS"))
        .stdout(predicate::str::contains("Size: 4 Density: 0.5"))
        .stdout(predicate::str::contains("Bellman - Ford:"))
        .stdout(predicate::str::contains("Results have been saved to"));

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "PERFORMANCE TESTING OF GRAPH ALGORITHMS");
    assert_eq!(
        lines[1],
        "size;density;avgDijkstraMs;avgBellmanFordMs;avgBfsMs"
    );
    assert_eq!(lines[2], "# adjacency-matrix");
    assert!(lines[3].starts_with("4;0.5;"));
    assert!(lines[4].starts_with("6;0.5;"));
    assert_eq!(lines[5], "# adjacency-list");
    assert!(lines[6].starts_with("4;0.5;"));

    for record in [lines[3], lines[4], lines[6], lines[7]] {
        let fields: Vec<&str> = record.split(';').collect();
        assert_eq!(fields.len(), 5);
        for timing in &fields[2..] {
            assert!(timing.parse::<f64>().unwrap() >= 0.0);
        }
    }
}

#[test]
fn test_run_single_representation() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("results.csv");

    graphbench()
        .args(["--quiet", "run", "--runs", "1", "--sizes", "3", "--densities", "1"])
        .args(["--representation", "sparse", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("PERFORMANCE TESTING").not());

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("# adjacency-list"));
    assert!(!text.contains("# adjacency-matrix"));
}

#[test]
fn test_run_json_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("results.csv");

    let assert = graphbench()
        .args(["--format", "json", "run", "--runs", "1", "--sizes", "5"])
        .args(["--densities", "0.25,1.0", "--seed", "3", "--output"])
        .arg(&output)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["representation"], "dense");
    assert_eq!(rows[0]["size"], 5);
    assert_eq!(rows[3]["representation"], "sparse");
    assert_eq!(json["seed"], 3);
}

#[test]
fn test_run_records_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("results.csv");

    graphbench()
        .args(["--format", "records", "run", "--runs", "1", "--sizes", "3"])
        .args(["--densities", "0.5", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H graphbench=1 records=1 mode=run"))
        .stdout(predicate::str::contains("R representation=dense size=3 density=0.5"));
}

#[test]
fn test_run_unavailable_sink_exit_code_1() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("no-such-dir").join("results.csv");

    graphbench()
        .args(["run", "--runs", "1", "--sizes", "3", "--output"])
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("result sink unavailable"));
}

#[test]
fn test_run_zero_runs_exit_code_2() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("results.csv");

    graphbench()
        .args(["run", "--runs", "0", "--output"])
        .arg(&output)
        .assert()
        .code(2);
}

#[test]
fn test_run_bad_density_exit_code_2() {
    graphbench()
        .args(["run", "--densities", "1.5"])
        .assert()
        .code(2);
}

#[test]
fn test_run_bad_density_json_envelope() {
    graphbench()
        .args(["--format", "json", "run", "--densities", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_single_vertex() {
    graphbench()
        .args(["--quiet", "show", "--size", "1", "--density", "0"])
        .assert()
        .success()
        .stdout("g.edge('0', '-1', label = '0')\n");
}

#[test]
fn test_show_bfs_on_complete_graph() {
    for representation in ["dense", "sparse"] {
        graphbench()
            .args(["--quiet", "show", "--size", "4", "--density", "1"])
            .args(["--algorithm", "bfs", "--source", "0", "--seed", "5"])
            .args(["--representation", representation])
            .assert()
            .success()
            .stdout("g.edge('0', '1')\ng.edge('0', '2')\ng.edge('0', '3')\n");
    }
}

#[test]
fn test_show_json_output() {
    let assert = graphbench()
        .args(["--format", "json", "show", "--size", "6", "--density", "1"])
        .args(["--algorithm", "bellman-ford", "--source", "2", "--seed", "11"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["algorithm"], "bellman-ford");
    assert_eq!(json["source"], 2);
    assert_eq!(json["edges"], 36);

    let result = json["result"].as_array().unwrap();
    assert_eq!(result.len(), 6);
    assert_eq!(result[2]["distance"], 0);
    assert!(result[2]["predecessor"].is_null());
    for entry in result {
        assert!(entry["distance"].is_i64());
    }
}

#[test]
fn test_show_records_output() {
    graphbench()
        .args(["--format", "records", "show", "--size", "2", "--density", "0"])
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H graphbench=1 records=1 mode=show"))
        .stdout(predicate::str::contains("N vertex=0 distance=0 predecessor=-"))
        .stdout(predicate::str::contains("N vertex=1 distance=inf predecessor=-"));
}

#[test]
fn test_show_source_out_of_range_exit_code_3() {
    graphbench()
        .args(["show", "--size", "3", "--source", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_show_overflowing_size_exit_code_2() {
    graphbench()
        .args(["show", "--size", "4294967296", "--density", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("matrix size overflows"));
}

#[test]
fn test_show_unknown_algorithm_exit_code_2() {
    graphbench()
        .args(["show", "--size", "3", "--algorithm", "astar"])
        .assert()
        .code(2);
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_defaults() {
    let assert = graphbench().arg("config").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let table: toml::Table = toml::from_str(&stdout).unwrap();
    assert_eq!(table.get("runs").and_then(|v| v.as_integer()), Some(100));
    assert_eq!(
        table.get("sizes").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(5)
    );
}

#[test]
fn test_config_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.toml");
    fs::write(&path, "runs = 7\nsizes = [3, 4]\n").unwrap();

    let assert = graphbench()
        .args(["--format", "json", "--config"])
        .arg(&path)
        .arg("config")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["runs"], 7);
    assert_eq!(json["sizes"], serde_json::json!([3, 4]));
    assert_eq!(json["densities"].as_array().unwrap().len(), 4);
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("from-config.csv");
    let path = dir.path().join("bench.toml");
    fs::write(
        &path,
        format!(
            "runs = 1\nsizes = [3]\ndensities = [0.5]\nrepresentations = [\"dense\"]\noutput = {:?}\n",
            output.display().to_string()
        ),
    )
    .unwrap();

    graphbench()
        .arg("--config")
        .arg(&path)
        .args(["--quiet", "run"])
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_config_invalid_values_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.toml");
    fs::write(&path, "densities = [2.0]\n").unwrap();

    graphbench()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .code(2);
}

#[test]
fn test_config_malformed_file_exit_code_1() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.toml");
    fs::write(&path, "runs = [not toml").unwrap();

    graphbench()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
