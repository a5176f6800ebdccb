//! Integration tests for the skein CLI
//!
//! These tests run the skein binary against graph description files and
//! verify output and exit codes.

use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for skein
fn skein() -> Command {
    cargo_bin_cmd!("skein")
}

fn write_graph(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    skein()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: skein"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("eulerian"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn test_version_flag() {
    skein()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skein"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_subcommand_exit_code_2() {
    skein().arg("frobnicate").assert().code(2);
}

#[test]
fn test_missing_file_exit_code_1() {
    skein()
        .args(["info", "/nonexistent/graph.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_invalid_format_exit_code_3() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "bad.txt", "Q\n(1,2)\n");
    skein()
        .arg("info")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("expected graph type"));
}

#[test]
fn test_unknown_vertex_exit_code_3() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "chain.txt", "D\n(A,B)\n(B,C)\n");
    skein()
        .arg("path")
        .arg(&file)
        .args(["A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: Z"));
}

#[test]
fn test_json_error_envelope() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "chain.txt", "D\n(A,B)\n");
    skein()
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\": \"vertex_not_found\""));
}

// ============================================================================
// Info
// ============================================================================

#[test]
fn test_info_human() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "g.txt", "G\n1,2,3\n(1,2)\n(2,3)\n");
    skein()
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: undirected"))
        .stdout(predicate::str::contains("vertices: 3"))
        .stdout(predicate::str::contains("edges: 2"));
}

#[test]
fn test_info_json() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "g.txt", "D\n(1,2,10)\n");
    let output = skein()
        .args(["--format", "json", "info"])
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["directed"], true);
    assert_eq!(value["weighted"], true);
    assert_eq!(value["vertices"], 2);
}

// ============================================================================
// Eulerian and connectivity
// ============================================================================

#[test]
fn test_eulerian_triangle() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "triangle.txt", "G\n1,2,3\n(1,2)\n(2,3)\n(3,1)\n");
    skein()
        .arg("eulerian")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("This graph is Eulerian: true"));
}

#[test]
fn test_eulerian_pendant_edge() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "pendant.txt", "G\n(1,2)\n(2,3)\n(3,1)\n(3,4)\n");
    skein()
        .arg("eulerian")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("This graph is Eulerian: false"));
}

#[test]
fn test_eulerian_rejects_directed_graph() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "d.txt", "D\n(1,2)\n");
    skein()
        .arg("eulerian")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("requires an undirected graph"));
}

#[test]
fn test_connected_true_and_false() {
    let dir = TempDir::new().unwrap();
    let islands = write_graph(&dir, "islands.txt", "G\n(A,B)\n(C,D)\n");
    skein()
        .arg("connected")
        .arg(&islands)
        .assert()
        .success()
        .stdout(predicate::str::contains("This graph is connected: false"));

    let bridged = write_graph(&dir, "bridged.txt", "G\n(A,B)\n(C,D)\n(A,D)\n");
    skein()
        .arg("connected")
        .arg(&bridged)
        .assert()
        .success()
        .stdout(predicate::str::contains("This graph is connected: true"));
}

// ============================================================================
// Paths, cliques, ranking
// ============================================================================

#[test]
fn test_shortest_path_chain() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "chain.txt", "D\n(A,B)\n(B,C)\n(C,D)\n");
    skein()
        .arg("path")
        .arg(&file)
        .args(["A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C -> D"));
}

#[test]
fn test_path_json_reports_hops() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "chain.txt", "D\n(A,B)\n(B,C)\n");
    let output = skein()
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["A", "C"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["found"], true);
    assert_eq!(value["hops"], 2);
    assert_eq!(value["path"][0], "A");
    assert_eq!(value["path"][2], "C");
}

#[test]
fn test_no_path_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "split.txt", "D\n(A,B)\n(C,D)\n");
    skein()
        .arg("path")
        .arg(&file)
        .args(["A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from A to D"));
}

#[test]
fn test_any_path_uses_depth_first() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "dag.txt", "D\n(A,C)\n(A,B)\n(B,C)\n");
    skein()
        .arg("path")
        .arg(&file)
        .args(["A", "C", "--any"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"));
}

#[test]
fn test_clique_with_seed() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(
        &dir,
        "cliques.txt",
        "G\n(B,A)\n(B,C)\n(B,D)\n(B,E)\n(A,C)\n(D,E)\n",
    );
    skein()
        .arg("clique")
        .arg(&file)
        .arg("B")
        .assert()
        .success()
        .stdout(predicate::str::contains("A, B, C"));
}

#[test]
fn test_rank_json_sorted_ascending() {
    let dir = TempDir::new().unwrap();
    let file = write_graph(&dir, "cycle.txt", "D\n(A,B)\n(B,A)\n(C,A)\n");
    let output = skein()
        .args(["--format", "json", "rank"])
        .arg(&file)
        .args(["--iterations", "5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["id"], "C");
    assert_eq!(entries[0]["rank"], 0.0);
}

#[test]
fn test_quiet_suppresses_error_message() {
    skein()
        .args(["--quiet", "info", "/nonexistent/graph.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}
