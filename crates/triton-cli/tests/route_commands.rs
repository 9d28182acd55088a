//! Integration tests for the `route` subcommand.

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/small_galaxy.json")
        .canonicalize()
        .expect("fixture snapshot present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("triton-cli");
    cmd.env("TRITON_SNAPSHOT", fixture_path())
        .env("RUST_LOG", "error")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn blocked_route_reports_no_route_and_succeeds() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Home", "--to", "Target"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No route from Home (1) to Target (4)"));
}

#[test]
fn crossing_foreign_star_when_allowed() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Home", "--to", "Target", "--allow-foreign"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 hops, 12.00 ly, 1 foreign"))
        .stdout(predicate::str::contains("STRT Home (1)"))
        .stdout(predicate::str::contains("JUMP Border (3)"))
        .stdout(predicate::str::contains("GOAL Target (4)"));
}

#[test]
fn cached_graph_gives_same_json_route() {
    let live = prepare_command()
        .args(["--format", "json", "route", "--from", "1", "--to", "4"])
        .arg("--allow-foreign")
        .output()
        .expect("run live route");
    let cached = prepare_command()
        .args(["--format", "json", "route", "--from", "1", "--to", "4"])
        .args(["--allow-foreign", "--cached"])
        .output()
        .expect("run cached route");

    assert!(live.status.success());
    assert_eq!(live.stdout, cached.stdout);

    let value: serde_json::Value = serde_json::from_slice(&live.stdout).expect("valid JSON");
    let hops: Vec<u64> = value["hops"]
        .as_array()
        .expect("hops array")
        .iter()
        .map(|hop| hop["id"].as_u64().expect("hop id"))
        .collect();
    assert_eq!(hops, vec![2, 3, 4]);
    assert_eq!(value["foreign_hops"], 1);
    assert_eq!(value["light_years"], 12.0);
}

#[test]
fn unowned_stars_are_foreign_unless_neutral() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Drifter", "--to", "Outpost"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No route from Drifter (5) to Outpost (6)"));

    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Drifter", "--to", "Outpost", "--unowned-neutral"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 hops, 2.00 ly, 0 foreign"))
        .stdout(predicate::str::contains("GOAL Outpost (6) 2.00 ly"));
}

#[test]
fn unknown_star_is_an_error() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Home", "--to", "Nowhere"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown star 'Nowhere'"));
}

#[test]
fn negative_foreign_weight_is_rejected() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "Home",
        "--to",
        "Target",
        "--allow-foreign",
        "--foreign-weight=-1",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("foreign star weight"));
}

#[test]
fn missing_snapshot_reports_path() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let absent = temp_dir.path().join("absent.json");

    let mut cmd = cargo_bin_cmd!("triton-cli");
    cmd.env("RUST_LOG", "error")
        .arg("--snapshot")
        .arg(&absent)
        .args(["route", "--from", "Home", "--to", "Target"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}
