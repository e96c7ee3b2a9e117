//! Integration tests for the parsum CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command running in an empty directory so no repo config is picked up
fn parsum(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("parsum").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("PARSUM_BENCH__TRIALS")
        .env_remove("PARSUM_REDUCE__WORKERS");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parallel array reduction benchmark"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("parsum"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_verify_passes() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .args(["verify", "--workers", "1,3,16", "--size", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checks passed"));
}

#[test]
fn test_verify_rejects_zero_workers() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .args(["verify", "--workers", "0", "--size", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("checks failed"));
}

#[test]
fn test_sum_every_strategy() {
    let dir = TempDir::new().unwrap();
    for strategy in ["sequential", "channel", "shared-counter"] {
        parsum(&dir)
            .args(["sum", "--strategy", strategy, "--workers", "4"])
            .args(["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"])
            .assert()
            .success()
            .stdout(predicate::str::diff("55\n"));
    }
}

#[test]
fn test_sum_clamps_workers_and_handles_negatives() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .args(["sum", "--workers", "4", "42"])
        .assert()
        .success()
        .stdout(predicate::str::diff("42\n"));

    parsum(&dir)
        .args(["sum", "--workers", "2", "--", "-5", "3", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("-3\n"));
}

#[test]
fn test_sum_empty_input() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .args(["sum", "--workers", "3"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn test_sum_rejects_zero_workers() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .args(["sum", "--workers", "0", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_bench_small_array() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .args(["bench", "--size", "2000", "--workers", "2,4", "--trials", "3", "--warmup", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Speedup compared to sequential"))
        .stdout(predicate::str::contains("shared-counter (4 workers)"))
        .stdout(predicate::str::contains("total 2001000"));
}

#[test]
fn test_bench_reads_repo_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("parsum.toml"),
        "[bench]\nsize = 300\nworkers = [3]\ntrials = 1\nwarmup = 0\n",
    )
    .unwrap();

    parsum(&dir)
        .arg("bench")
        .assert()
        .success()
        .stdout(predicate::str::contains("300 elements"))
        .stdout(predicate::str::contains("channel (3 workers)"));
}

#[test]
fn test_config_show_with_custom_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.yaml");
    fs::write(&config_path, "bench:\n  trials: 11\n").unwrap();

    parsum(&dir)
        .args(["config", "show", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"trials\": 11"));
}

#[test]
fn test_config_env_override() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .env("PARSUM_BENCH__TRIALS", "4")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"trials\": 4"));
}

#[test]
fn test_invalid_config_fails_validation() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("parsum.toml"), "[bench]\ntrials = \"many\"\n").unwrap();

    parsum(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn test_config_show_section() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .args(["config", "show", "bench"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"warmup\": 1"))
        .stdout(predicate::str::contains("reduce").not());

    parsum(&dir)
        .args(["config", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration section 'missing'"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    parsum(&dir)
        .args(["--quiet", "version"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("parsum {}\n", env!("CARGO_PKG_VERSION"))));
}
