//! End-to-end tests for the verup CLI
//!
//! These tests verify:
//! - Text and JSON output for single artifacts and batches
//! - Policy flags (segments, snapshots, downgrade, target, skip-resolution)
//! - Exit codes and error messages for invalid input

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn verup() -> Command {
    let mut cmd = Command::cargo_bin("verup").unwrap();
    cmd.env_remove("VERUP_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

mod single_artifact {
    use super::*;

    #[test]
    fn test_selects_newest_release() {
        verup()
            .args(["--current", "1.0", "1.1", "2.0", "2.1-SNAPSHOT"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1.0 -> 2.0 [major]"));
    }

    #[test]
    fn test_already_latest() {
        verup()
            .args(["--current", "2.0", "--target", "2.0", "1.0", "2.0", "--name", "junit"])
            .assert()
            .success()
            .stdout(predicate::str::contains("junit 2.0 (latest)"));
    }

    #[test]
    fn test_no_major_updates() {
        verup()
            .args(["--current", "1.2.3", "--no-major-updates", "1.2.4", "1.3.0", "2.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1.2.3 -> 1.3.0 [minor]"));
    }

    #[test]
    fn test_no_minor_updates() {
        verup()
            .args(["--current", "1.2.3", "--no-minor-updates", "1.2.4", "1.3.0", "2.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1.2.3 -> 1.2.4 [incremental]"));
    }

    #[test]
    fn test_allow_snapshots() {
        verup()
            .args(["--current", "1.0", "--allow-snapshots", "1.1-SNAPSHOT"])
            .assert()
            .success()
            .stdout(predicate::str::contains("-> 1.1-SNAPSHOT"));
    }

    #[test]
    fn test_snapshots_excluded_by_default() {
        verup()
            .args(["--current", "1.0", "1.1-SNAPSHOT", "1.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("version 1.0 (no suitable version)"));
    }

    #[test]
    fn test_respelled_current_is_not_rewritten() {
        verup()
            .args(["--current", "1.0", "0.9", "1.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("->").not());
    }

    #[test]
    fn test_target_range() {
        verup()
            .args(["--current", "1.0", "--target", "[1.5,2.0)", "1.4", "1.5", "1.9", "2.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1.0 -> 1.9"));
    }

    #[test]
    fn test_downgrade() {
        verup()
            .args(["--current", "2.0", "--target", "1.5", "--allow-downgrade", "1.5", "2.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2.0 -> 1.5"));
    }

    #[test]
    fn test_skip_resolution() {
        verup()
            .args(["--current", "1.0", "--target", "7.0", "--skip-resolution"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1.0 -> 7.0"));
    }

    #[test]
    fn test_force_update() {
        verup()
            .args(["--current", "2.0", "--target", "2.0", "--force-update", "1.0", "2.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2.0 -> 2.0 [same]"));
    }

    #[test]
    fn test_candidates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("versions.txt");
        fs::write(&path, "# known versions\n1.0\n1.1\n1.2-rc1\n").unwrap();

        verup()
            .args(["--current", "1.0", "--candidates-file"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("1.0 -> 1.2-rc1"));
    }

    #[test]
    fn test_candidates_from_stdin() {
        verup()
            .args(["--current", "1.0", "--candidates-file", "-"])
            .write_stdin("1.0\n1.3\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("1.0 -> 1.3"));
    }

    #[test]
    fn test_quiet() {
        verup()
            .args(["--current", "1.0", "-q", "1.1"])
            .assert()
            .success()
            .stdout(predicate::eq("1 updated\n"));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        verup()
            .args(["--current", "1.0", "--verbose", "0.9", "1.1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Available updates:"))
            .stderr(predicate::str::contains("dropped: older than current"));
    }
}

mod json_output {
    use super::*;

    #[test]
    fn test_json_schema() {
        let parsed = json_stdout(verup().args([
            "--current", "4.12", "--name", "junit", "--json", "4.13", "4.13.2", "5.0-M1",
        ]));

        assert_eq!(parsed["summary"]["updates"], 1);
        assert_eq!(parsed["summary"]["skips"], 0);
        let artifact = &parsed["artifacts"][0];
        assert_eq!(artifact["name"], "junit");
        assert_eq!(artifact["current"], "4.12");
        assert_eq!(artifact["status"], "update");
        assert_eq!(artifact["new_version"], "5.0-M1");
        assert_eq!(artifact["segment"], "major");
    }

    #[test]
    fn test_batch_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batch.json");
        fs::write(
            &path,
            r#"[
                {"name": "a", "current": "1.0", "versions": ["1.0", "1.0.1", "1.1"]},
                {"name": "b", "current": "2.0", "versions": ["1.0", "2.0"]},
                {"name": "c", "current": "1.0", "versions": ["1.0", "1.5", "3.0"], "target": "[1.0,2.0)"}
            ]"#,
        )
        .unwrap();

        let parsed = json_stdout(
            verup()
                .args(["--json", "--verbose", "--no-minor-updates", "--batch"])
                .arg(&path),
        );

        assert_eq!(parsed["summary"]["updates"], 1);
        assert_eq!(parsed["summary"]["skips"], 2);
        assert_eq!(parsed["artifacts"][0]["new_version"], "1.0.1");
        assert_eq!(parsed["artifacts"][0]["finest_update"], "incremental");
        assert_eq!(parsed["artifacts"][1]["reason"], "no_suitable_version");
        assert_eq!(parsed["artifacts"][2]["reason"], "already_latest");
        assert_eq!(parsed["summary"]["available"]["up_to_date"], 1);
        assert_eq!(parsed["summary"]["available"]["incremental"], 1);
        assert_eq!(parsed["summary"]["available"]["minor"], 1);
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_missing_current() {
        verup()
            .args(["1.0"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("missing required option: --current"));
    }

    #[test]
    fn test_no_candidates() {
        verup()
            .args(["--current", "1.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no candidate versions"));
    }

    #[test]
    fn test_malformed_target() {
        verup()
            .args(["--current", "1.0", "--target", "[1.0,2.0", "1.1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("malformed version range"));
    }

    #[test]
    fn test_skip_resolution_without_target() {
        verup()
            .args(["--current", "1.0", "--skip-resolution", "1.1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--skip-resolution"));
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        verup()
            .args(["--current", "1.0", "-q", "--verbose", "1.1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("conflicting options"));
    }

    #[test]
    fn test_missing_candidates_file() {
        verup()
            .args(["--current", "1.0", "--candidates-file", "/nonexistent/versions.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn test_invalid_batch_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batch.json");
        fs::write(&path, "not json").unwrap();

        verup()
            .arg("--batch")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse JSON"));
    }
}
