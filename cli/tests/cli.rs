//! End-to-end tests for the `wildfly-state-monitor` binary.
//!
//! None of these reach Slack: they either fail before monitoring starts or
//! never observe a state change.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &Path, war_path: &Path, extra_app: &str) -> std::path::PathBuf {
    let config = format!(
        r##"
slack:
  api_url: http://127.0.0.1:9/hook
  channel: "#deploy"
wildfly:
  war_path: {}
app:
  log_path: {}
  duration: 1
{extra_app}
"##,
        war_path.display(),
        dir.join("monitor.log").display(),
    );
    let path = dir.join("config.yaml");
    fs::write(&path, config).unwrap();
    path
}

fn bin() -> Command {
    Command::cargo_bin("wildfly-state-monitor").unwrap()
}

#[test]
fn test_version_flag() {
    for flag in ["-v", "--version"] {
        bin()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    bin()
        .arg("--config")
        .arg(temp_dir.path().join("nope.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found config file"));
}

#[test]
fn test_missing_required_field_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "slack:\n  channel: \"#deploy\"\n").unwrap();

    bin()
        .arg("-c")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("require config.slack.api_url"));
}

#[test]
fn test_unknown_notify_marker_fails_before_monitoring() {
    let temp_dir = TempDir::new().unwrap();
    let war_path = temp_dir.path().join("app.war");
    let config = write_config(
        temp_dir.path(),
        &war_path,
        "  notify_marker:\n    - failed\n    - exploded",
    );

    bin().arg("-c").arg(&config).assert().failure();

    let log = fs::read_to_string(temp_dir.path().join("monitor.log")).unwrap();
    assert!(log.contains("exploded"));
    assert!(!log.contains("Start Monitoring"));
}

#[test]
fn test_unreadable_marker_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let war_path = temp_dir.path().join("gone").join("app.war");
    let config = write_config(temp_dir.path(), &war_path, "");

    bin().arg("-c").arg(&config).assert().failure();

    let log = fs::read_to_string(temp_dir.path().join("monitor.log")).unwrap();
    assert!(log.contains("Start Monitoring"));
    assert!(log.contains("End Monitoring"));
}

/// Wait until the log file contains `needle`, so the test acts only after the
/// monitor reached that point.
#[cfg(unix)]
fn wait_for_log(path: &Path, needle: &str) -> String {
    use std::thread;
    use std::time::{Duration, Instant};

    let deadline = Instant::now() + Duration::from_secs(30);
    loop {
        let log = fs::read_to_string(path).unwrap_or_default();
        if log.contains(needle) {
            return log;
        }
        assert!(Instant::now() < deadline, "log never contained {needle:?}: {log}");
        thread::sleep(Duration::from_millis(50));
    }
}

#[cfg(unix)]
#[test]
fn test_sigterm_exits_successfully() {
    use std::process::Command as StdCommand;

    let temp_dir = TempDir::new().unwrap();
    let deployments = temp_dir.path().join("deployments");
    fs::create_dir(&deployments).unwrap();
    fs::write(deployments.join("app.war.deployed"), "").unwrap();
    let config = write_config(temp_dir.path(), &deployments.join("app.war"), "");
    let log_path = temp_dir.path().join("monitor.log");

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("wildfly-state-monitor"))
        .arg("-c")
        .arg(&config)
        .spawn()
        .unwrap();

    // Signal handlers are installed before the loop logs its start.
    wait_for_log(&log_path, "Start Monitoring");

    let kill = StdCommand::new("kill")
        .args(["-TERM", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(kill.success());

    let status = child.wait().unwrap();
    assert!(status.success());

    let log = wait_for_log(&log_path, "End Monitoring");
    assert!(log.contains("received SIGTERM"));
}
