//! Integration tests for the nanny binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const MISSING_FEATURE: &str = "definitely-not-a-cpu-feature";

/// A terminal-only, uncolored invocation with its own ledger.
fn nanny(ledger: &PathBuf) -> Command {
    let mut cmd = Command::new(cargo_bin("nanny"));
    cmd.env("NO_COLOR", "1")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .env_remove("LEGAL_DOC_NAME")
        .env_remove("NANNY_LEDGER")
        .env_remove("RUST_LOG")
        .arg("-c")
        .arg("--ledger")
        .arg(ledger);
    cmd
}

/// Like [`nanny`], but run through `sh` with `redirect` applied, so a
/// standard stream can be closed before the binary starts.
#[cfg(target_os = "linux")]
fn nanny_with_redirect(ledger: &PathBuf, redirect: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.env("NO_COLOR", "1")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .env_remove("LEGAL_DOC_NAME")
        .env_remove("NANNY_LEDGER")
        .env_remove("RUST_LOG")
        .arg("-c")
        .arg(format!("exec \"$0\" \"$@\" {}", redirect))
        .arg(cargo_bin("nanny"))
        .arg("-c")
        .arg("--ledger")
        .arg(ledger);
    cmd
}

fn ledger_in(temp: &TempDir) -> PathBuf {
    temp.path().join("config").join("nanny.db")
}

const TELEMETRY_ARGS: [&str; 6] = ["-n", "bar", "-d", "Bar App", "-l", "https://example.com/eula"];

#[test]
fn missing_feature_shows_baseline_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    nanny(&ledger)
        .args(["-n", "foo", "-f", MISSING_FEATURE])
        .assert()
        .code(10)
        .stdout(predicate::str::starts_with("Warning\n\n"))
        .stdout(predicate::str::contains(format!(
            "does not support the \"{}\" feature, which is required by foo",
            MISSING_FEATURE
        )))
        .stdout(predicate::str::contains("Proceed?").not());
    assert!(!ledger.exists());
    Ok(())
}

#[test]
fn accepting_records_consent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    nanny(&ledger)
        .args(TELEMETRY_ARGS)
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bar App may collect your usage data on an opt-out basis, per the Licensing Terms.",
        ))
        .stdout(predicate::str::contains("Proceed? [y/N]"))
        .stdout(predicate::str::contains("You have chosen not to proceed").not());
    assert_eq!(fs::read_to_string(&ledger)?, "bar\n");
    Ok(())
}

#[test]
fn consent_is_remembered() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    fs::create_dir_all(ledger.parent().unwrap())?;
    fs::write(&ledger, "bar\n")?;

    nanny(&ledger)
        .args(TELEMETRY_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(fs::read_to_string(&ledger)?, "bar\n");
    Ok(())
}

#[test]
fn remembered_consent_does_not_need_eula() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    fs::create_dir_all(ledger.parent().unwrap())?;
    fs::write(&ledger, "bar\n")?;

    nanny(&ledger)
        .args(["-n", "bar", "-d", "Bar App"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn declining_leaves_ledger_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    nanny(&ledger)
        .args(TELEMETRY_ARGS)
        .write_stdin("n\n")
        .assert()
        .code(10)
        .stdout(predicate::str::ends_with(
            "You have chosen not to proceed. Exiting...\n",
        ));
    assert!(!ledger.exists());
    Ok(())
}

#[test]
fn eof_declines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    nanny(&ledger)
        .args(TELEMETRY_ARGS)
        .write_stdin("")
        .assert()
        .code(10);
    assert!(!ledger.exists());
    Ok(())
}

#[test]
fn alternative_is_offered() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nanny(&ledger_in(&temp))
        .args(TELEMETRY_ARGS)
        .args(["-a", "Baz", "-k", "baz"])
        .write_stdin("n\n")
        .assert()
        .code(10)
        .stdout(predicate::str::contains(
            "We offer a Telemetry-free alternative, Baz (package: baz).",
        ));
    Ok(())
}

#[test]
fn legal_doc_name_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nanny(&ledger_in(&temp))
        .env("LEGAL_DOC_NAME", "Privacy Policy")
        .args(TELEMETRY_ARGS)
        .write_stdin("n\n")
        .assert()
        .code(10)
        .stdout(predicate::str::contains("per the Privacy Policy."));
    Ok(())
}

#[test]
fn baseline_failure_skips_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    nanny(&ledger)
        .args(TELEMETRY_ARGS)
        .args(["-f", MISSING_FEATURE])
        .write_stdin("y\n")
        .assert()
        .code(10)
        .stdout(predicate::str::contains("may collect your usage data").not());
    assert!(!ledger.exists());
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn closed_stdin_exits_210() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    nanny_with_redirect(&ledger, "0<&-")
        .args(TELEMETRY_ARGS)
        .assert()
        .code(210)
        .stdout(predicate::str::is_empty());
    assert!(!ledger.exists());
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn closed_stdout_exits_209() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    nanny_with_redirect(&ledger, "1>&-")
        .args(["-n", "foo", "-f", MISSING_FEATURE])
        .assert()
        .code(209);
    assert!(!ledger.exists());
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn closed_stdout_never_records_consent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    nanny_with_redirect(&ledger, "1>&-")
        .args(TELEMETRY_ARGS)
        .write_stdin("y\n")
        .assert()
        .code(209);
    assert!(!ledger.exists());
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn closed_stdout_is_reported_before_closed_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nanny_with_redirect(&ledger_in(&temp), "0<&- 1>&-")
        .args(TELEMETRY_ARGS)
        .assert()
        .code(209);
    Ok(())
}

#[test]
fn missing_name_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nanny(&ledger_in(&temp))
        .args(["-f", "avx2"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn missing_description_and_feature_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nanny(&ledger_in(&temp))
        .args(["-n", "bar"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn description_without_eula_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let ledger = ledger_in(&temp);
    nanny(&ledger)
        .args(["-n", "bar", "-d", "Bar App"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("-l"));
    assert!(!ledger.exists());
    Ok(())
}

#[test]
fn unknown_flag_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nanny(&ledger_in(&temp))
        .args(["-n", "bar", "--bogus"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nanny"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--feature"))
        .stdout(predicate::str::contains("--ledger").not());
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nanny"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
