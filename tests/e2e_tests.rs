//! End-to-end tests exercising the compiled binary.
//!
//! The long-running timer loop itself is covered by the integration tests;
//! here we verify the CLI surface: help/version output, completion
//! generation, argument rejection, and the startup prompt's cancel path.

use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

fn tritimer() -> Command {
    let mut cmd = Command::cargo_bin("tritimer").unwrap();
    cmd.timeout(Duration::from_secs(10));
    cmd
}

// ============================================================================
// Help / version / completions
// ============================================================================

#[test]
fn help_lists_subcommands() {
    tritimer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Run the three timers"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn run_help_lists_flags() {
    tritimer()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--interval"))
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--no-sound"));
}

#[test]
fn version_flag_works() {
    tritimer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tritimer"));
}

#[test]
fn completions_bash_generates_script() {
    tritimer()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tritimer"));
}

// ============================================================================
// Argument rejection
// ============================================================================

#[test]
fn rejects_out_of_range_target() {
    tritimer()
        .args(["run", "--target", "2500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn rejects_non_numeric_target() {
    tritimer()
        .args(["run", "--target", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number"));
}

#[test]
fn rejects_zero_interval() {
    tritimer()
        .args(["run", "--interval", "0"])
        .assert()
        .failure();
}

#[test]
fn rejects_unknown_subcommand() {
    tritimer().arg("unknown").assert().failure();
}

// ============================================================================
// Startup prompt
// ============================================================================

/// Cancelling the prompt (EOF on stdin) is a normal exit, not an error.
#[test]
fn prompt_cancel_exits_cleanly() {
    tritimer()
        .arg("run")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target time (HHMM):"));
}

/// An empty line cancels the same way EOF does.
#[test]
fn prompt_empty_line_exits_cleanly() {
    tritimer().arg("run").write_stdin("\n").assert().success();
}

/// Invalid entries are rejected with a reason and re-prompted; cancelling
/// afterwards still exits cleanly.
#[test]
fn prompt_rejects_invalid_entry_then_cancels() {
    tritimer()
        .arg("run")
        .write_stdin("9999\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("out of range"));
}

/// With no subcommand at all, the prompt still appears (run is the default).
#[test]
fn default_command_prompts_for_target() {
    tritimer()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target time (HHMM):"));
}
