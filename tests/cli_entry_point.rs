use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn bare_invocation_prints_summary() {
    let mut cmd = cargo_bin_cmd!("rulid");
    cmd.env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Rulid 0.0.2 - Build system and package manager for Rust\n")
        .stderr("");
}

#[test]
fn version_flag_reports_package_version() {
    let mut cmd = cargo_bin_cmd!("rulid");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout("rulid 0.0.2\n");
}

#[test]
fn help_shows_description() {
    let mut cmd = cargo_bin_cmd!("rulid");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("Build system and package manager for Rust"))
        .stdout(contains("Usage: rulid"));
}

#[test]
fn unknown_arguments_are_usage_errors() {
    let mut cmd = cargo_bin_cmd!("rulid");
    cmd.arg("build")
        .assert()
        .code(2)
        .stderr(contains("unexpected argument"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let mut cmd = cargo_bin_cmd!("rulid");
    cmd.env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(contains("Rulid 0.0.2"))
        .stderr(contains("resolved entry point"))
        .stderr(contains("rulid::main"));
}
