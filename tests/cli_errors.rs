mod common;

use assert_cmd::Command;
use common::{base_dir, framework_fixture};
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("fmw-select").unwrap()
}

#[test]
fn malformed_set_spec_is_a_usage_error() {
    let td = framework_fixture();
    let dir = base_dir(&td);

    cmd()
        .args(["--set", "notanumber=/sdcard/x.jar", &dir])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn set_spec_without_equals_is_a_usage_error() {
    let td = framework_fixture();
    let dir = base_dir(&td);

    cmd()
        .args(["--set", "/sdcard/x.jar", &dir])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn out_of_range_set_index_fails() {
    let td = framework_fixture();
    let dir = base_dir(&td);

    cmd()
        .args(["--set", "99=/sdcard/x.jar", &dir])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn missing_directory_fails() {
    cmd()
        .arg("/definitely/not/a/framework/dir/")
        .assert()
        .failure()
        .stderr(contains("Could not read framework directory"));
}

#[test]
fn invalid_only_pattern_fails() {
    let td = framework_fixture();
    let dir = base_dir(&td);

    cmd()
        .args(["--only", "[", &dir])
        .assert()
        .failure()
        .stderr(contains("Invalid --only pattern"));
}
