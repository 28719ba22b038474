//! Tests for `--show`, which prints the assembled curl command instead of running it.
//!
//! These exercise the whole pipeline, config file included, without needing a real curl.
use crate::utils::JerryCurl;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn show_merges_config_and_command_line() {
    let mut jerry = JerryCurl::with_test_fs();
    jerry.write_default_config("# my defaults\nBASE=http://example.test\n--insecure\n");

    let expected = format!(
        "Here is the curl command which would run:\n{} --insecure -H X: 1 http://example.test/api/v1\n",
        jerry.placeholder_curl()
    );

    jerry
        .cmd
        .args(["--show", "-H", "X: 1", "-u", "/api/v1"])
        .assert()
        .success()
        .stdout(predicate::eq(expected))
        .stderr(predicate::str::is_empty());
}

#[test]
fn show_requotes_double_quotes() {
    let mut jerry = JerryCurl::with_test_fs();
    jerry.write_default_config("BASE=http://example.test\n");

    jerry
        .cmd
        .args(["-s", "-H", r#"X: "quoted""#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#" -H 'X: "quoted"' http://example.test"#));
}

#[test]
fn show_with_alternate_config() {
    let mut jerry = JerryCurl::with_test_fs();
    jerry.write_default_config("BASE=http://default.test\n");

    let alt = jerry.test_fs().cwd.child("alt.config");
    alt.write_str("BASE=http://alt.test\n--compressed\n").unwrap();

    jerry
        .cmd
        .args(["--config", "alt.config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--compressed http://alt.test"))
        .stdout(predicate::str::contains("default.test").not());
}

#[test]
fn first_run_creates_default_config() {
    let mut jerry = JerryCurl::with_test_fs();

    jerry
        .cmd
        .args(["-s", "https://example.test"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" https://example.test\n"));

    jerry
        .default_config()
        .assert(predicate::str::contains("# BASE=http://www.example.com"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(jerry.default_config().path())
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn alternate_config_does_not_trigger_first_run() {
    let mut jerry = JerryCurl::with_test_fs();

    let alt = jerry.test_fs().cwd.child("alt.config");
    alt.write_str("BASE=http://alt.test\n").unwrap();

    jerry
        .cmd
        .args(["-c", "alt.config", "-s"])
        .assert()
        .success();

    jerry.default_config().assert(predicate::path::missing());
}
