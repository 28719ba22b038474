//! Every fatal condition must be reported on stderr with a non-zero exit code, and must never
//! create the config file or run curl.
use crate::utils::JerryCurl;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn repeated_option_is_rejected() {
    let mut jerry = JerryCurl::with_test_fs();

    jerry
        .cmd
        .args(["-c", "a.config", "-c", "b.config"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Option -c used more than once and is ambiguous"))
        .stderr(predicate::str::contains("--cookie-jar"));

    jerry.default_config().assert(predicate::path::missing());
}

#[test]
fn every_collision_is_listed() {
    let mut jerry = JerryCurl::with_test_fs();

    jerry
        .cmd
        .args(["-s", "--show", "-u", "/a", "--url-path", "/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Both option --show and -s"))
        .stderr(predicate::str::contains("Both option --url-path and -u"));
}

#[test]
fn missing_option_value() {
    let mut jerry = JerryCurl::with_test_fs();

    jerry
        .cmd
        .args(["-H", "X: 1", "-c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "jerry-curl's -c option requires an argument, such as -c ./path/to/config",
        ));

    jerry.default_config().assert(predicate::path::missing());
}

#[test]
fn option_value_that_looks_like_a_flag() {
    let mut jerry = JerryCurl::with_test_fs();

    jerry
        .cmd
        .args(["--url-path", "--insecure"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url-path option requires an argument"));
}

#[test]
fn home_not_set() {
    let mut jerry = JerryCurl::with_test_fs();

    jerry
        .cmd
        .env_remove("HOME")
        .arg("-s")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HOME"));
}

#[test]
fn curl_not_found() {
    let mut jerry = JerryCurl::with_test_fs();

    jerry
        .cmd
        .env_remove("JERRY_CURL_BIN")
        .env("PATH", "")
        .arg("-s")
        .assert()
        .failure()
        .stderr(predicate::str::contains("The curl command must be installed"));
}

#[test]
fn missing_curl_override() {
    let mut jerry = JerryCurl::with_test_fs();
    let typo = jerry.test_fs().home.child("bin").child("crul");

    jerry
        .cmd
        .env("JERRY_CURL_BIN", typo.path())
        .arg("-s")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("JERRY_CURL_BIN is set to"))
        .stderr(predicate::str::contains("but there is no such file"));

    jerry.default_config().assert(predicate::path::missing());
}

#[test]
fn config_line_that_is_not_utf8() {
    let mut jerry = JerryCurl::with_test_fs();
    jerry.default_config().write_binary(b"BASE=http://example.test\n--data caf\xe9\n").unwrap();

    jerry
        .cmd
        .arg("-s")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Line 2 of configuration file"))
        .stderr(predicate::str::contains("is not valid UTF-8"));
}

#[test]
fn missing_alternate_config() {
    let mut jerry = JerryCurl::with_test_fs();

    jerry
        .cmd
        .args(["--config", "does-not-exist.config", "-s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error opening configuration file"))
        .stderr(predicate::str::contains("does-not-exist.config"));
}
