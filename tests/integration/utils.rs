//! Utility functions to help run our CLI as part of a test
use assert_cmd::{Command, cargo::cargo_bin_cmd};
use assert_fs::{TempDir, fixture::ChildPath, prelude::*};

/// Fake curl that prints each argument it receives on its own line, so tests can see exactly how
/// the argument vector was split.
pub(crate) const ECHO_ARGS_CURL: &str = "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done\n";

/// Fake curl that fails the way curl does when a host can't be resolved.
pub(crate) const FAILING_CURL: &str =
    "#!/bin/sh\necho 'progress output'\necho 'curl: (6) Could not resolve host: nowhere.test' >&2\nexit 6\n";

pub(crate) struct TestFs {
    pub(crate) home: TempDir,
    pub(crate) cwd: TempDir,
}

impl TestFs {
    fn new() -> Self {
        let home = TempDir::with_prefix("jerry-curl-home-").unwrap();
        let cwd = TempDir::with_prefix("jerry-curl-cwd-").unwrap();

        Self { home, cwd }
    }
}

/// Represents the `jerry-curl` binary for use in tests.
///
/// The `cmd` field provides helpers for running the binary and asserting on its output.
pub(crate) struct JerryCurl {
    pub(crate) cmd: Command,
    pub(crate) test_fs: Option<TestFs>,
}

impl JerryCurl {
    /// Creates a new `JerryCurl` that locates the bin
    pub(crate) fn find() -> Self {
        let mut cmd = cargo_bin_cmd!("jerry-curl");
        cmd.env_remove("JERRY_CURL_LOG").env_remove("RUST_LOG");

        Self { cmd, test_fs: None }
    }

    /// Construct an isolated `HOME` and working directory for running the command, and point
    /// `JERRY_CURL_BIN` at a placeholder curl that exists but is never meant to be executed.
    ///
    /// Every test that reaches the config stage must use this, otherwise it would read (or
    /// create!) the config file of whoever is running the tests.
    pub(crate) fn with_test_fs() -> Self {
        let mut me = Self::find();
        let test_fs = TestFs::new();

        let curl = test_fs.home.child("bin").child("curl");
        curl.touch().unwrap();

        me.cmd
            .env("HOME", test_fs.home.path())
            .env("JERRY_CURL_BIN", curl.path())
            .current_dir(test_fs.cwd.path());
        me.test_fs = Some(test_fs);
        me
    }

    /// Like [`Self::with_test_fs`], but with a fake curl script that will actually be run.
    #[cfg(unix)]
    pub(crate) fn with_fake_curl(script: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let mut me = Self::with_test_fs();
        let curl = me.fake_curl_path();
        curl.write_str(script).unwrap();
        std::fs::set_permissions(curl.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

        me.cmd.env("JERRY_CURL_BIN", curl.path());
        me
    }

    pub(crate) fn test_fs(&self) -> &TestFs {
        self.test_fs.as_ref().expect("test_fs not set")
    }

    pub(crate) fn fake_curl_path(&self) -> ChildPath {
        self.test_fs().home.child("bin").child("fake-curl")
    }

    /// The default config file inside the isolated home directory
    pub(crate) fn default_config(&self) -> ChildPath {
        self.test_fs()
            .home
            .child(".jerry-curl")
            .child("jerry-curl.config")
    }

    /// Write the default config file.
    pub(crate) fn write_default_config(&self, contents: &str) {
        self.default_config().write_str(contents).unwrap();
    }

    /// The placeholder curl path, as it appears in `--show` output.
    pub(crate) fn placeholder_curl(&self) -> String {
        self.test_fs()
            .home
            .child("bin")
            .child("curl")
            .path()
            .display()
            .to_string()
    }
}
