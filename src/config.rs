use crate::{Result, error};
use snafu::{OptionExt, ResultExt};
use std::{
    ffi::{OsStr, OsString},
    fs::File,
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

/// Directory under `$HOME` holding the default config file
pub const CONFIG_DIR_NAME: &str = ".jerry-curl";

pub const CONFIG_FILE_NAME: &str = "jerry-curl.config";

/// Environment variable naming an explicit curl binary, bypassing the `PATH` search.
pub const TOOL_OVERRIDE_VAR: &str = "JERRY_CURL_BIN";

/// The only key/value line recognized in a config file.
const BASE_PREFIX: &str = "BASE=";

/// Written to the default location the first time `jerry-curl` runs without a config file.
const DEFAULT_CONFIG: &str = r#"# Some examples of items to put in this config file
#
# For repeated requests to the same URL:
# BASE=http://www.example.com
#    NOTE:  BASE is the only config option written as a key=value pair.
#           All others are simply one command line option per line.
#           Make sure the line starts with "BASE="
#
# Proxy curl commands:
# --proxy 127.0.0.1:8080
#
# Allow insecure SSL:
# --insecure
#
# Include headers in the output:
# --include
#
# Set an Auth header:
# -H "X-Auth-Token: 55555555-5555-5555-5555-555555555555"
#
# Set accepts header:
# -H "Accept: application/json"
#
# Set content-type header:
# -H "Content-Type: application/json"
#
"#;

/// The parts of the process environment `jerry-curl` depends on.
///
/// This is captured exactly once, at process start, and passed down explicitly.  Nothing else in
/// the crate reads environment variables, which keeps everything below the entry point testable
/// without mutating the real environment.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    /// `$HOME`, used to locate the default config file.  Empty is treated as unset.
    pub home: Option<PathBuf>,

    /// `$PATH`, searched for the curl binary
    pub path: Option<OsString>,

    pub cwd: Option<PathBuf>,

    /// `$JERRY_CURL_BIN`, an explicit curl binary to use instead of searching `path`.
    pub tool_override: Option<PathBuf>,
}

impl Environment {
    pub fn capture() -> Self {
        Self {
            home: std::env::var_os("HOME")
                .filter(|home| !home.is_empty())
                .map(PathBuf::from),
            path: std::env::var_os("PATH"),
            cwd: std::env::current_dir().ok(),
            tool_override: std::env::var_os(TOOL_OVERRIDE_VAR)
                .filter(|tool| !tool.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Where the config file for this invocation lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigLocation {
    /// `$HOME/.jerry-curl/jerry-curl.config`
    Default(PathBuf),

    /// A file named with `-c` / `--config`
    Override(PathBuf),
}

impl ConfigLocation {
    /// Pick the config file to use.
    ///
    /// A non-empty `override_path` always wins; a leading `~` in it is expanded against the
    /// captured home directory (when there is one).  Otherwise the default location is used, and
    /// that requires `HOME` to be set.
    ///
    /// A path that is not valid UTF-8 is used as given, without tilde expansion.
    pub fn resolve(override_path: Option<&OsStr>, env: &Environment) -> Result<Self> {
        if let Some(path) = override_path.filter(|path| !path.is_empty()) {
            let path = match path.to_str() {
                Some(path) => PathBuf::from(
                    shellexpand::tilde_with_context(path, || env.home.as_deref().and_then(Path::to_str))
                        .into_owned(),
                ),
                None => PathBuf::from(path),
            };
            return Ok(Self::Override(path));
        }

        let home = env.home.as_ref().context(error::HomeNotSetSnafu)?;
        Ok(Self::Default(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Default(path) | Self::Override(path) => path,
        }
    }
}

/// Create the default config file, with commented examples, if it does not exist yet.
///
/// Only the default location is ever initialized; a file named on the command line is the user's
/// responsibility.  Returns `true` if a file was created.
pub fn ensure_default_config(location: &ConfigLocation) -> Result<bool> {
    let ConfigLocation::Default(path) = location else {
        return Ok(false);
    };

    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent() {
        if !dir.is_dir() {
            create_private_dir(dir).context(error::ConfigDirCreateSnafu { path: dir })?;
        }
    }

    write_private_file(path, DEFAULT_CONFIG).context(error::ConfigWriteSnafu { path: path.as_path() })?;

    tracing::info!("Created default config file at {}", path.display());

    Ok(true)
}

fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(dir)
}

fn write_private_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)?.write_all(contents.as_bytes())
}

/// The contents of a config file: the base URL and the extra curl arguments, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigRecord {
    /// Value of the `BASE=` line, or empty if there is none
    pub base: String,

    /// Every other meaningful line, one curl argument per line.
    pub extras: Vec<String>,
}

impl ConfigRecord {
    /// Read and parse the config file at `location`.
    ///
    /// The file is only held open for the duration of this call.
    pub fn load(location: &ConfigLocation) -> Result<Self> {
        let path = location.path();
        tracing::debug!("Loading config from {}", path.display());

        let file = File::open(path).context(error::ConfigOpenSnafu { path })?;
        let record = Self::parse(BufReader::new(file), path)?;

        tracing::debug!(base = %record.base, extras = ?record.extras, "Loaded config");

        Ok(record)
    }

    /// Parse config file contents.
    ///
    /// - Lines starting with `#` are comments, empty lines are skipped.
    /// - A line starting with `BASE=` sets the base URL to the rest of the line; a later `BASE=`
    ///   line replaces an earlier one.
    /// - Any other line is one curl argument, taken verbatim apart from its line ending.  That
    ///   includes a line holding nothing but spaces.
    ///
    /// `path` is only used to describe errors.  Every line must be valid UTF-8.
    pub fn parse<R: BufRead>(mut reader: R, path: &Path) -> Result<Self> {
        let mut record = Self::default();
        let mut buf = Vec::new();
        let mut line_number: usize = 0;

        while reader
            .read_until(b'\n', &mut buf)
            .context(error::ConfigReadSnafu { path })?
            > 0
        {
            line_number += 1;
            let line = String::from_utf8(std::mem::take(&mut buf)).context(error::ConfigNotUtf8Snafu {
                path,
                line: line_number,
            })?;
            record.apply_line(&line);
        }

        Ok(record)
    }

    fn apply_line(&mut self, line: &str) {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.starts_with('#') || line.is_empty() {
            return;
        }

        match line.strip_prefix(BASE_PREFIX) {
            Some(base) => {
                if !self.base.is_empty() {
                    tracing::debug!(previous = %self.base, "Later BASE= line replaces earlier one");
                }
                self.base = base.to_string();
            }
            None => self.extras.push(line.to_string()),
        }
    }
}
