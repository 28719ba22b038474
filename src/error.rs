use crate::collision::Collision;
use snafu::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    // Environment errors
    #[snafu(display(
        "The environment variable HOME needs to be set to your home directory in order to locate the \
         default config file"
    ))]
    HomeNotSet,

    #[snafu(display(
        "The {name} command must be installed and in your path (or pointed to by JERRY_CURL_BIN). \
         Please install {name} to enjoy all of jerry-curl"
    ))]
    ToolNotFound { name: String },

    #[snafu(display("JERRY_CURL_BIN is set to {}, but there is no such file", path.display()))]
    ToolOverrideMissing { path: PathBuf },

    // Configuration I/O errors
    #[snafu(display("Error opening configuration file at {}: {source}", path.display()))]
    ConfigOpen { path: PathBuf, source: std::io::Error },

    #[snafu(display("Error reading configuration file at {}: {source}", path.display()))]
    ConfigRead { path: PathBuf, source: std::io::Error },

    #[snafu(display("Line {line} of configuration file {} is not valid UTF-8", path.display()))]
    ConfigNotUtf8 {
        path: PathBuf,
        line: usize,
        source: std::string::FromUtf8Error,
    },

    #[snafu(display("Unable to create config directory at {}: {source}", path.display()))]
    ConfigDirCreate { path: PathBuf, source: std::io::Error },

    #[snafu(display(
        "Unable to write default config file {}; please check the permissions of its directory: {source}",
        path.display()
    ))]
    ConfigWrite { path: PathBuf, source: std::io::Error },

    // Argument validation errors
    #[snafu(display("Ambiguous command line option(s):\n{}", render_collisions(collisions)))]
    AmbiguousOptions { collisions: Vec<Collision> },

    #[snafu(display("jerry-curl's {option} option requires an argument, such as {option} {example}"))]
    MissingOptionValue { option: String, example: &'static str },

    // Subprocess errors
    #[snafu(display("Failed to start {}: {source}", path.display()))]
    SpawnFailed { path: PathBuf, source: std::io::Error },

    #[snafu(display("Failed to wait for {}: {source}", path.display()))]
    WaitFailed { path: PathBuf, source: std::io::Error },

    // Output errors
    #[snafu(display("Unable to write the curl command to standard output: {source}"))]
    ShowWrite { source: std::io::Error },
}

fn render_collisions(collisions: &[Collision]) -> String {
    collisions
        .iter()
        .map(|c| format!("  * {c}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, Error>;
