//! Locating and running curl.
//!
//! Unlike a launcher that hands the terminal over to its child, `jerry-curl` stays in the middle:
//! curl's standard output is passed straight through as it is produced, but its standard error is
//! held back and only shown, under a banner, if curl fails.

use crate::{Result, assembler::FinalCommand, config::Environment, error};
use snafu::{OptionExt, ResultExt, ensure};
use std::{
    ffi::OsString,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

/// Name of the wrapped tool.
pub const TOOL_NAME: &str = "curl";

/// Printed before curl's buffered standard error when it fails.
pub const FAILURE_BANNER: &str = "A curl error occurred:";

/// Find the curl binary.
///
/// An explicit override from the environment always wins, and must point at an existing file.
/// Otherwise `curl` is looked up on the captured `PATH`.
pub fn find_tool(env: &Environment) -> Result<PathBuf> {
    if let Some(path) = &env.tool_override {
        ensure!(path.exists(), error::ToolOverrideMissingSnafu { path });
        tracing::debug!("Using curl override at {}", path.display());
        return Ok(path.clone());
    }

    let cwd = env.cwd.clone().unwrap_or_default();
    which::which_in(TOOL_NAME, env.path.as_ref(), cwd)
        .ok()
        .inspect(|path| tracing::debug!("Found curl at {}", path.display()))
        .context(error::ToolNotFoundSnafu { name: TOOL_NAME })
}

/// Write the show-only output for `command`.
pub fn show(tool: &Path, command: &FinalCommand, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Here is the curl command which would run:\n{}",
        command.display_line(&tool.to_string_lossy())
    )
    .and_then(|()| out.flush())
    .context(error::ShowWriteSnafu)
}

/// How a curl run ended.
#[derive(Debug)]
pub struct ToolOutcome {
    pub status: ExitStatus,

    /// Everything curl wrote to its standard error
    pub stderr: Vec<u8>,
}

impl ToolOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// The exit code the wrapper should finish with.  A curl killed by a signal counts as `1`.
    pub fn exit_code(&self) -> i32 {
        self.status.code().unwrap_or(1)
    }

    /// Write the failure banner and the captured standard error.
    pub fn report_failure(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{FAILURE_BANNER}")?;
        writeln!(out)?;
        out.write_all(&self.stderr)?;
        if !self.stderr.ends_with(b"\n") {
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Run curl with `args` and wait for it.
///
/// The child inherits our standard input and standard output; only standard error is captured.
pub fn run(tool: &Path, args: &[OsString]) -> Result<ToolOutcome> {
    tracing::debug!(?args, "Running {}", tool.display());

    let child = Command::new(tool)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .spawn()
        .context(error::SpawnFailedSnafu { path: tool })?;

    let output = child
        .wait_with_output()
        .context(error::WaitFailedSnafu { path: tool })?;

    tracing::debug!(status = %output.status, "curl finished");

    Ok(ToolOutcome {
        status: output.status,
        stderr: output.stderr,
    })
}
