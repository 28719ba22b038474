pub mod assembler;
pub mod cli;
pub mod collision;
pub mod config;
pub mod error;
pub(crate) mod logging;
pub mod partition;
pub mod runner;

use assembler::FinalCommand;
use cli::RawArguments;
use config::{ConfigLocation, ConfigRecord, Environment};
pub use error::{Error, Result};
use partition::Partition;
use std::path::PathBuf;

/// Re-export of the snafu [`snafu::Report`] type so that callers can refer to this type without
/// taking an explicit snafu dep
pub use snafu::Report as SnafuReport;

/// What a fully validated invocation of `jerry-curl` amounts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Plan {
    /// Print the help text and stop
    Help,

    /// Run (or with `--show`, just print) curl with the assembled command.
    Curl { tool: PathBuf, command: FinalCommand },
}

/// Turn a command line into a [`Plan`], without running anything.
///
/// The steps happen in a fixed order: the collision check and the partitioning come first, so a
/// malformed command line is rejected before the filesystem is touched.  After that curl is
/// located, the default config file is created if this is the first run, the config is loaded and
/// the final command assembled.
pub fn plan(raw: &RawArguments, env: &Environment) -> Result<Plan> {
    let checked = collision::check(raw)?;

    let partitioned = match partition::partition(checked)? {
        Partition::Help => return Ok(Plan::Help),
        Partition::Args(partitioned) => partitioned,
    };

    let tool = runner::find_tool(env)?;

    let location = ConfigLocation::resolve(partitioned.config_override(), env)?;
    config::ensure_default_config(&location)?;
    let config = ConfigRecord::load(&location)?;

    let command = assembler::assemble(&partitioned, &config);

    Ok(Plan::Curl { tool, command })
}

/// Main entry point for `jerry-curl`.
///
/// Validation failures are reported by [`snafu::report`] on stderr with a non-zero exit code.
/// When curl itself runs, this function does not return: the process exits with curl's exit code,
/// after printing curl's captured stderr if it failed.
#[snafu::report]
pub fn jerry_curl_main() -> Result<()> {
    logging::init();

    let raw = RawArguments::capture();
    let env = Environment::capture();

    match plan(&raw, &env)? {
        Plan::Help => {
            print!("{}", cli::help_text());
            Ok(())
        }
        Plan::Curl { tool, command } if command.show_only => {
            runner::show(&tool, &command, &mut std::io::stdout().lock())
        }
        Plan::Curl { tool, command } => {
            let outcome = runner::run(&tool, &command.args)?;

            if !outcome.success() {
                // stderr is also where an error report would go, so there is nowhere left to
                // complain to; curl's exit code still goes through
                let _ = outcome.report_failure(&mut std::io::stderr().lock());
            }

            #[allow(clippy::exit)]
            std::process::exit(outcome.exit_code())
        }
    }
}
