//! Splitting the command line into wrapper options and curl pass-through arguments.

use crate::{
    Result,
    cli::WrapperFlag,
    collision::CheckedArguments,
    error,
};
use snafu::ensure;
use std::ffi::{OsStr, OsString};

/// A wrapper option recognized on the command line, with its value if it takes one.
///
/// Values are kept exactly as given, even when they are not valid UTF-8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WrapperOption {
    ConfigPath(OsString),
    ShowOnly,
    UrlSuffix(OsString),
}

/// A [`WrapperOption`] and the position of its flag token on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionOccurrence {
    pub position: usize,
    pub option: WrapperOption,
}

/// The result of walking a command line that contained no help request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionedArgs {
    /// Wrapper options in command line order
    pub options: Vec<OptionOccurrence>,

    /// Everything else, in command line order, destined for curl.
    pub passthrough: Vec<OsString>,
}

impl PartitionedArgs {
    /// The alternate config file requested on the command line.  If the option somehow occurs
    /// more than once, the last occurrence wins.
    pub fn config_override(&self) -> Option<&OsStr> {
        self.options.iter().rev().find_map(|occurrence| match &occurrence.option {
            WrapperOption::ConfigPath(path) => Some(path.as_os_str()),
            _ => None,
        })
    }

    pub fn show_only(&self) -> bool {
        self.options
            .iter()
            .any(|occurrence| occurrence.option == WrapperOption::ShowOnly)
    }

    /// The path to append to the base URL, or `""`.  Last occurrence wins.
    pub fn url_suffix(&self) -> &OsStr {
        self.options
            .iter()
            .rev()
            .find_map(|occurrence| match &occurrence.option {
                WrapperOption::UrlSuffix(suffix) => Some(suffix.as_os_str()),
                _ => None,
            })
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Partition {
    /// `-h` or `--help` was seen; nothing after it was examined.
    Help,
    Args(PartitionedArgs),
}

/// Walk the checked command line left to right and separate wrapper options from curl arguments.
///
/// A value-taking option consumes the following token, which must exist and must not start with
/// `-`.  That rule keeps an option from silently swallowing a curl flag that happens to follow it.
pub fn partition(args: CheckedArguments<'_>) -> Result<Partition> {
    let raw = args.raw();
    let mut partitioned = PartitionedArgs::default();
    let mut skip_next = false;

    for (position, token) in raw.tokens() {
        if skip_next {
            skip_next = false;
            continue;
        }

        let Some(flag) = WrapperFlag::parse_os(token) else {
            partitioned.passthrough.push(token.to_owned());
            continue;
        };
        let spelling = token.to_string_lossy();

        let option = match flag {
            WrapperFlag::Help => {
                tracing::debug!(position, "Help requested");
                return Ok(Partition::Help);
            }
            WrapperFlag::Show => WrapperOption::ShowOnly,
            WrapperFlag::Config | WrapperFlag::UrlPath => {
                let value = raw.get(position + 1);
                ensure!(
                    value.is_some_and(|value| !value.as_encoded_bytes().starts_with(b"-")),
                    error::MissingOptionValueSnafu {
                        option: spelling,
                        example: flag.value_example(),
                    }
                );
                let value = value.unwrap_or_default().to_owned();
                skip_next = true;

                if flag == WrapperFlag::Config {
                    WrapperOption::ConfigPath(value)
                } else {
                    WrapperOption::UrlSuffix(value)
                }
            }
        };

        partitioned.options.push(OptionOccurrence { position, option });
    }

    tracing::debug!(
        options = ?partitioned.options,
        passthrough = ?partitioned.passthrough,
        "Partitioned command line"
    );

    Ok(Partition::Args(partitioned))
}
