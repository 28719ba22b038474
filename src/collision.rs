//! Detection of ambiguous wrapper option usage.
//!
//! Several of `jerry-curl`'s option spellings are also curl options (`-c`, `--config`, `-s`,
//! `-u`).  A user who writes one of them twice almost certainly meant one occurrence for curl, and
//! there is no way to tell which.  Rather than guess, every invocation is checked up front and
//! rejected with a list of every problem found, before any config file is read or any process is
//! started.

use crate::{
    Result,
    cli::{RawArguments, WrapperFlag},
    error,
};
use snafu::ensure;
use std::fmt;

/// Wrapper options subject to the checks.  `--help` is excluded since it never reaches curl.
const CHECKED_FLAGS: [WrapperFlag; 3] = [WrapperFlag::Config, WrapperFlag::Show, WrapperFlag::UrlPath];

/// One ambiguous use of a wrapper option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    /// The same exact spelling appeared two or more times.
    Repeated {
        spelling: &'static str,
        curl_alternative: Option<&'static str>,
    },

    /// Both the short and the long spelling of one option were used.
    AliasPair { short: &'static str, long: &'static str },
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repeated {
                spelling,
                curl_alternative: Some(alternative),
            } => write!(
                f,
                "Option {spelling} used more than once and is ambiguous. If you want the curl version, \
                 use {alternative} instead"
            ),
            Self::Repeated {
                spelling,
                curl_alternative: None,
            } => write!(
                f,
                "Option {spelling} used more than once and is ambiguous. jerry-curl accepts it only once"
            ),
            Self::AliasPair { short, long } => write!(
                f,
                "Both option {long} and {short} used and is ambiguous. jerry-curl accepts either {long} \
                 OR {short} but not both"
            ),
        }
    }
}

/// Proof that a [`RawArguments`] passed the collision check.
///
/// The partitioner only accepts this type, so it is impossible to split a command line that has
/// not been checked.
#[derive(Clone, Copy, Debug)]
pub struct CheckedArguments<'a>(&'a RawArguments);

impl<'a> CheckedArguments<'a> {
    pub fn raw(&self) -> &'a RawArguments {
        self.0
    }
}

/// Scan `raw` for repeated spellings and short/long alias pairs.
///
/// All violations are collected into a single [`Error::AmbiguousOptions`](crate::Error) so the
/// user can fix everything in one go.
pub fn check(raw: &RawArguments) -> Result<CheckedArguments<'_>> {
    let count = |spelling: &str| raw.tokens().filter(|(_, token)| *token == spelling).count();

    let mut collisions = Vec::new();

    for flag in CHECKED_FLAGS {
        for spelling in [flag.long(), flag.short()] {
            if count(spelling) >= 2 {
                collisions.push(Collision::Repeated {
                    spelling,
                    curl_alternative: curl_alternative(spelling),
                });
            }
        }
    }

    for flag in CHECKED_FLAGS {
        if count(flag.long()) >= 1 && count(flag.short()) >= 1 {
            collisions.push(Collision::AliasPair {
                short: flag.short(),
                long: flag.long(),
            });
        }
    }

    tracing::trace!(?collisions, "Collision check complete");

    ensure!(collisions.is_empty(), error::AmbiguousOptionsSnafu { collisions });

    Ok(CheckedArguments(raw))
}

/// The spelling a user should reach for when they meant curl's meaning of a wrapper option.
fn curl_alternative(spelling: &str) -> Option<&'static str> {
    match spelling {
        "--config" => Some("-K"),
        "-c" => Some("--cookie-jar <file name>"),
        "-s" => Some("--silent"),
        "-u" => Some("--user <user:password>"),
        _ => None,
    }
}
