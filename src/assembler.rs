//! Assembly of the final curl argument vector.

use crate::{config::ConfigRecord, partition::PartitionedArgs};
use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
};

/// The arguments curl will be invoked with, and whether to only display them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalCommand {
    pub args: Vec<OsString>,
    pub show_only: bool,
}

impl FinalCommand {
    /// Render the command as a single line, the way `--show` displays it.
    ///
    /// This is for people to read; bytes that are not valid UTF-8 are shown as `U+FFFD`.
    pub fn display_line(&self, tool: &str) -> String {
        std::iter::once(Cow::Borrowed(tool))
            .chain(self.args.iter().map(|arg| arg.to_string_lossy()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Combine config extras, the command line pass-through arguments and the URL.
///
/// The order is always `extras ++ passthrough ++ [base + suffix]`.  The URL is a plain string
/// concatenation; no attempt is made to validate it or normalize slashes.  When both the base and
/// the suffix are empty no URL argument is added, leaving the user free to give curl a URL among
/// the pass-through arguments.
pub fn assemble(partitioned: &PartitionedArgs, config: &ConfigRecord) -> FinalCommand {
    let mut url = OsString::from(&config.base);
    url.push(partitioned.url_suffix());

    let args: Vec<OsString> = config
        .extras
        .iter()
        .map(OsString::from)
        .chain(
            partitioned
                .passthrough
                .iter()
                .map(|arg| requote(arg).into_owned()),
        )
        .chain((!url.is_empty()).then_some(url))
        .collect();

    let command = FinalCommand {
        args,
        show_only: partitioned.show_only(),
    };

    tracing::debug!(args = ?command.args, show_only = command.show_only, "Assembled curl command");

    command
}

/// Wrap an argument containing a double quote in single quotes.
fn requote(arg: &OsStr) -> Cow<'_, OsStr> {
    if arg.as_encoded_bytes().contains(&b'"') {
        let mut quoted = OsString::with_capacity(arg.len() + 2);
        quoted.push("'");
        quoted.push(arg);
        quoted.push("'");
        Cow::Owned(quoted)
    } else {
        Cow::Borrowed(arg)
    }
}
