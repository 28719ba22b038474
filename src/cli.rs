use clap::{Arg, ArgAction, Command};
use std::ffi::{OsStr, OsString};

/// The command line exactly as it was supplied, including the program name at position 0.
///
/// Captured once at process start and never modified afterwards.  All later stages refer to
/// tokens by their position in this list.  Tokens are kept as [`OsString`] so that arguments which
/// are not valid UTF-8 still reach curl byte for byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawArguments(Vec<OsString>);

impl RawArguments {
    /// Capture the current process's command line.
    pub fn capture() -> Self {
        Self::from_args(std::env::args_os())
    }

    /// Build from an arbitrary list of tokens.  The first token is taken to be the program name.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self(args.into_iter().map(Into::into).collect())
    }

    /// Every token after the program name, paired with its position on the command line.
    pub fn tokens(&self) -> impl Iterator<Item = (usize, &OsStr)> {
        self.0.iter().map(OsString::as_os_str).enumerate().skip(1)
    }

    pub fn get(&self, position: usize) -> Option<&OsStr> {
        self.0.get(position).map(OsString::as_os_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The options that `jerry-curl` consumes itself instead of forwarding them to curl.
///
/// Each has exactly one short and one long spelling, and only exact-token matches count: there
/// is no `--config=FILE` or `-cFILE` form, because those would be indistinguishable from curl's
/// own option syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrapperFlag {
    Config,
    Show,
    UrlPath,
    Help,
}

impl WrapperFlag {
    pub const ALL: [Self; 4] = [Self::Config, Self::Show, Self::UrlPath, Self::Help];

    pub const fn short(self) -> &'static str {
        match self {
            Self::Config => "-c",
            Self::Show => "-s",
            Self::UrlPath => "-u",
            Self::Help => "-h",
        }
    }

    pub const fn long(self) -> &'static str {
        match self {
            Self::Config => "--config",
            Self::Show => "--show",
            Self::UrlPath => "--url-path",
            Self::Help => "--help",
        }
    }

    /// Whether the flag must be followed by a value token.
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::Config | Self::UrlPath)
    }

    /// Example value shown when the user forgets to supply one.
    pub(crate) const fn value_example(self) -> &'static str {
        match self {
            Self::Config => "./path/to/config",
            Self::UrlPath => "/path/to/add/to/url",
            Self::Show | Self::Help => "",
        }
    }

    /// Look up the flag spelled exactly as `token`, if any.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.short() == token || flag.long() == token)
    }

    /// Like [`Self::parse`], for a raw command line token.  A token that is not valid UTF-8 is
    /// never a wrapper flag.
    pub fn parse_os(token: &OsStr) -> Option<Self> {
        token.to_str().and_then(Self::parse)
    }

    fn id(self) -> &'static str {
        self.long().trim_start_matches('-')
    }

    fn short_char(self) -> char {
        self.short().chars().nth(1).unwrap_or_default()
    }

    fn value_name(self) -> Option<&'static str> {
        match self {
            Self::Config => Some("FILE"),
            Self::UrlPath => Some("URLPATH"),
            Self::Show | Self::Help => None,
        }
    }

    fn help(self) -> &'static str {
        match self {
            Self::Config => {
                "Select a different config file from the default, which is \
                 $HOME/.jerry-curl/jerry-curl.config (example: jerry-curl --config ./my-custom-config)"
            }
            Self::Show => "Show the curl command - DO NOT EXECUTE IT",
            Self::UrlPath => {
                "Set a path to append to the base URL (example: jerry-curl --url-path /app/path/here)"
            }
            Self::Help => "Print help, aka this message",
        }
    }
}

const ABOUT: &str = "jerry-curl is a wrapper for the curl command which adds options from a \
configuration file and the command line, allowing for short repeated curl calls.

jerry-curl works by calling curl like the below:
  curl [config options] [command-line arguments] [BASE][URLPATH]";

const NOTES: &str = "Note: options --config, -c, -s and -u are used by both jerry-curl and curl. If you want \
those sent to curl, please use their alternate forms (-K, --cookie-jar, --silent, --user). Using --show \
can help diagnose whether jerry-curl or curl is receiving a command-line option.

If no config file exists, one will be created with commented examples in a directory named \
.jerry-curl in your home directory when jerry-curl is run for the first time.";

/// A `clap` description of the wrapper options.
///
/// `clap` is not used to parse the command line, since everything it doesn't recognize has to
/// flow through to curl untouched and in order; it only renders the help text so the option table
/// and the help output can't drift apart.
pub fn help_command() -> Command {
    let usage = "jerry-curl [-h|--help]\n       \
                 jerry-curl [jerry-curl options] [optional arguments for curl]";

    WrapperFlag::ALL.into_iter().fold(
        Command::new("jerry-curl")
            .about(ABOUT)
            .override_usage(usage)
            .after_help(NOTES)
            .disable_help_flag(true)
            .disable_version_flag(true),
        |cmd, flag| {
            let arg = Arg::new(flag.id())
                .short(flag.short_char())
                .long(flag.id())
                .help(flag.help());
            let arg = match flag.value_name() {
                Some(value_name) => arg.value_name(value_name).action(ArgAction::Set),
                None => arg.action(ArgAction::SetTrue),
            };
            cmd.arg(arg)
        },
    )
}

/// The static help text printed for `-h` / `--help`.
pub fn help_text() -> String {
    help_command().render_help().to_string()
}
