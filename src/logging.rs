use std::io::IsTerminal;

/// Environment variable holding a `jerry-curl`-specific tracing filter.
pub(crate) const LOG_ENV_VAR: &str = "JERRY_CURL_LOG";

/// Filter used when neither [`LOG_ENV_VAR`] nor `RUST_LOG` is set.
///
/// `jerry-curl` should be silent on the happy path; its output is curl's output.
const DEFAULT_TRACING_FILTER: &str = "warn";

/// Initialize tracing/logging.
///
/// There is no `-v` style verbosity flag: every short flag `jerry-curl` could claim already means
/// something to curl.  Log filtering is therefore controlled entirely by environment variables,
/// in priority order:
/// 1. `JERRY_CURL_LOG`
/// 2. `RUST_LOG`
/// 3. The hard-coded default of WARN and above
///
/// With no filter configured the output is just the level and the message, one per line.  When
/// the user asked for logging explicitly the target is included as well.
///
/// # Panics
///
/// This function will panic if called more than once in the same process, as the
/// global tracing subscriber can only be initialized once.
pub(crate) fn init() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let explicit = EnvFilter::try_from_env(LOG_ENV_VAR).or_else(|_| EnvFilter::try_from_default_env());
    let use_simple_format = explicit.is_err();
    let filter = explicit.unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));

    // Everything goes to stderr; stdout belongs to curl
    let use_ansi = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(!use_simple_format)
                .with_level(true)
                .with_ansi(use_ansi)
                .without_time(),
        )
        .init();
}

/// Initialize tracing for tests with sensible defaults.
///
/// Uses `with_test_writer()` so that log output only shows up for failing tests, and a
/// [`std::sync::OnceLock`] so it is safe to call from every test that wants logging.
///
/// Defaults to DEBUG level, but can be overridden by setting `JERRY_CURL_LOG` or `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    use std::sync::OnceLock;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: OnceLock<()> = OnceLock::new();

    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_level(true)
            .init();
    });
}
