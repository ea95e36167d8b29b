//! Tracing subscriber setup.
//!
//! Library crates only emit events; the binary installs the subscriber.
//!
//! - `RUST_LOG` overrides the default filter (e.g. `lexiclear_matcher=trace`)
//! - `LEXICLEAR_LOG_JSON=1` (or `true`) selects JSON output
//!
//! Events go to stderr so exported text on stdout stays clean.

use lexiclear_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable selecting JSON output.
pub const JSON_ENV_VAR: &str = "LEXICLEAR_LOG_JSON";

/// Installs the global subscriber.
///
/// `default_level` applies when `RUST_LOG` is unset.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn setup_logging(json: bool, default_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init()
    };

    installed.map_err(|e| Error::new(ErrorKind::Internal(format!("cannot install logger: {e}"))))
}

/// Returns true if JSON logging is requested via [`JSON_ENV_VAR`].
#[must_use]
pub fn should_use_json() -> bool {
    std::env::var(JSON_ENV_VAR).is_ok_and(|v| json_flag(&v))
}

fn json_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
