//! Logging setup
//!
//! Diagnostics go through the `log` facade to stderr. `RUST_LOG` takes
//! precedence over the verbosity flag.

use env_logger::{Builder, Env};

/// Install the global logger
///
/// Defaults to `warn`, or `info` when `verbose` is set. Calling this more than
/// once is harmless.
pub fn init(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let _ = Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
