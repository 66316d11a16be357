//! Terminal plumbing shared by the `expense-tracker` and `task-tracker`
//! binaries: output rendering and log setup. Nothing below `api` depends on it.

pub mod print;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// Defaults to `warn`; `--verbose` raises this crate to `debug`. `RUST_LOG`
/// overrides both.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "warn,tally=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
