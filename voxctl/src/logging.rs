//! Log setup for the command-line front end

use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by `RUST_LOG`
///
/// Command output goes to stdout, so logs never mix with it.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}
