use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: u8) -> Result<()> {
    // RUST_LOG overrides -v. Library parse events are debug/trace, so -v
    // is needed to see the unknown-suffix fallback. Logs go to stderr;
    // stdout carries only the converted values so it can be piped.
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    Ok(())
}
