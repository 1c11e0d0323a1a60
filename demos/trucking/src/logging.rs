//! Structured logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr `tracing` subscriber.
///
/// `HAUL_LOG` (or `RUST_LOG`) wins over the flag; otherwise `-v` selects
/// debug output for the `haul_*` crates and the binary, and the default is
/// warnings only.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("HAUL_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "trucking={level},haul_core={level},haul_network={level},haul_route={level}"
            ))
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
