//! Quickstart example with fixed readings
//!
//! Runs a short bounded session against a static probe so the output is
//! predictable. Swap in `SysinfoProbe::new()` for real host readings.

use std::sync::Arc;
use std::time::Duration;
use syspulse_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let session = SessionConfig::new(Duration::from_secs(1), Some(Duration::from_secs(3)))?;
    let monitor = Monitor::new(
        Arc::new(StaticProbe::new(12.5, 48.0)),
        Arc::new(ConsoleSink::new()),
        session,
    );

    let outcome = monitor.run(CancellationToken::new()).await;
    println!(
        "wrote {} samples in {:?}",
        outcome.samples, outcome.elapsed
    );

    Ok(())
}
