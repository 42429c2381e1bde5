//! Syspulse CLI - periodic host CPU/memory monitor

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use syspulse_core::prelude::*;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "syspulse")]
#[command(about = "Monitor host CPU and memory utilization", long_about = None)]
#[command(version)]
struct Cli {
    /// Log file path
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Seconds between samples
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    interval: Option<u64>,

    /// Total monitoring duration in seconds (omit to run until interrupted)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    duration: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing; records own stdout, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) if outcome.is_clean() => ExitCode::SUCCESS,
        Ok(outcome) => {
            if let StopReason::Faulted(e) = &outcome.reason {
                error!("Monitoring failed: {}", e);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<SessionOutcome> {
    let mut config = MonitorConfig::load().context("failed to load configuration")?;
    if let Some(file) = cli.file {
        config.log_file = file;
    }
    if let Some(interval) = cli.interval {
        config.interval = Duration::from_secs(interval);
    }
    if let Some(duration) = cli.duration {
        config.duration = Some(Duration::from_secs(duration));
    }
    let session = config.session()?;

    let file_sink = FileSink::open(&config.log_file)
        .await
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;
    let sink = FanoutSink::new(vec![
        Arc::new(file_sink) as Arc<dyn RecordSink>,
        Arc::new(ConsoleSink::new()),
    ]);
    info!("Logging to: {}", config.log_file.display());

    let monitor = Monitor::new(Arc::new(SysinfoProbe::new()), Arc::new(sink), session);

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => signal_token.cancel(),
            Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
        }
    });

    let outcome = monitor.run(shutdown).await;
    info!(
        "Session ended: {} samples in {:?}",
        outcome.samples, outcome.elapsed
    );
    Ok(outcome)
}
