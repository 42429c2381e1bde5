//! # Syspulse - Periodic Host Performance Monitoring
//!
//! Syspulse samples host CPU and memory utilization at a fixed cadence and
//! writes timestamped records to pluggable sinks, running until a configured
//! duration elapses, the user interrupts it, or a fatal error occurs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use syspulse_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Sample every five seconds for one minute
//!     let session = SessionConfig::new(Duration::from_secs(5), Some(Duration::from_secs(60)))?;
//!     let monitor = Monitor::new(
//!         Arc::new(SysinfoProbe::new()),
//!         Arc::new(ConsoleSink::new()),
//!         session,
//!     );
//!
//!     let outcome = monitor.run(CancellationToken::new()).await;
//!     println!("wrote {} samples in {:?}", outcome.samples, outcome.elapsed);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Probes** ([`probe::MetricsProbe`]) read utilization from the host via
//!   `sysinfo`, or return fixed values for tests.
//! - **Sinks** ([`sink::RecordSink`]) receive rendered records; the file and
//!   console sinks are usually combined through a fanout.
//! - **Monitor** ([`monitor::Monitor`]) drives the sampling loop and writes
//!   exactly one closing record on every termination path.

pub mod config;
pub mod error;
pub mod monitor;
pub mod probe;
pub mod sample;
pub mod sink;

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use tokio_util::sync::CancellationToken;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::CancellationToken;
    pub use crate::config::{MonitorConfig, SessionConfig};
    pub use crate::error::{MonitorError, Result};
    pub use crate::monitor::{Monitor, SessionOutcome, StopReason};
    pub use crate::probe::{MetricsProbe, StaticProbe, SysinfoProbe};
    pub use crate::sample::{Record, RecordKind, Sample, TIMESTAMP_FORMAT};
    pub use crate::sink::{ConsoleSink, FanoutSink, FileSink, MemorySink, RecordSink};
}
