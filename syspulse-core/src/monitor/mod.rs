//! The sampling loop
//!
//! [`Monitor`] drives one monitoring session: it writes an opening record,
//! samples the probe at a fixed cadence, writes each sample to the sink, and
//! stops when the configured duration elapses, cancellation is requested, or
//! a fatal error occurs. Every termination path writes exactly one closing
//! record.


use crate::config::SessionConfig;
use crate::error::Result;
use crate::probe::MetricsProbe;
use crate::sample::{Record, Sample};
use crate::sink::RecordSink;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const MSG_STARTING: &str = "Starting system performance monitoring.";
const MSG_STOPPED_BY_USER: &str = "Monitoring stopped by user.";
const MSG_ENDED: &str = "System performance monitoring ended.";

/// Why a monitoring session stopped
#[derive(Debug)]
pub enum StopReason {
    /// The configured duration elapsed
    DurationElapsed,

    /// Cancellation was requested, normally by Ctrl-C
    Interrupted,

    /// A probe failure or data-record write failure ended the session
    Faulted(crate::error::MonitorError),
}

/// Summary of a finished monitoring session
#[derive(Debug)]
pub struct SessionOutcome {
    /// Why the session stopped
    pub reason: StopReason,

    /// Number of data records written
    pub samples: u64,

    /// Time from the first sampling iteration to the stop
    pub elapsed: Duration,
}

impl SessionOutcome {
    /// Whether the session ended without a fault
    pub fn is_clean(&self) -> bool {
        !matches!(self.reason, StopReason::Faulted(_))
    }
}

/// Outcome of a single sampling iteration
enum LoopControl {
    /// Keep sampling
    Continue,

    /// The configured duration has elapsed
    Finished,

    /// Cancellation was requested
    Interrupted,
}

/// Drives one monitoring session over a probe and a sink
pub struct Monitor {
    probe: Arc<dyn MetricsProbe>,
    sink: Arc<dyn RecordSink>,
    session: SessionConfig,
}

impl Monitor {
    /// Create a monitor over the given probe and sink
    pub fn new(
        probe: Arc<dyn MetricsProbe>,
        sink: Arc<dyn RecordSink>,
        session: SessionConfig,
    ) -> Self {
        Self {
            probe,
            sink,
            session,
        }
    }

    /// Run the session until the configured duration elapses, `shutdown` is
    /// cancelled, or a fatal error occurs.
    ///
    /// The spacing between consecutive data records is the configured
    /// interval plus the probe's own measurement latency; each wait starts
    /// after the record is written, so the spacing stays bounded over the
    /// run. Session-boundary records are written best-effort; a failed write
    /// of a data record is fatal.
    pub async fn run(&self, shutdown: CancellationToken) -> SessionOutcome {
        self.write_boundary(Record::message(MSG_STARTING)).await;

        let started = Instant::now();
        let mut samples = 0u64;

        let reason = loop {
            match self.step(started, &mut samples, &shutdown).await {
                Ok(LoopControl::Continue) => continue,
                Ok(LoopControl::Finished) => {
                    let secs = self.session.duration().unwrap_or_default().as_secs();
                    self.write_boundary(Record::message(format!(
                        "Monitoring finished after {} seconds.",
                        secs
                    )))
                    .await;
                    break StopReason::DurationElapsed;
                }
                Ok(LoopControl::Interrupted) => {
                    self.write_boundary(Record::message(MSG_STOPPED_BY_USER))
                        .await;
                    break StopReason::Interrupted;
                }
                Err(e) => {
                    self.write_boundary(Record::error(e.to_string())).await;
                    break StopReason::Faulted(e);
                }
            }
        };

        self.write_boundary(Record::message(MSG_ENDED)).await;

        SessionOutcome {
            reason,
            samples,
            elapsed: started.elapsed(),
        }
    }

    /// One iteration: sample, write the record, then either finish or wait
    /// out the interval.
    async fn step(
        &self,
        started: Instant,
        samples: &mut u64,
        shutdown: &CancellationToken,
    ) -> Result<LoopControl> {
        let sample = tokio::select! {
            biased;
            _ = shutdown.cancelled() => return Ok(LoopControl::Interrupted),
            sample = self.sample() => sample?,
        };

        self.sink.write(&Record::from(sample)).await?;
        *samples += 1;

        if let Some(duration) = self.session.duration() {
            if started.elapsed() >= duration {
                return Ok(LoopControl::Finished);
            }
        }

        tokio::select! {
            biased;
            _ = shutdown.cancelled() => Ok(LoopControl::Interrupted),
            _ = tokio::time::sleep(self.session.interval()) => Ok(LoopControl::Continue),
        }
    }

    /// Probe CPU then memory and stamp the reading.
    async fn sample(&self) -> Result<Sample> {
        let cpu = self.probe.cpu_percent().await?;
        let memory = self.probe.memory_percent().await?;
        let sample = Sample::new(cpu, memory);
        debug!(
            cpu_percent = sample.cpu_percent,
            memory_percent = sample.memory_percent,
            "Collected sample"
        );
        Ok(sample)
    }

    /// Write a session-boundary record, logging instead of failing.
    async fn write_boundary(&self, record: Record) {
        if let Err(e) = self.sink.write(&record).await {
            warn!("Failed to write session record: {}", e);
        }
    }
}
