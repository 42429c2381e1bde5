//! Fanout sink

use super::RecordSink;
use crate::error::{MonitorError, Result};
use crate::sample::Record;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Sink duplicating each record to every child sink
///
/// Writes are best-effort: a failing child is skipped with a warning and the
/// remaining children still receive the record. The write only fails when
/// every child failed.
pub struct FanoutSink {
    sinks: Vec<Arc<dyn RecordSink>>,
}

impl FanoutSink {
    /// Create a fanout over the given sinks
    pub fn new(sinks: Vec<Arc<dyn RecordSink>>) -> Self {
        Self { sinks }
    }
}

#[async_trait]
impl RecordSink for FanoutSink {
    async fn write(&self, record: &Record) -> Result<()> {
        if self.sinks.is_empty() {
            return Ok(());
        }

        let mut delivered = 0usize;
        let mut last_error = None;
        for sink in &self.sinks {
            match sink.write(record).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    warn!("Record sink write failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if delivered == 0 => Err(MonitorError::Sink(format!(
                "all {} sinks failed, last error: {}",
                self.sinks.len(),
                e
            ))),
            _ => Ok(()),
        }
    }
}
