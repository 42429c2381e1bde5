//! Console sink

use super::RecordSink;
use crate::error::Result;
use crate::sample::Record;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Sink writing one line per record to standard output
///
/// Records own stdout; diagnostics go to the tracing subscriber on stderr.
pub struct ConsoleSink {
    stdout: Mutex<tokio::io::Stdout>,
}

impl ConsoleSink {
    /// Create a new console sink
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSink for ConsoleSink {
    async fn write(&self, record: &Record) -> Result<()> {
        let mut stdout = self.stdout.lock().await;
        stdout.write_all(format!("{}\n", record).as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}
