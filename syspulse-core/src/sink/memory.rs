//! In-memory sink for testing

use super::RecordSink;
use crate::error::Result;
use crate::sample::Record;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Sink storing records in memory, for tests that assert on the exact
/// record sequence
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    /// Create an empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All records written so far, in write order
    pub async fn records(&self) -> Vec<Record> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn write(&self, record: &Record) -> Result<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }
}
