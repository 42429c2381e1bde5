//! Record sinks
//!
//! Sinks receive rendered monitoring records, one line per record. They are
//! constructed once at session start and injected into the sampling loop
//! rather than reached through any global logger state.

pub mod console;
pub mod fanout;
pub mod file;
pub mod memory;


pub use console::ConsoleSink;
pub use fanout::FanoutSink;
pub use file::FileSink;
pub use memory::MemorySink;

use crate::error::Result;
use crate::sample::Record;
use async_trait::async_trait;

/// Trait for monitoring record destinations
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Write a single record
    async fn write(&self, record: &Record) -> Result<()>;
}
