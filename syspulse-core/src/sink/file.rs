//! File sink

use super::RecordSink;
use crate::error::Result;
use crate::sample::Record;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Sink appending one line per record to a log file
///
/// The file is opened at construction, created if absent, and closed on
/// drop. Every write is flushed so an aborted run loses at most the
/// in-flight record.
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open the log file at `path` for appending, creating it and its parent
    /// directories if needed
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSink for FileSink {
    async fn write(&self, record: &Record) -> Result<()> {
        let mut file = self.file.lock().await;
        file.write_all(format!("{}\n", record).as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
