//! Metrics probes for host utilization readings

use crate::error::{MonitorError, Result};
use async_trait::async_trait;
use std::time::Duration;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tokio::sync::Mutex;

/// Default CPU measurement window
pub const DEFAULT_CPU_WINDOW: Duration = Duration::from_secs(1);

/// Trait for reading host utilization
#[async_trait]
pub trait MetricsProbe: Send + Sync {
    /// Current CPU utilization percentage (0.0-100.0)
    async fn cpu_percent(&self) -> Result<f64>;

    /// Current memory utilization percentage (0.0-100.0)
    async fn memory_percent(&self) -> Result<f64>;
}

/// Probe backed by the `sysinfo` crate
///
/// CPU utilization needs two refreshes separated by a measurement window;
/// the window is therefore part of each sampling iteration's latency. It is
/// never shorter than [`sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`].
pub struct SysinfoProbe {
    system: Mutex<System>,
    cpu_window: Duration,
}

impl SysinfoProbe {
    /// Create a probe with the default one-second CPU window
    pub fn new() -> Self {
        Self::with_cpu_window(DEFAULT_CPU_WINDOW)
    }

    /// Create a probe with a custom CPU measurement window
    pub fn with_cpu_window(cpu_window: Duration) -> Self {
        let refresh = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());
        Self {
            system: Mutex::new(System::new_with_specifics(refresh)),
            cpu_window: cpu_window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsProbe for SysinfoProbe {
    async fn cpu_percent(&self) -> Result<f64> {
        let mut system = self.system.lock().await;
        system.refresh_cpu_usage();
        tokio::time::sleep(self.cpu_window).await;
        system.refresh_cpu_usage();
        Ok(f64::from(system.global_cpu_usage()))
    }

    async fn memory_percent(&self) -> Result<f64> {
        let mut system = self.system.lock().await;
        system.refresh_memory();
        let total = system.total_memory();
        if total == 0 {
            return Err(MonitorError::Probe(
                "total memory reported as zero".to_string(),
            ));
        }
        Ok(system.used_memory() as f64 / total as f64 * 100.0)
    }
}

/// Fixed-reading probe for examples and tests
pub struct StaticProbe {
    cpu_percent: f64,
    memory_percent: f64,
}

impl StaticProbe {
    /// Create a probe that always returns the given percentages
    pub fn new(cpu_percent: f64, memory_percent: f64) -> Self {
        Self {
            cpu_percent,
            memory_percent,
        }
    }
}

#[async_trait]
impl MetricsProbe for StaticProbe {
    async fn cpu_percent(&self) -> Result<f64> {
        Ok(self.cpu_percent)
    }

    async fn memory_percent(&self) -> Result<f64> {
        Ok(self.memory_percent)
    }
}
