//! Configuration types for the monitor

use crate::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration for the monitor
///
/// Durations are written in humantime form (`"5s"`, `"2m"`) in the
/// configuration file and environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Path of the performance log file
    pub log_file: PathBuf,

    /// Delay between samples
    #[serde(with = "humantime_serde")]
    pub interval: Duration,

    /// Total monitoring duration (absent means run until interrupted)
    #[serde(default, with = "humantime_serde")]
    pub duration: Option<Duration>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("system_performance.log"),
            interval: Duration::from_secs(5),
            duration: None,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from file and environment variables.
    ///
    /// Loads in this order:
    /// 1. Default configuration
    /// 2. Configuration file (syspulse.toml or path from SYSPULSE_CONFIG_PATH)
    /// 3. Environment variable overrides (SYSPULSE_ prefix)
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration source is invalid.
    pub fn load() -> Result<Self> {
        use figment::{
            Figment,
            providers::{Env, Format, Serialized, Toml},
        };

        let mut figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("syspulse.toml"))
            .merge(Env::prefixed("SYSPULSE_"));

        // Check for custom config path
        if let Ok(path) = std::env::var("SYSPULSE_CONFIG_PATH") {
            figment = figment.merge(Toml::file(path));
        }

        let config: MonitorConfig = figment.extract().map_err(|e| {
            MonitorError::Configuration(format!("Failed to load configuration: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or fails validation.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        use figment::{
            Figment,
            providers::{Format, Serialized, Toml},
        };

        let config: MonitorConfig = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| {
                MonitorError::Configuration(format!("Failed to load configuration file: {}", e))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Build the validated session cadence handed to the sampling loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval or duration is zero.
    pub fn session(&self) -> Result<SessionConfig> {
        SessionConfig::new(self.interval, self.duration)
    }

    fn validate(&self) -> Result<()> {
        self.session().map(|_| ())
    }
}

/// Validated sampling cadence for one monitoring session
///
/// Construction rejects a zero interval or duration, so the sampling loop
/// never sees an invalid cadence.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    interval: Duration,
    duration: Option<Duration>,
}

impl SessionConfig {
    /// Create a session configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `interval` is zero or `duration` is `Some(0)`.
    pub fn new(interval: Duration, duration: Option<Duration>) -> Result<Self> {
        if interval.is_zero() {
            return Err(MonitorError::Configuration(
                "interval must be greater than zero".to_string(),
            ));
        }
        if duration.is_some_and(|d| d.is_zero()) {
            return Err(MonitorError::Configuration(
                "duration must be greater than zero".to_string(),
            ));
        }
        Ok(Self { interval, duration })
    }

    /// Delay between samples
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total monitoring duration, if bounded
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.log_file, PathBuf::from("system_performance.log"));
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.duration, None);
    }

    #[test]
    fn test_session_rejects_zero_interval() {
        let result = SessionConfig::new(Duration::ZERO, None);
        assert!(matches!(result, Err(MonitorError::Configuration(_))));
    }

    #[test]
    fn test_session_rejects_zero_duration() {
        let result = SessionConfig::new(Duration::from_secs(5), Some(Duration::ZERO));
        assert!(matches!(result, Err(MonitorError::Configuration(_))));
    }

    #[test]
    fn test_session_accepts_unbounded_duration() {
        let session = SessionConfig::new(Duration::from_secs(5), None).unwrap();
        assert_eq!(session.interval(), Duration::from_secs(5));
        assert_eq!(session.duration(), None);
    }

    #[test]
    fn test_from_file_parses_humantime_durations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syspulse.toml");
        std::fs::write(
            &path,
            "log_file = \"perf.log\"\ninterval = \"2s\"\nduration = \"1m\"\n",
        )
        .unwrap();

        let config = MonitorConfig::from_file(&path).unwrap();
        assert_eq!(config.log_file, PathBuf::from("perf.log"));
        assert_eq!(config.interval, Duration::from_secs(2));
        assert_eq!(config.duration, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_from_file_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MonitorConfig::from_file(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.interval, Duration::from_secs(5));
    }

    #[test]
    fn test_from_file_rejects_zero_interval() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("syspulse.toml");
        std::fs::write(&path, "interval = \"0s\"\n").unwrap();

        let result = MonitorConfig::from_file(&path);
        assert!(matches!(result, Err(MonitorError::Configuration(_))));
    }
}
