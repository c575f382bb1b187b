//! Runtime configuration loaded with figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables with the `TIMESHEET_` prefix (`__` separates
//!    nested sections, e.g. `TIMESHEET_LATENCY__READ_MS=0`)
//! 2. Built-in defaults

use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::WeekCalendar;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

const fn default_year() -> i32 {
    2025
}

const fn default_weeks() -> u32 {
    52
}

const fn default_channel_buffer() -> usize {
    32
}

const fn default_weeks_per_page() -> usize {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimesheetConfig {
    /// Year whose week numbering anchors seed data and summaries.
    #[serde(default = "default_year")]
    pub year: i32,

    /// Number of weeks generated and summarised.
    #[serde(default = "default_weeks")]
    pub weeks: u32,

    /// Fixed seed for reproducible demo data. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Capacity of the entry store's request channel.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,

    #[serde(default = "default_weeks_per_page")]
    pub weeks_per_page: usize,

    /// Reject zero hours and out-of-range week numbers on create/update.
    #[serde(default)]
    pub validate_bounds: bool,

    #[serde(default)]
    pub latency: LatencyConfig,
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            weeks: default_weeks(),
            seed: None,
            channel_buffer: default_channel_buffer(),
            weeks_per_page: default_weeks_per_page(),
            validate_bounds: false,
            latency: LatencyConfig::default(),
        }
    }
}

impl TimesheetConfig {
    /// Load from defaults and `TIMESHEET_*` environment variables, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("TIMESHEET_").split("__"))
    }

    /// No simulated latency and a fixed seed.
    pub fn for_tests() -> Self {
        Self {
            seed: Some(2025),
            latency: LatencyConfig::zero(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if WeekCalendar::new(self.year).is_none() {
            return Err(invalid("year", "outside the supported date range"));
        }
        if self.weeks == 0 {
            return Err(invalid("weeks", "must be at least 1"));
        }
        if self.channel_buffer == 0 {
            return Err(invalid("channel_buffer", "must be at least 1"));
        }
        if self.weeks_per_page == 0 {
            return Err(invalid("weeks_per_page", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Simulated round-trip delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LatencyConfig {
    pub read_ms: u64,
    pub write_ms: u64,
    pub delete_ms: u64,
    pub login_ms: u64,
    pub logout_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            read_ms: 300,
            write_ms: 400,
            delete_ms: 300,
            login_ms: 500,
            logout_ms: 200,
        }
    }
}

impl LatencyConfig {
    pub fn zero() -> Self {
        Self {
            read_ms: 0,
            write_ms: 0,
            delete_ms: 0,
            login_ms: 0,
            logout_ms: 0,
        }
    }

    pub fn read(&self) -> Duration {
        Duration::from_millis(self.read_ms)
    }

    pub fn write(&self) -> Duration {
        Duration::from_millis(self.write_ms)
    }

    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn logout(&self) -> Duration {
        Duration::from_millis(self.logout_ms)
    }
}

/// Wait out a simulated delay. Zero returns immediately.
pub async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = TimesheetConfig::default();
        assert_eq!(config.year, 2025);
        assert_eq!(config.weeks, 52);
        assert_eq!(config.weeks_per_page, 5);
        assert!(config.seed.is_none());
        assert!(!config.validate_bounds);
        assert_eq!(config.latency.login(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_figment_extracts_defaults() {
        Jail::expect_with(|_jail| {
            let config: TimesheetConfig = TimesheetConfig::figment().extract()?;
            assert_eq!(config, TimesheetConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("TIMESHEET_YEAR", "2024");
            jail.set_env("TIMESHEET_SEED", "99");
            jail.set_env("TIMESHEET_LATENCY__READ_MS", "0");
            let config: TimesheetConfig = TimesheetConfig::figment().extract()?;
            assert_eq!(config.year, 2024);
            assert_eq!(config.seed, Some(99));
            assert_eq!(config.latency.read_ms, 0);
            assert_eq!(config.latency.write_ms, 400);
            Ok(())
        });
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = TimesheetConfig {
            weeks: 0,
            ..TimesheetConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "weeks"
        ));

        let config = TimesheetConfig {
            weeks_per_page: 0,
            ..TimesheetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_zero_latency_returns_immediately() {
        let started = std::time::Instant::now();
        simulate_latency(LatencyConfig::zero().read()).await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
