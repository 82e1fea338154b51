//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the engine's YAML configuration file. Every field
//! has a default carrying the business constants, so a missing file or a
//! partial file still yields a working engine.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

fn default_start_day() -> u32 {
    10
}

fn default_shifts_per_cycle() -> u32 {
    24
}

fn default_excellent() -> Decimal {
    Decimal::new(95, 2)
}

fn default_good() -> Decimal {
    Decimal::new(75, 2)
}

fn default_acceptable() -> Decimal {
    Decimal::new(50, 2)
}

/// Pay cycle configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CycleConfig {
    /// The day of the month a new pay cycle starts on. A cycle runs from
    /// this day through the day before it in the following month. Must be
    /// between 1 and 28 so every month has the boundary day.
    #[serde(default = "default_start_day")]
    pub start_day: u32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            start_day: default_start_day(),
        }
    }
}

/// Ratio thresholds for the performance tiers.
///
/// Each threshold is the inclusive lower bound of its tier; anything below
/// the acceptable bound grades as late.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceBands {
    /// Minimum worked-hours ratio for the excellent tier.
    #[serde(default = "default_excellent")]
    pub excellent: Decimal,
    /// Minimum worked-hours ratio for the good tier.
    #[serde(default = "default_good")]
    pub good: Decimal,
    /// Minimum worked-hours ratio for the acceptable tier.
    #[serde(default = "default_acceptable")]
    pub acceptable: Decimal,
}

impl Default for PerformanceBands {
    fn default() -> Self {
        Self {
            excellent: default_excellent(),
            good: default_good(),
            acceptable: default_acceptable(),
        }
    }
}

/// Performance grading configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceConfig {
    /// The number of shifts an employee is expected to work per cycle.
    /// The grading target is this count times the employee's standard
    /// shift length, regardless of the cycle's actual length in days.
    #[serde(default = "default_shifts_per_cycle")]
    pub shifts_per_cycle: u32,
    /// The tier thresholds.
    #[serde(default)]
    pub bands: PerformanceBands,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            shifts_per_cycle: default_shifts_per_cycle(),
            bands: PerformanceBands::default(),
        }
    }
}

/// The complete engine configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.cycle.start_day, 10);
/// assert_eq!(config.performance.shifts_per_cycle, 24);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Pay cycle settings.
    #[serde(default)]
    pub cycle: CycleConfig,
    /// Performance grading settings.
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl EngineConfig {
    /// Checks that every configured value is within its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the offending field
    /// when a value is out of range or the tier thresholds are not strictly
    /// descending.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=28).contains(&self.cycle.start_day) {
            return Err(EngineError::InvalidConfig {
                field: "cycle.start_day".to_string(),
                message: "must be between 1 and 28".to_string(),
            });
        }

        if self.performance.shifts_per_cycle == 0 {
            return Err(EngineError::InvalidConfig {
                field: "performance.shifts_per_cycle".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let bands = &self.performance.bands;
        if bands.acceptable <= Decimal::ZERO
            || bands.good <= bands.acceptable
            || bands.excellent <= bands.good
        {
            return Err(EngineError::InvalidConfig {
                field: "performance.bands".to_string(),
                message: "thresholds must be positive and strictly descending".to_string(),
            });
        }

        Ok(())
    }
}
