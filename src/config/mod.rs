//! Configuration loading and management for the Attendance and Payroll Engine.
//!
//! This module provides the engine's tunable business constants — the pay
//! cycle boundary day and the performance grading thresholds — loaded from a
//! YAML file, with defaults matching the standard 10th-to-9th cycle.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load("./config/payroll.yaml").unwrap();
//! println!("Cycle starts on day {}", config.cycle.start_day);
//! ```

mod loader;
mod types;

pub use types::{CycleConfig, EngineConfig, PerformanceBands, PerformanceConfig};
