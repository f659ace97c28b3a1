//! Data models for the sample data pipeline.
//!
//! This module contains the core data structures passed between pipeline stages:
//! - [`SampleConfig`]: Raw `key=value` entries parsed from `q2_config.txt`
//! - [`ValidationReport`]: Per-field outcome of checking the three numeric fields
//! - [`Statistics`]: Aggregate summary (mean, median, sum, count) of a dataset
//! - [`PipelineSettings`]: File locations and logging options from `q2_settings.yaml`
//!
//! # Architecture Note
//!
//! Every model is created once by its producing stage and never mutated afterwards.
//! Settings and statistics derive `Serialize` for YAML persistence and console output.

pub mod config;
pub mod settings;
pub mod statistics;

pub use config::{FieldCheck, MAX_KEY, MIN_KEY, ROWS_KEY, SampleConfig, ValidationReport};
pub use settings::PipelineSettings;
pub use statistics::Statistics;
