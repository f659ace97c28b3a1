//! Services module - The four pipeline stages and the driver that chains them.
//!
//! # Components
//!
//! - [`validate_config`]: Pure per-field range checks. Never fails; failing fields are
//!   reported in a [`ValidationReport`](crate::models::ValidationReport).
//! - [`generate_sample_data`]: Writes `rows` uniformly random integers in `[min, max]`,
//!   one per line. Absent fields default to 100/1/100; `max < min` is rejected with
//!   [`GenerationError::InvalidRange`] before anything is written.
//! - [`calculate_statistics`]: Mean, median, sum and count of a dataset.
//! - [`run_pipeline`]: Load → validate → generate → re-read → summarize → report.
//!
//! # Usage Example
//!
//! ```ignore
//! use sampledata::config::parse_config;
//! use sampledata::services::{calculate_statistics, generate_sample_data, read_dataset};
//!
//! let config = parse_config("q2_config.txt")?;
//! generate_sample_data("data/sample_data.csv", &config)?;
//! let stats = calculate_statistics(&read_dataset("data/sample_data.csv")?);
//! ```

pub mod generation;
pub mod pipeline;
pub mod statistics;
pub mod validation;

pub use generation::{
    GenerationError, GenerationParams, generate_sample_data, generate_sample_data_with_rng,
};
pub use pipeline::{PipelineRun, run_pipeline};
pub use statistics::{calculate_statistics, parse_value, read_dataset, write_report};
pub use validation::validate_config;
