// SampleData - Config-driven synthetic dataset generator
//
// This is the library crate containing the pipeline stages and data structures.
// The binary crate (main.rs) wires them together with logging and settings.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigManager, SettingsSource, parse_config};
pub use metrics::PipelineMetrics;
pub use models::{FieldCheck, PipelineSettings, SampleConfig, Statistics, ValidationReport};
pub use services::{
    GenerationError, calculate_statistics, generate_sample_data, run_pipeline, validate_config,
};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
