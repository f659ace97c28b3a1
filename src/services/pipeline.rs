//! End-to-end pipeline: load, validate, generate, re-read, summarize, report.

use crate::config::parse_config;
use crate::metrics::PipelineMetrics;
use crate::models::{PipelineSettings, Statistics, ValidationReport};
use crate::services::generation::generate_sample_data;
use crate::services::statistics::{calculate_statistics, read_dataset, write_report};
use crate::services::validation::validate_config;
use anyhow::Result;
use camino::Utf8PathBuf;

/// Outcome of a successful pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub validation: ValidationReport,
    pub rows_written: usize,
    pub statistics: Statistics,
    pub report_path: Utf8PathBuf,
}

/// Run the whole pipeline with the given settings.
///
/// Validation failures are logged as warnings and do not stop generation.
///
/// # Errors
/// Fails if the config file is missing, dataset generation fails (including an
/// invalid range), or any file cannot be read or written.
pub fn run_pipeline(
    settings: &PipelineSettings,
    metrics: &mut PipelineMetrics,
) -> Result<PipelineRun> {
    let config = metrics.time_stage("load", || parse_config(&settings.config_path))?;

    let validation = metrics.time_stage("validate", || validate_config(&config));
    let failing = validation.failing_fields();
    metrics.invalid_fields = failing.len();
    if !failing.is_empty() {
        tracing::warn!("Config validation failed for: {}", failing.join(", "));
    }

    let rows_written = metrics.time_stage("generate", || {
        generate_sample_data(&settings.data_path, &config)
    })?;
    metrics.rows_generated = rows_written;

    let values = metrics.time_stage("read", || read_dataset(&settings.data_path))?;
    metrics.values_read = values.len();

    let statistics = metrics.time_stage("statistics", || calculate_statistics(&values));

    metrics.time_stage("report", || write_report(&settings.output_path, &statistics))?;

    Ok(PipelineRun {
        validation,
        rows_written,
        statistics,
        report_path: settings.output_path.clone(),
    })
}
